//! Candidates command
//!
//! Shows which dictionary words can serve as rows and how large the resulting
//! search space is.

use crate::config::Puzzle;
use crate::core::Dictionary;
use crate::solver::{BoardEnumerator, CandidateGenerator, WildcardPlacement, WordCandidate};

/// Result of generating the candidate pool
pub struct CandidateReport<const N: usize> {
    pub dictionary_size: usize,
    pub candidates: Vec<WordCandidate<N>>,
    /// Boards the search would enumerate, `None` if too large to index
    pub search_space: Option<u128>,
}

impl<const N: usize> CandidateReport<N> {
    #[must_use]
    pub fn wildcard_rows(&self) -> usize {
        self.candidates.iter().filter(|c| c.used_wildcard()).count()
    }
}

/// Generate the candidate pool for `puzzle` over `dictionary`
#[must_use]
pub fn list_candidates<const N: usize>(
    puzzle: &Puzzle<N>,
    dictionary: &Dictionary<N>,
    placement: WildcardPlacement,
) -> CandidateReport<N> {
    let candidates = CandidateGenerator::new(&puzzle.inventory)
        .with_placement(placement)
        .generate(dictionary);
    let search_space = BoardEnumerator::new(&candidates).map(|e| e.len());

    CandidateReport {
        dictionary_size: dictionary.len(),
        candidates,
        search_space,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PuzzleConfig;

    #[test]
    fn lists_feasible_rows() {
        let puzzle: Puzzle = PuzzleConfig::builtin().into_puzzle().unwrap();
        // QUEEN borrows the wildcard for its Q; JAZZY lacks J, Z and Y
        let dictionary = Dictionary::from_strs(&["board", "jazzy", "queen", "stone"]);

        let report = list_candidates(&puzzle, &dictionary, WildcardPlacement::Greedy);
        let words: Vec<String> = report
            .candidates
            .iter()
            .map(|c| c.word().to_string())
            .collect();

        assert_eq!(report.dictionary_size, 4);
        assert_eq!(words, ["BOARD", "QUEEN", "STONE"]);
        assert_eq!(report.wildcard_rows(), 1);
        assert_eq!(report.search_space, Some(243));
    }

    #[test]
    fn exhaustive_placement_grows_pool() {
        let puzzle: Puzzle = PuzzleConfig::builtin().into_puzzle().unwrap();
        let dictionary = Dictionary::from_strs(&["stone"]);

        let greedy = list_candidates(&puzzle, &dictionary, WildcardPlacement::Greedy);
        let exhaustive = list_candidates(&puzzle, &dictionary, WildcardPlacement::Exhaustive);

        assert_eq!(greedy.candidates.len(), 1);
        // The literal spelling plus the wildcard on each of the five cells
        assert_eq!(exhaustive.candidates.len(), 6);
        assert_eq!(exhaustive.wildcard_rows(), 5);
    }
}

//! Candidate row generation
//!
//! Filters the dictionary down to the words the inventory can spell on its
//! own, ignoring every other row of the board.

use crate::core::{ALPHABET_SIZE, Dictionary, GRID_SIZE, LetterInventory, Word, letter_index};
use rayon::prelude::*;
use std::fmt;
use tracing::{debug, info};

/// A dictionary word that the inventory can spell in isolation
///
/// `wildcard` is the column whose letter is supplied by the wildcard tile, if
/// any. That cell is excluded from letter tallies and scores 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordCandidate<const N: usize = GRID_SIZE> {
    word: Word<N>,
    wildcard: Option<usize>,
}

impl<const N: usize> WordCandidate<N> {
    /// A row spelled entirely from literal tiles
    #[must_use]
    pub const fn new(word: Word<N>) -> Self {
        Self {
            word,
            wildcard: None,
        }
    }

    /// A row whose letter at `column` is covered by the wildcard
    ///
    /// Returns `None` if `column` is outside the word.
    #[must_use]
    pub const fn with_wildcard(word: Word<N>, column: usize) -> Option<Self> {
        if column < N {
            Some(Self {
                word,
                wildcard: Some(column),
            })
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word<N> {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn used_wildcard(&self) -> bool {
        self.wildcard.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn wildcard_column(&self) -> Option<usize> {
        self.wildcard
    }

    /// Letters placed from real tiles, as `(column, letter)` pairs
    pub fn literals(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.word
            .letters()
            .iter()
            .copied()
            .enumerate()
            .filter(move |&(col, _)| Some(col) != self.wildcard)
    }
}

impl<const N: usize> fmt::Display for WordCandidate<N> {
    /// The word with the wildcard cell, if any, in lowercase
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (col, &letter) in self.word.letters().iter().enumerate() {
            let shown = if self.wildcard == Some(col) {
                letter.to_ascii_lowercase()
            } else {
                letter
            };
            write!(f, "{}", char::from(shown))?;
        }
        Ok(())
    }
}

/// How a word may use the wildcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WildcardPlacement {
    /// One left-to-right pass: the wildcard covers the first letter the
    /// inventory runs out of, and never substitutes for an available letter
    #[default]
    Greedy,
    /// Every column the wildcard could cover, plus the wildcard-free spelling
    Exhaustive,
}

/// Produces the pool of candidate rows for a search
pub struct CandidateGenerator<'a> {
    inventory: &'a LetterInventory,
    placement: WildcardPlacement,
}

impl<'a> CandidateGenerator<'a> {
    #[must_use]
    pub const fn new(inventory: &'a LetterInventory) -> Self {
        Self {
            inventory,
            placement: WildcardPlacement::Greedy,
        }
    }

    #[must_use]
    pub const fn with_placement(mut self, placement: WildcardPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Generate the candidate pool for `dictionary`
    ///
    /// The pool follows dictionary order and contains no duplicates.
    /// Infeasible words are silently dropped.
    ///
    /// # Examples
    /// ```
    /// use bongo_solver::core::{Dictionary, LetterEntry, LetterInventory, Tile};
    /// use bongo_solver::solver::CandidateGenerator;
    ///
    /// let inventory = LetterInventory::new([
    ///     LetterEntry::new(Tile::Letter(b'A'), 1, 2),
    ///     LetterEntry::new(Tile::Letter(b'B'), 1, 3),
    /// ])
    /// .unwrap();
    /// let dictionary = Dictionary::<2>::from_strs(&["AB", "AA", "BA"]);
    ///
    /// let pool = CandidateGenerator::new(&inventory).generate(&dictionary);
    /// let words: Vec<_> = pool.iter().map(|c| c.word().as_str()).collect();
    /// assert_eq!(words, ["AB", "BA"]);
    /// ```
    #[must_use]
    pub fn generate<const N: usize>(&self, dictionary: &Dictionary<N>) -> Vec<WordCandidate<N>> {
        let pool: Vec<WordCandidate<N>> = dictionary
            .as_slice()
            .par_iter()
            .flat_map_iter(|word| self.candidates_for(word))
            .collect();

        info!(
            dictionary = dictionary.len(),
            candidates = pool.len(),
            wildcard_rows = pool.iter().filter(|c| c.used_wildcard()).count(),
            placement = ?self.placement,
            "Generated candidate pool"
        );

        pool
    }

    /// All candidate rows for a single word (empty if infeasible)
    #[must_use]
    pub fn candidates_for<const N: usize>(&self, word: &Word<N>) -> Vec<WordCandidate<N>> {
        let candidates: Vec<WordCandidate<N>> = match self.placement {
            WildcardPlacement::Greedy => self.greedy(word).into_iter().collect(),
            WildcardPlacement::Exhaustive => self.exhaustive(word),
        };

        if candidates.is_empty() {
            debug!(word = %word, "Word not coverable by inventory");
        }
        candidates
    }

    fn greedy<const N: usize>(&self, word: &Word<N>) -> Option<WordCandidate<N>> {
        let mut remaining = *self.inventory.letter_counts();
        let mut wildcards = self.inventory.wildcard_count();
        let mut wildcard = None;

        for (col, &letter) in word.letters().iter().enumerate() {
            let index = letter_index(letter)?;
            if remaining[index] > 0 {
                remaining[index] -= 1;
            } else if wildcards > 0 && wildcard.is_none() {
                wildcards -= 1;
                wildcard = Some(col);
            } else {
                return None;
            }
        }

        Some(WordCandidate {
            word: *word,
            wildcard,
        })
    }

    fn exhaustive<const N: usize>(&self, word: &Word<N>) -> Vec<WordCandidate<N>> {
        let mut found = Vec::new();

        if self.covers_literals(word, None) {
            found.push(WordCandidate::new(*word));
        }

        if self.inventory.wildcard_count() > 0 {
            found.extend(
                (0..N)
                    .filter(|&col| self.covers_literals(word, Some(col)))
                    .filter_map(|col| WordCandidate::with_wildcard(*word, col)),
            );
        }

        found
    }

    /// Whether the inventory holds every letter of `word` except the one at `skip`
    fn covers_literals<const N: usize>(&self, word: &Word<N>, skip: Option<usize>) -> bool {
        let mut needed = [0u32; ALPHABET_SIZE];
        for (col, &letter) in word.letters().iter().enumerate() {
            if Some(col) == skip {
                continue;
            }
            match letter_index(letter) {
                Some(index) => needed[index] += 1,
                None => return false,
            }
        }

        needed
            .iter()
            .zip(self.inventory.letter_counts())
            .all(|(need, have)| need <= have)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterEntry, Tile};

    fn inventory(letters: &[(u8, i64)], wildcard: bool) -> LetterInventory {
        let mut entries: Vec<LetterEntry> = letters
            .iter()
            .map(|&(c, n)| LetterEntry::new(Tile::Letter(c), n, 1))
            .collect();
        if wildcard {
            entries.push(LetterEntry::new(Tile::Wildcard, 1, 0));
        }
        LetterInventory::new(entries).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn feasible_word_without_wildcard() {
        let inv = inventory(&[(b'S', 1), (b'T', 1), (b'O', 1), (b'N', 1), (b'E', 1)], true);
        let found = CandidateGenerator::new(&inv).candidates_for(&word("stone"));
        assert_eq!(found, vec![WordCandidate::new(word("stone"))]);
    }

    #[test]
    fn greedy_wildcard_covers_first_shortfall() {
        // Only one O: the second O in "BOOST" is covered by the wildcard
        let inv = inventory(&[(b'B', 1), (b'O', 1), (b'S', 1), (b'T', 1)], true);
        let found = CandidateGenerator::new(&inv).candidates_for(&word("boost"));
        assert_eq!(found.len(), 1);
        assert!(found[0].used_wildcard());
        assert_eq!(found[0].wildcard_column(), Some(2));
    }

    #[test]
    fn word_needing_two_wildcards_is_excluded() {
        let inv = inventory(&[(b'B', 1), (b'S', 1), (b'T', 1)], true);
        let generator = CandidateGenerator::new(&inv);
        assert!(generator.candidates_for(&word("boost")).is_empty());
    }

    #[test]
    fn word_with_missing_letter_excluded_without_wildcard() {
        let inv = inventory(&[(b'B', 1), (b'O', 1), (b'S', 1), (b'T', 1)], false);
        let generator = CandidateGenerator::new(&inv);
        assert!(generator.candidates_for(&word("boost")).is_empty());
    }

    #[test]
    fn uncoverable_words_never_reach_the_pool() {
        let inv = inventory(&[(b'A', 2), (b'B', 1)], true);
        let dictionary = Dictionary::<2>::from_strs(&["AA", "AB", "BB", "CC", "CA", "ZZ"]);
        let pool = CandidateGenerator::new(&inv).generate(&dictionary);

        let words: Vec<&str> = pool.iter().map(|c| c.word().as_str()).collect();
        // BB and CA each need one wildcard; CC and ZZ need two
        assert_eq!(words, ["AA", "AB", "BB", "CA"]);

        for candidate in &pool {
            let literal_counts = candidate.literals().fold([0u32; ALPHABET_SIZE], |mut acc, (_, l)| {
                acc[letter_index(l).unwrap()] += 1;
                acc
            });
            assert!(
                literal_counts
                    .iter()
                    .zip(inv.letter_counts())
                    .all(|(used, have)| used <= have)
            );
        }
    }

    #[test]
    fn exhaustive_lists_every_wildcard_column() {
        let inv = inventory(&[(b'B', 1), (b'O', 1), (b'S', 1), (b'T', 1)], true);
        let generator =
            CandidateGenerator::new(&inv).with_placement(WildcardPlacement::Exhaustive);
        let found = generator.candidates_for(&word("boost"));

        let columns: Vec<Option<usize>> = found.iter().map(WordCandidate::wildcard_column).collect();
        assert_eq!(columns, [Some(1), Some(2)]);
    }

    #[test]
    fn exhaustive_keeps_wildcard_free_spelling() {
        let inv = inventory(&[(b'A', 1), (b'B', 1)], true);
        let generator =
            CandidateGenerator::new(&inv).with_placement(WildcardPlacement::Exhaustive);
        let found = generator.candidates_for(&Word::<2>::new("AB").unwrap());

        assert_eq!(found.len(), 3);
        assert!(!found[0].used_wildcard());
        assert_eq!(found[1].wildcard_column(), Some(0));
        assert_eq!(found[2].wildcard_column(), Some(1));
    }

    #[test]
    fn greedy_and_exhaustive_agree_on_feasibility() {
        let inv = inventory(&[(b'A', 2), (b'B', 1), (b'E', 1)], true);
        let dictionary = Dictionary::<2>::from_strs(&["AA", "AB", "BB", "BE", "EE", "XY", "QA"]);
        let greedy = CandidateGenerator::new(&inv).generate(&dictionary);
        let exhaustive = CandidateGenerator::new(&inv)
            .with_placement(WildcardPlacement::Exhaustive)
            .generate(&dictionary);

        let mut greedy_words: Vec<_> = greedy.iter().map(|c| *c.word()).collect();
        let mut exhaustive_words: Vec<_> = exhaustive.iter().map(|c| *c.word()).collect();
        greedy_words.dedup();
        exhaustive_words.dedup();
        assert_eq!(greedy_words, exhaustive_words);
    }

    #[test]
    fn literals_skip_wildcard_cell() {
        let candidate = WordCandidate::with_wildcard(word("stone"), 1).unwrap();
        let letters: Vec<(usize, u8)> = candidate.literals().collect();
        assert_eq!(
            letters,
            [(0, b'S'), (2, b'O'), (3, b'N'), (4, b'E')]
        );
        assert!(WordCandidate::with_wildcard(word("stone"), 5).is_none());
    }

    #[test]
    fn display_lowercases_wildcard_cell() {
        let stone = word("stone");
        assert_eq!(WordCandidate::new(stone).to_string(), "STONE");
        let wild = WordCandidate::with_wildcard(stone, 2).unwrap();
        assert_eq!(wild.to_string(), "SToNE");
    }
}

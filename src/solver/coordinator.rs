//! Parallel exhaustive search
//!
//! The enumeration is cut into fixed-size chunks that a rayon pool evaluates
//! independently. Each worker reports its chunk's local best over a channel,
//! and the coordinating thread folds those reports into the global best in
//! whatever order they complete. Workers never touch shared mutable state.

use super::board::Board;
use super::candidates::{WildcardPlacement, WordCandidate};
use super::enumerator::{BoardEnumerator, Chunk};
use super::evaluator::{BoardEvaluator, Score};
use crate::core::ConfigurationError;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::mpsc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

/// Default number of boards per chunk
pub const DEFAULT_CHUNK_SIZE: u64 = 10_000;

/// Tuning for a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Boards per chunk
    pub chunk_size: u64,
    /// Worker threads; `None` uses the available parallelism
    pub threads: Option<usize>,
    /// Wildcard placement used when generating the candidate pool
    pub placement: WildcardPlacement,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            threads: None,
            placement: WildcardPlacement::Greedy,
        }
    }
}

impl SearchConfig {
    /// # Errors
    /// Returns `ConfigurationError::ZeroChunkSize` if `chunk_size` is 0.
    pub const fn validate(&self) -> Result<(), ConfigurationError> {
        if self.chunk_size == 0 {
            return Err(ConfigurationError::ZeroChunkSize);
        }
        Ok(())
    }

    /// Worker count, resolving `None` and 0 to the available parallelism
    #[must_use]
    pub fn worker_threads(&self) -> usize {
        match self.threads {
            Some(n) if n > 0 => n,
            _ => std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get),
        }
    }
}

/// Errors that stop a search before it evaluates anything
#[derive(Debug, Error)]
pub enum SearchError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Search space of {pool}^{rows} boards is too large to enumerate")]
    SearchSpaceTooLarge { pool: usize, rows: usize },

    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// A scored board together with its enumeration position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestBoard<const N: usize> {
    pub score: Score,
    pub index: u128,
    pub board: Board<N>,
}

impl<const N: usize> BestBoard<N> {
    /// Ranking used by the reduction: higher score first, then earlier index
    fn beats(&self, other: &Self) -> bool {
        match self.score.cmp(&other.score) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => self.index < other.index,
        }
    }
}

/// Keep the better of two partial results
///
/// Commutative and associative, so folding chunk results in any order yields
/// the same best board.
#[must_use]
pub fn merge_best<const N: usize>(
    current: Option<BestBoard<N>>,
    candidate: Option<BestBoard<N>>,
) -> Option<BestBoard<N>> {
    match (current, candidate) {
        (Some(a), Some(b)) => Some(if b.beats(&a) { b } else { a }),
        (a, None) => a,
        (None, b) => b,
    }
}

/// One chunk's report to the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkOutcome<const N: usize> {
    pub chunk: Chunk,
    pub best: Option<BestBoard<N>>,
    pub valid_boards: u64,
}

/// Running totals owned by the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTally<const N: usize> {
    pub best: Option<BestBoard<N>>,
    pub chunks: u64,
    pub boards_evaluated: u128,
    pub valid_boards: u128,
}

impl<const N: usize> Default for SearchTally<N> {
    fn default() -> Self {
        Self {
            best: None,
            chunks: 0,
            boards_evaluated: 0,
            valid_boards: 0,
        }
    }
}

impl<const N: usize> SearchTally<N> {
    /// Fold one chunk's report into the totals
    ///
    /// Returns `true` if the global best improved.
    pub fn absorb(&mut self, outcome: &ChunkOutcome<N>) -> bool {
        self.chunks += 1;
        self.boards_evaluated += u128::from(outcome.chunk.len);
        self.valid_boards += u128::from(outcome.valid_boards);

        let previous = self.best;
        self.best = merge_best(self.best, outcome.best);
        self.best != previous
    }
}

/// Final result of a search
#[derive(Debug, Clone)]
pub struct SearchReport<const N: usize> {
    /// The highest-scoring valid board, or `None` if no board validated
    pub best: Option<BestBoard<N>>,
    pub pool_size: usize,
    pub boards_evaluated: u128,
    pub valid_boards: u128,
    pub chunks: u64,
    pub threads: usize,
    pub elapsed: Duration,
}

/// Drives the exhaustive search over every board of a candidate pool
pub struct ParallelSearch<'a, const N: usize> {
    evaluator: BoardEvaluator<'a, N>,
    enumerator: BoardEnumerator<'a, N>,
    config: SearchConfig,
}

impl<'a, const N: usize> ParallelSearch<'a, N> {
    /// Prepare a search over `pool`
    ///
    /// # Errors
    /// Returns `SearchError` if the configuration is invalid or the search
    /// space cannot be indexed.
    pub fn new(
        evaluator: BoardEvaluator<'a, N>,
        pool: &'a [WordCandidate<N>],
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        config.validate()?;
        let too_large = || SearchError::SearchSpaceTooLarge {
            pool: pool.len(),
            rows: N,
        };
        let enumerator = BoardEnumerator::new(pool).ok_or_else(too_large)?;
        enumerator.chunk_count(config.chunk_size).ok_or_else(too_large)?;

        Ok(Self {
            evaluator,
            enumerator,
            config,
        })
    }

    #[must_use]
    pub const fn enumerator(&self) -> &BoardEnumerator<'a, N> {
        &self.enumerator
    }

    /// Run the search to completion
    ///
    /// # Errors
    /// Returns `SearchError::ThreadPool` if the worker pool cannot be built.
    pub fn run(&self) -> Result<SearchReport<N>, SearchError> {
        self.run_with_progress(|_| {})
    }

    /// Run the search, calling `on_chunk` on this thread as each chunk finishes
    ///
    /// Chunks are reported in completion order. Every chunk is evaluated;
    /// there is no early exit. A panicking worker aborts the whole search.
    ///
    /// # Errors
    /// Returns `SearchError::ThreadPool` if the worker pool cannot be built.
    pub fn run_with_progress<F>(&self, mut on_chunk: F) -> Result<SearchReport<N>, SearchError>
    where
        F: FnMut(&ChunkOutcome<N>),
    {
        let threads = self.config.worker_threads();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("board-worker-{i}"))
            .build()?;

        let chunk_size = self.config.chunk_size;
        let chunk_count = self.enumerator.chunk_count(chunk_size).unwrap_or(0);

        info!(
            pool = self.enumerator.pool().len(),
            boards = %self.enumerator.len(),
            chunks = chunk_count,
            chunk_size,
            threads,
            "Starting exhaustive search"
        );

        let start = Instant::now();
        let mut tally = SearchTally::default();
        let (sender, receiver) = mpsc::channel::<ChunkOutcome<N>>();

        pool.in_place_scope(|scope| {
            scope.spawn(move |_| {
                (0..chunk_count)
                    .into_par_iter()
                    .for_each_with(sender, |sender, index| {
                        let outcome = self.evaluate_chunk(self.enumerator.chunk(index, chunk_size));
                        // The receiver outlives every worker
                        let _ = sender.send(outcome);
                    });
            });

            for outcome in receiver {
                if tally.absorb(&outcome) {
                    if let Some(best) = tally.best {
                        debug!(
                            score = best.score,
                            chunk = outcome.chunk.index,
                            board = ?best.board.row_strings(),
                            "New best board"
                        );
                    }
                }
                on_chunk(&outcome);
            }
        });

        let elapsed = start.elapsed();
        info!(
            best = ?tally.best.map(|b| b.score),
            valid = %tally.valid_boards,
            elapsed = ?elapsed,
            "Search complete"
        );

        Ok(SearchReport {
            best: tally.best,
            pool_size: self.enumerator.pool().len(),
            boards_evaluated: tally.boards_evaluated,
            valid_boards: tally.valid_boards,
            chunks: tally.chunks,
            threads,
            elapsed,
        })
    }

    /// Evaluate every board of one chunk and keep the local best
    ///
    /// Pure: reads only the shared puzzle data.
    #[must_use]
    pub fn evaluate_chunk(&self, chunk: Chunk) -> ChunkOutcome<N> {
        let mut best = None;
        let mut valid_boards = 0;

        for (index, board) in chunk.range().zip(self.enumerator.boards(&chunk)) {
            if let Ok(score) = self.evaluator.evaluate(&board) {
                valid_boards += 1;
                best = merge_best(best, Some(BestBoard { score, index, board }));
            }
        }

        ChunkOutcome {
            chunk,
            best,
            valid_boards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, LetterEntry, LetterInventory, Schema, Tile, Word};
    use crate::solver::CandidateGenerator;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;

    struct Toy {
        inventory: LetterInventory,
        schema: Schema<2>,
        dictionary: Dictionary<2>,
    }

    /// The two-by-two worked example
    fn toy() -> Toy {
        Toy {
            inventory: LetterInventory::new([
                LetterEntry::new(Tile::Letter(b'A'), 3, 2),
                LetterEntry::new(Tile::Letter(b'B'), 2, 3),
                LetterEntry::new(Tile::Wildcard, 1, 0),
            ])
            .unwrap(),
            schema: Schema::new(&[vec![1, 2], vec![2, 1]]).unwrap(),
            dictionary: Dictionary::from_strs(&["AB", "BA", "AA"]),
        }
    }

    fn config(chunk_size: u64, threads: usize) -> SearchConfig {
        SearchConfig {
            chunk_size,
            threads: Some(threads),
            ..SearchConfig::default()
        }
    }

    #[test]
    fn worked_example_finds_best_board() {
        let toy = toy();
        let pool = CandidateGenerator::new(&toy.inventory).generate(&toy.dictionary);
        assert_eq!(pool.len(), 3);
        assert!(pool.iter().all(|c| !c.used_wildcard()));

        let evaluator = BoardEvaluator::new(&toy.inventory, &toy.schema, &toy.dictionary);
        let search = ParallelSearch::new(evaluator, &pool, config(2, 2)).unwrap();
        let report = search.run().unwrap();

        let best = report.best.unwrap();
        assert_eq!(best.score, 16);
        assert_eq!(best.board.row_strings(), ["AB", "BA"]);
        assert_eq!(best.index, 5);
        assert_eq!(report.boards_evaluated, 9);
        assert_eq!(report.valid_boards, 6);
        assert_eq!(report.chunks, 5);
    }

    #[test]
    fn result_independent_of_chunking_and_threads() {
        let toy = toy();
        let pool = CandidateGenerator::new(&toy.inventory).generate(&toy.dictionary);
        let evaluator = BoardEvaluator::new(&toy.inventory, &toy.schema, &toy.dictionary);

        let reference = ParallelSearch::new(evaluator, &pool, config(100, 1))
            .unwrap()
            .run()
            .unwrap()
            .best;

        for (chunk_size, threads) in [(1, 4), (2, 3), (4, 2), (9, 1), (10_000, 8)] {
            let best = ParallelSearch::new(evaluator, &pool, config(chunk_size, threads))
                .unwrap()
                .run()
                .unwrap()
                .best;
            assert_eq!(best, reference);
        }
    }

    #[test]
    fn reduction_independent_of_completion_order() {
        // Uniform weights make many boards tie; the reduction must still pick one
        let inventory = LetterInventory::new([
            LetterEntry::new(Tile::Letter(b'A'), 4, 1),
            LetterEntry::new(Tile::Letter(b'B'), 4, 1),
        ])
        .unwrap();
        let schema = Schema::<2>::uniform();
        let dictionary = Dictionary::from_strs(&["AA", "AB", "BA", "BB"]);
        let pool = CandidateGenerator::new(&inventory).generate(&dictionary);
        let evaluator = BoardEvaluator::new(&inventory, &schema, &dictionary);
        let search = ParallelSearch::new(evaluator, &pool, config(3, 1)).unwrap();

        let mut outcomes: Vec<ChunkOutcome<2>> = search
            .enumerator()
            .chunks(3)
            .map(|chunk| search.evaluate_chunk(chunk))
            .collect();

        let fold = |outcomes: &[ChunkOutcome<2>]| {
            let mut tally = SearchTally::default();
            for outcome in outcomes {
                tally.absorb(outcome);
            }
            tally
        };

        let in_order = fold(&outcomes);
        assert_eq!(in_order.best.unwrap().score, 4);
        assert_eq!(in_order.best.unwrap().index, 0);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            outcomes.shuffle(&mut rng);
            assert_eq!(fold(&outcomes), in_order);
        }
        outcomes.reverse();
        assert_eq!(fold(&outcomes), in_order);
    }

    #[test]
    fn parallel_matches_sequential_scan() {
        let inventory = LetterInventory::new([
            LetterEntry::new(Tile::Letter(b'A'), 2, 5),
            LetterEntry::new(Tile::Letter(b'B'), 2, 1),
            LetterEntry::new(Tile::Letter(b'E'), 1, 3),
            LetterEntry::new(Tile::Wildcard, 1, 0),
        ])
        .unwrap();
        let schema = Schema::<2>::new(&[vec![3, 1], vec![1, 2]]).unwrap();
        let dictionary = Dictionary::from_strs(&["AB", "BA", "AE", "EA", "BE", "EB", "BB", "AA"]);
        let pool = CandidateGenerator::new(&inventory).generate(&dictionary);
        let evaluator = BoardEvaluator::new(&inventory, &schema, &dictionary);

        let enumerator = BoardEnumerator::new(&pool).unwrap();
        let expected = enumerator
            .iter()
            .filter_map(|board| evaluator.evaluate(&board).ok())
            .max();

        let report = ParallelSearch::new(evaluator, &pool, config(5, 4))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(report.best.map(|b| b.score), expected);
        assert_eq!(report.boards_evaluated, enumerator.len());
    }

    #[test]
    fn empty_outcome_when_nothing_validates() {
        let inventory = LetterInventory::new([LetterEntry::new(Tile::Letter(b'A'), 3, 1)]).unwrap();
        let schema = Schema::<2>::uniform();
        let dictionary = Dictionary::from_strs(&["AA"]);
        let pool = CandidateGenerator::new(&inventory).generate(&dictionary);
        let evaluator = BoardEvaluator::new(&inventory, &schema, &dictionary);

        let report = ParallelSearch::new(evaluator, &pool, config(10, 2))
            .unwrap()
            .run()
            .unwrap();
        assert!(report.best.is_none());
        assert_eq!(report.boards_evaluated, 1);
        assert_eq!(report.valid_boards, 0);
    }

    #[test]
    fn empty_pool_completes() {
        let inventory = LetterInventory::new(Vec::new()).unwrap();
        let schema = Schema::<2>::uniform();
        let dictionary = Dictionary::from_strs(&["AA"]);
        let pool: Vec<WordCandidate<2>> = Vec::new();
        let evaluator = BoardEvaluator::new(&inventory, &schema, &dictionary);

        let report = ParallelSearch::new(evaluator, &pool, SearchConfig::default())
            .unwrap()
            .run()
            .unwrap();
        assert!(report.best.is_none());
        assert_eq!(report.chunks, 0);
    }

    #[test]
    fn progress_sees_every_chunk() {
        let toy = toy();
        let pool = CandidateGenerator::new(&toy.inventory).generate(&toy.dictionary);
        let evaluator = BoardEvaluator::new(&toy.inventory, &toy.schema, &toy.dictionary);
        let search = ParallelSearch::new(evaluator, &pool, config(2, 3)).unwrap();

        let mut seen: Vec<u64> = Vec::new();
        search.run_with_progress(|outcome| seen.push(outcome.chunk.index)).unwrap();
        seen.sort_unstable();
        assert_eq!(seen, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn rejects_zero_chunk_size() {
        let toy = toy();
        let pool = vec![WordCandidate::new(Word::new("AB").unwrap())];
        let evaluator = BoardEvaluator::new(&toy.inventory, &toy.schema, &toy.dictionary);
        let result = ParallelSearch::new(evaluator, &pool, config(0, 1));
        assert!(matches!(
            result,
            Err(SearchError::Configuration(ConfigurationError::ZeroChunkSize))
        ));
    }

    #[test]
    fn merge_prefers_higher_score_then_earlier_index() {
        let board = Board::new([WordCandidate::new(Word::<2>::new("AB").unwrap()); 2]);
        let low = BestBoard { score: 3, index: 0, board };
        let high = BestBoard { score: 5, index: 9, board };
        let high_early = BestBoard { score: 5, index: 2, board };

        assert_eq!(merge_best(Some(low), Some(high)), Some(high));
        assert_eq!(merge_best(Some(high), Some(low)), Some(high));
        assert_eq!(merge_best(Some(high), Some(high_early)), Some(high_early));
        assert_eq!(merge_best(Some(high_early), Some(high)), Some(high_early));
        assert_eq!(merge_best(None, Some(low)), Some(low));
        assert_eq!(merge_best::<2>(None, None), None);
    }
}

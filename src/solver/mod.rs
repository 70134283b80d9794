//! Exhaustive board search
//!
//! Data flows one way: the candidate generator turns the dictionary into a pool
//! of feasible rows, the enumerator stacks that pool into every possible board,
//! the evaluator validates and scores each board, and the parallel search
//! reduces the scores to a single best board.

mod board;
pub mod candidates;
pub mod coordinator;
pub mod enumerator;
pub mod evaluator;

pub use board::Board;
pub use candidates::{CandidateGenerator, WildcardPlacement, WordCandidate};
pub use coordinator::{
    BestBoard, ChunkOutcome, DEFAULT_CHUNK_SIZE, ParallelSearch, SearchConfig, SearchError,
    SearchReport, SearchTally, merge_best,
};
pub use enumerator::{BoardEnumerator, Boards, Chunk};
pub use evaluator::{BoardEvaluator, Rejection, Score};

//! Command implementations

pub mod candidates;
pub mod score;
pub mod search;

pub use candidates::{CandidateReport, list_candidates};
pub use score::{ScoreError, ScoreReport, score_board};
pub use search::run_search;

//! Search command
//!
//! Builds the candidate pool and runs the parallel exhaustive search with a
//! progress bar.

use crate::config::Puzzle;
use crate::core::Dictionary;
use crate::solver::{
    BoardEvaluator, CandidateGenerator, ParallelSearch, SearchConfig, SearchError, SearchReport,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

/// Search spaces above this many boards get a warning before the run starts
pub const LARGE_SEARCH_SPACE: u128 = 10_000_000_000;

/// Search `puzzle` for its highest-scoring board
///
/// When `show_progress` is set, a progress bar tracks completed chunks and the
/// best score so far.
///
/// # Errors
///
/// Returns `SearchError` if the search configuration is invalid, the search
/// space is too large to index, or the worker pool cannot start.
pub fn run_search<const N: usize>(
    puzzle: &Puzzle<N>,
    dictionary: &Dictionary<N>,
    config: SearchConfig,
    show_progress: bool,
) -> Result<SearchReport<N>, SearchError> {
    let pool = CandidateGenerator::new(&puzzle.inventory)
        .with_placement(config.placement)
        .generate(dictionary);

    let evaluator = BoardEvaluator::new(&puzzle.inventory, &puzzle.schema, dictionary)
        .with_bonus(puzzle.bonus.as_ref());
    let search = ParallelSearch::new(evaluator, &pool, config)?;

    let boards = search.enumerator().len();
    if boards > LARGE_SEARCH_SPACE {
        warn!(
            boards = %boards,
            pool = pool.len(),
            "Very large search space; consider a smaller word list or puzzle"
        );
    }

    let chunk_count = search
        .enumerator()
        .chunk_count(config.chunk_size)
        .unwrap_or(0);
    let pb = if show_progress {
        progress_bar(chunk_count)
    } else {
        ProgressBar::hidden()
    };

    let mut best_score = None;
    let report = search.run_with_progress(|outcome| {
        if let Some(best) = outcome.best {
            if best_score.is_none_or(|score| best.score > score) {
                best_score = Some(best.score);
                pb.set_message(format!("Best: {}", best.score));
            }
        }
        pb.inc(1);
    })?;

    pb.finish_with_message(match best_score {
        Some(score) => format!("Best: {score}"),
        None => "No valid board".to_string(),
    });

    Ok(report)
}

fn progress_bar(chunks: u64) -> ProgressBar {
    let pb = ProgressBar::new(chunks);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} chunks ({percent}%) {eta} | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}

//! Score command
//!
//! Validates and scores a single hand-entered board.

use crate::config::Puzzle;
use crate::core::{Dictionary, Word, WordError};
use crate::solver::{Board, BoardEvaluator, Rejection, Score, WordCandidate};
use thiserror::Error;

/// Errors in the board as entered (as opposed to a board that fails validation)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("Expected {expected} rows, got {found}")]
    WrongRowCount { expected: usize, found: usize },

    #[error("Row {row}: {source}")]
    InvalidWord {
        row: usize,
        #[source]
        source: WordError,
    },

    #[error("Wildcard cell ({row}, {col}) is outside the grid")]
    WildcardOutOfRange { row: usize, col: usize },
}

/// Outcome of scoring one board
pub struct ScoreReport<const N: usize> {
    pub board: Board<N>,
    pub outcome: Result<Score, Rejection>,
    /// Rows (0-based) that are not dictionary words themselves
    pub unknown_rows: Vec<usize>,
}

/// Validate and score the board spelled by `rows`
///
/// `wildcard` is the 0-based `(row, col)` cell covered by the wildcard tile.
///
/// # Errors
///
/// Returns `ScoreError` if the rows do not form an `N`x`N` grid of letters or
/// the wildcard cell is outside it.
pub fn score_board<const N: usize>(
    rows: &[String],
    wildcard: Option<(usize, usize)>,
    puzzle: &Puzzle<N>,
    dictionary: &Dictionary<N>,
) -> Result<ScoreReport<N>, ScoreError> {
    if rows.len() != N {
        return Err(ScoreError::WrongRowCount {
            expected: N,
            found: rows.len(),
        });
    }

    let mut candidates = Vec::with_capacity(N);
    for (index, text) in rows.iter().enumerate() {
        let word: Word<N> = Word::new(text).map_err(|source| ScoreError::InvalidWord {
            row: index + 1,
            source,
        })?;
        let candidate = match wildcard {
            Some((row, col)) if row == index => WordCandidate::with_wildcard(word, col)
                .ok_or(ScoreError::WildcardOutOfRange { row, col })?,
            _ => WordCandidate::new(word),
        };
        candidates.push(candidate);
    }

    if let Some((row, col)) = wildcard {
        if row >= N {
            return Err(ScoreError::WildcardOutOfRange { row, col });
        }
    }

    let board = Board::new(std::array::from_fn(|i| candidates[i]));
    let unknown_rows = board
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| !dictionary.contains(row.word()))
        .map(|(i, _)| i)
        .collect();

    let evaluator = BoardEvaluator::new(&puzzle.inventory, &puzzle.schema, dictionary)
        .with_bonus(puzzle.bonus.as_ref());
    let outcome = evaluator.evaluate(&board);

    Ok(ScoreReport {
        board,
        outcome,
        unknown_rows,
    })
}

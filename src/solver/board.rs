//! Candidate boards

use super::candidates::WordCandidate;
use crate::core::{GRID_SIZE, Word};
use std::fmt;

/// `N` candidate rows stacked into an `N`x`N` letter grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize = GRID_SIZE> {
    rows: [WordCandidate<N>; N],
}

impl<const N: usize> Board<N> {
    #[must_use]
    pub const fn new(rows: [WordCandidate<N>; N]) -> Self {
        Self { rows }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[WordCandidate<N>; N] {
        &self.rows
    }

    /// The word read top-to-bottom down `col`
    ///
    /// # Panics
    /// Panics if `col >= N`
    #[must_use]
    pub fn column(&self, col: usize) -> Word<N> {
        Word::from_letters(std::array::from_fn(|row| {
            self.rows[row].word().letter_at(col)
        }))
    }

    /// Number of rows that consume the wildcard
    #[must_use]
    pub fn wildcard_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.used_wildcard()).count()
    }

    /// Row words as plain strings, top to bottom
    #[must_use]
    pub fn row_strings(&self) -> Vec<String> {
        self.rows.iter().map(|row| row.word().to_string()).collect()
    }
}

impl<const N: usize> fmt::Display for Board<N> {
    /// One row per line; a wildcard cell is shown in lowercase
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

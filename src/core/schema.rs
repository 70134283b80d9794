//! Per-cell score multipliers

use super::{ConfigurationError, GRID_SIZE};

/// Largest multiplier a schema cell may carry
pub const MAX_MULTIPLIER: i64 = 1_000;

/// An `N`x`N` grid of positive score multipliers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema<const N: usize = GRID_SIZE> {
    multipliers: [[i64; N]; N],
}

impl<const N: usize> Schema<N> {
    /// Build a schema from configuration rows
    ///
    /// # Errors
    /// Returns `ConfigurationError` if the rows are not exactly `N`x`N` or if
    /// any multiplier is outside `1..=MAX_MULTIPLIER`.
    ///
    /// # Examples
    /// ```
    /// use bongo_solver::core::Schema;
    ///
    /// let schema = Schema::<2>::new(&[vec![1, 2], vec![2, 1]]).unwrap();
    /// assert_eq!(schema.multiplier(0, 1), 2);
    ///
    /// assert!(Schema::<2>::new(&[vec![1, 2]]).is_err());
    /// ```
    pub fn new(rows: &[Vec<i64>]) -> Result<Self, ConfigurationError> {
        if N == 0 {
            return Err(ConfigurationError::EmptyGrid);
        }
        if rows.len() != N {
            return Err(ConfigurationError::SchemaRows {
                expected: N,
                found: rows.len(),
            });
        }

        let mut multipliers = [[0; N]; N];
        for (row, (source, target)) in rows.iter().zip(multipliers.iter_mut()).enumerate() {
            if source.len() != N {
                return Err(ConfigurationError::SchemaColumns {
                    row,
                    expected: N,
                    found: source.len(),
                });
            }
            for (col, (&value, cell)) in source.iter().zip(target.iter_mut()).enumerate() {
                if value <= 0 {
                    return Err(ConfigurationError::NonPositiveMultiplier { row, col, value });
                }
                if value > MAX_MULTIPLIER {
                    return Err(ConfigurationError::MultiplierOutOfRange {
                        row,
                        col,
                        value,
                        max: MAX_MULTIPLIER,
                    });
                }
                *cell = value;
            }
        }

        Ok(Self { multipliers })
    }

    /// Schema where every cell has multiplier 1
    #[must_use]
    pub const fn uniform() -> Self {
        Self {
            multipliers: [[1; N]; N],
        }
    }

    #[inline]
    #[must_use]
    pub const fn multiplier(&self, row: usize, col: usize) -> i64 {
        self.multipliers[row][col]
    }

    #[must_use]
    pub const fn rows(&self) -> &[[i64; N]; N] {
        &self.multipliers
    }
}

impl<const N: usize> Default for Schema<N> {
    fn default() -> Self {
        Self::uniform()
    }
}

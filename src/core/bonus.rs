//! Optional bonus word read through fixed cells of the board

use super::{ConfigurationError, GRID_SIZE};
use rustc_hash::FxHashSet;

/// Largest bonus percentage a puzzle may declare
pub const MAX_BONUS_PERCENT: i64 = 10_000;

/// Percentage applied when a configuration does not name one
pub const DEFAULT_BONUS_PERCENT: i64 = 130;

/// A word spelled through a fixed list of cells, scored again when it is
/// one of the accepted bonus words
///
/// The bonus is the weighted score of those cells scaled by `percent / 100`,
/// rounded up. A wildcard cell still spells its letter but adds nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusWord<const N: usize = GRID_SIZE> {
    cells: Vec<(usize, usize)>,
    percent: i64,
    words: FxHashSet<Vec<u8>>,
}

impl<const N: usize> BonusWord<N> {
    /// Build a bonus rule over 0-based `(row, col)` cells
    ///
    /// Words are uppercased and must be exactly one letter per cell.
    ///
    /// # Errors
    /// Returns `ConfigurationError` if there are no cells, a cell is outside
    /// the grid or repeated, `percent` is outside `1..=MAX_BONUS_PERCENT`, or a
    /// word does not fit the cells.
    ///
    /// # Examples
    /// ```
    /// use bongo_solver::core::BonusWord;
    ///
    /// let bonus = BonusWord::<5>::new(&[(0, 2), (1, 2), (2, 2), (3, 3)], 130, &["bomb"]).unwrap();
    /// assert!(bonus.accepts(b"BOMB"));
    /// assert!(!bonus.accepts(b"BOOM"));
    /// assert_eq!(bonus.apply(10), 13);
    /// ```
    pub fn new<S: AsRef<str>>(
        cells: &[(usize, usize)],
        percent: i64,
        words: &[S],
    ) -> Result<Self, ConfigurationError> {
        if cells.is_empty() {
            return Err(ConfigurationError::EmptyBonusCells);
        }
        let mut seen = FxHashSet::default();
        for &(row, col) in cells {
            if row >= N || col >= N {
                return Err(ConfigurationError::BonusCellOutOfRange { row, col });
            }
            if !seen.insert((row, col)) {
                return Err(ConfigurationError::DuplicateBonusCell { row, col });
            }
        }
        if !(1..=MAX_BONUS_PERCENT).contains(&percent) {
            return Err(ConfigurationError::BonusPercent {
                value: percent,
                max: MAX_BONUS_PERCENT,
            });
        }

        let words = words
            .iter()
            .map(|word| {
                let word = word.as_ref();
                if word.len() == cells.len() && word.bytes().all(|b| b.is_ascii_alphabetic()) {
                    Ok(word.to_ascii_uppercase().into_bytes())
                } else {
                    Err(ConfigurationError::BonusWord {
                        word: word.to_string(),
                        expected: cells.len(),
                    })
                }
            })
            .collect::<Result<_, _>>()?;

        Ok(Self {
            cells: cells.to_vec(),
            percent,
            words,
        })
    }

    /// Cells in reading order
    #[must_use]
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    #[must_use]
    pub const fn percent(&self) -> i64 {
        self.percent
    }

    /// Whether `letters`, read through the cells, is a bonus word
    #[must_use]
    pub fn accepts(&self, letters: &[u8]) -> bool {
        self.words.contains(letters)
    }

    /// Scale the cells' weighted score by the bonus percentage, rounding up
    #[must_use]
    pub const fn apply(&self, base: i64) -> i64 {
        let scaled = base * self.percent;
        scaled.div_euclid(100) + if scaled.rem_euclid(100) == 0 { 0 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> BonusWord<2> {
        BonusWord::new(&[(0, 0), (1, 1)], 130, &["ab", "BB"]).unwrap()
    }

    #[test]
    fn accepts_listed_words_only() {
        let bonus = diagonal();
        assert!(bonus.accepts(b"AB"));
        assert!(bonus.accepts(b"BB"));
        assert!(!bonus.accepts(b"BA"));
        assert_eq!(bonus.cells(), [(0, 0), (1, 1)]);
    }

    #[test]
    fn apply_rounds_up() {
        let bonus = diagonal();
        assert_eq!(bonus.apply(10), 13);
        assert_eq!(bonus.apply(4), 6); // 5.2
        assert_eq!(bonus.apply(0), 0);
        assert_eq!(bonus.apply(-4), -5); // -5.2
    }

    #[test]
    fn rejects_bad_cells() {
        assert_eq!(
            BonusWord::<2>::new::<&str>(&[], 130, &[]),
            Err(ConfigurationError::EmptyBonusCells)
        );
        assert_eq!(
            BonusWord::<2>::new(&[(0, 2)], 130, &["A"]),
            Err(ConfigurationError::BonusCellOutOfRange { row: 0, col: 2 })
        );
        assert_eq!(
            BonusWord::<2>::new(&[(1, 1), (1, 1)], 130, &["AA"]),
            Err(ConfigurationError::DuplicateBonusCell { row: 1, col: 1 })
        );
    }

    #[test]
    fn rejects_bad_percent_and_words() {
        assert!(matches!(
            BonusWord::<2>::new(&[(0, 0)], 0, &["A"]),
            Err(ConfigurationError::BonusPercent { value: 0, .. })
        ));
        assert!(matches!(
            BonusWord::<2>::new(&[(0, 0)], MAX_BONUS_PERCENT + 1, &["A"]),
            Err(ConfigurationError::BonusPercent { .. })
        ));
        assert_eq!(
            BonusWord::<2>::new(&[(0, 0), (0, 1)], 130, &["ABC"]),
            Err(ConfigurationError::BonusWord {
                word: "ABC".to_string(),
                expected: 2
            })
        );
    }
}

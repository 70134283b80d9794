//! Board validation and scoring
//!
//! A board is scored only if its rows, taken together, fit the inventory, it
//! uses the wildcard at most once, and every column is a dictionary word.

use super::board::Board;
use crate::core::{ALPHABET_SIZE, BonusWord, Dictionary, LetterInventory, Schema, letter_index};
use std::fmt;

/// Weighted board score
pub type Score = i64;

/// Most wildcards any board may use
pub const MAX_WILDCARDS_PER_BOARD: usize = 1;

/// Why a board was not scored
///
/// Rejection is the expected outcome for almost every enumerated board, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// More copies of `letter` are placed than the inventory holds
    LetterBudget {
        letter: char,
        used: u32,
        available: u32,
    },
    /// More rows consume the wildcard than are allowed
    WildcardCap { used: usize, allowed: usize },
    /// Column `index` reads as a word outside the dictionary
    Column { index: usize, text: String },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LetterBudget {
                letter,
                used,
                available,
            } => write!(f, "uses {used} x '{letter}' but only {available} available"),
            Self::WildcardCap { used, allowed } => {
                write!(f, "uses the wildcard in {used} rows (at most {allowed})")
            }
            Self::Column { index, text } => {
                write!(f, "column {} reads '{text}', not a dictionary word", index + 1)
            }
        }
    }
}

/// Validates and scores boards against shared, read-only puzzle data
#[derive(Debug, Clone, Copy)]
pub struct BoardEvaluator<'a, const N: usize> {
    inventory: &'a LetterInventory,
    schema: &'a Schema<N>,
    dictionary: &'a Dictionary<N>,
    bonus: Option<&'a BonusWord<N>>,
}

impl<'a, const N: usize> BoardEvaluator<'a, N> {
    #[must_use]
    pub const fn new(
        inventory: &'a LetterInventory,
        schema: &'a Schema<N>,
        dictionary: &'a Dictionary<N>,
    ) -> Self {
        Self {
            inventory,
            schema,
            dictionary,
            bonus: None,
        }
    }

    /// Also score `bonus` whenever a board spells one of its words
    #[must_use]
    pub const fn with_bonus(mut self, bonus: Option<&'a BonusWord<N>>) -> Self {
        self.bonus = bonus;
        self
    }

    /// Validate `board` and, if it passes, return its score
    ///
    /// # Errors
    /// Returns the first failed check as a `Rejection`.
    pub fn evaluate(&self, board: &Board<N>) -> Result<Score, Rejection> {
        self.validate(board)?;
        Ok(self.score(board))
    }

    /// Run the letter budget, wildcard cap, and column checks in that order
    ///
    /// # Errors
    /// Returns the first failed check as a `Rejection`.
    pub fn validate(&self, board: &Board<N>) -> Result<(), Rejection> {
        self.check_letter_budget(board)?;
        self.check_wildcard_cap(board)?;
        self.check_columns(board)
    }

    /// Sum of letter weight times cell multiplier; wildcard cells score 0
    ///
    /// With a bonus word configured, a board whose bonus cells spell an
    /// accepted word scores those cells again, scaled by the bonus percentage.
    /// Does not validate the board.
    #[must_use]
    pub fn score(&self, board: &Board<N>) -> Score {
        let base: Score = board
            .rows()
            .iter()
            .enumerate()
            .flat_map(|(row, candidate)| {
                candidate
                    .literals()
                    .map(move |(col, letter)| self.cell_score(row, col, letter))
            })
            .sum();
        base + self.bonus_score(board)
    }

    fn cell_score(&self, row: usize, col: usize, letter: u8) -> Score {
        let scores = self.inventory.letter_scores();
        letter_index(letter).map_or(0, |i| scores[i] * self.schema.multiplier(row, col))
    }

    fn bonus_score(&self, board: &Board<N>) -> Score {
        let Some(bonus) = self.bonus else {
            return 0;
        };
        let rows = board.rows();
        let letters: Vec<u8> = bonus
            .cells()
            .iter()
            .map(|&(row, col)| rows[row].word().letter_at(col))
            .collect();
        if !bonus.accepts(&letters) {
            return 0;
        }

        let base = bonus
            .cells()
            .iter()
            .zip(&letters)
            .filter(|&(&(row, col), _)| rows[row].wildcard_column() != Some(col))
            .map(|(&(row, col), &letter)| self.cell_score(row, col, letter))
            .sum();
        bonus.apply(base)
    }

    fn check_letter_budget(&self, board: &Board<N>) -> Result<(), Rejection> {
        let mut used = [0u32; ALPHABET_SIZE];
        for row in board.rows() {
            for (_, letter) in row.literals() {
                if let Some(index) = letter_index(letter) {
                    used[index] += 1;
                }
            }
        }

        let available = self.inventory.letter_counts();
        match (0..ALPHABET_SIZE).find(|&i| used[i] > available[i]) {
            Some(i) => Err(Rejection::LetterBudget {
                letter: char::from(b'A' + i as u8),
                used: used[i],
                available: available[i],
            }),
            None => Ok(()),
        }
    }

    fn check_wildcard_cap(&self, board: &Board<N>) -> Result<(), Rejection> {
        let allowed = (self.inventory.wildcard_count() as usize).min(MAX_WILDCARDS_PER_BOARD);
        let used = board.wildcard_rows();
        if used > allowed {
            return Err(Rejection::WildcardCap { used, allowed });
        }
        Ok(())
    }

    fn check_columns(&self, board: &Board<N>) -> Result<(), Rejection> {
        for index in 0..N {
            let column = board.column(index);
            if !self.dictionary.contains(&column) {
                return Err(Rejection::Column {
                    index,
                    text: column.to_string(),
                });
            }
        }
        Ok(())
    }
}

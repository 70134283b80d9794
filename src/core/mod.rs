//! Core domain types for the Bongo puzzle
//!
//! This module contains the puzzle's reference data: words, tiles, the letter
//! inventory, the multiplier schema, and the dictionary. All of it is built and
//! validated once, then shared read-only by the solver.

mod bonus;
mod dictionary;
mod error;
mod inventory;
mod schema;
mod tile;
mod word;

/// Side length of the production puzzle grid
pub const GRID_SIZE: usize = 5;

pub use bonus::{BonusWord, DEFAULT_BONUS_PERCENT, MAX_BONUS_PERCENT};
pub use dictionary::Dictionary;
pub use error::ConfigurationError;
pub use inventory::{LetterEntry, LetterInventory, MAX_TILE_SCORE};
pub use schema::{MAX_MULTIPLIER, Schema};
pub use tile::{ALPHABET_SIZE, Tile, letter_index};
pub use word::{Word, WordError};

//! Configuration errors raised before a search starts

use thiserror::Error;

/// A malformed inventory, schema, or search setting
///
/// Every variant is fatal: the solver refuses to start rather than search
/// against a puzzle that breaks its own invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Tile '{symbol}' has negative count {count}")]
    NegativeCount { symbol: String, count: i64 },

    #[error("Tile '{symbol}' count {count} exceeds the maximum of {max}")]
    CountOutOfRange { symbol: String, count: i64, max: u32 },

    #[error("Tile '{symbol}' score {score} is outside -{max}..={max}")]
    ScoreOutOfRange { symbol: String, score: i64, max: i64 },

    #[error("Tile '{0}' is declared more than once")]
    DuplicateSymbol(String),

    #[error("At most one wildcard entry may be declared")]
    MultipleWildcards,

    #[error("Wildcard score must be 0, got {0}")]
    WildcardScore(i64),

    #[error("Wildcard count must be exactly 1, got {0}")]
    WildcardCount(i64),

    #[error("Invalid tile symbol '{0}': expected a single letter or a wildcard (*, ?, ANY)")]
    InvalidSymbol(String),

    #[error("Schema must have {expected} rows, got {found}")]
    SchemaRows { expected: usize, found: usize },

    #[error("Schema row {row} must have {expected} columns, got {found}")]
    SchemaColumns {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Schema multiplier at ({row}, {col}) must be positive, got {value}")]
    NonPositiveMultiplier { row: usize, col: usize, value: i64 },

    #[error("Schema multiplier at ({row}, {col}) exceeds the maximum of {max}, got {value}")]
    MultiplierOutOfRange {
        row: usize,
        col: usize,
        value: i64,
        max: i64,
    },

    #[error("Bonus word needs at least one cell")]
    EmptyBonusCells,

    #[error("Bonus cell ({row}, {col}) is outside the grid")]
    BonusCellOutOfRange { row: usize, col: usize },

    #[error("Bonus cell ({row}, {col}) is listed more than once")]
    DuplicateBonusCell { row: usize, col: usize },

    #[error("Bonus percent must be in 1..={max}, got {value}")]
    BonusPercent { value: i64, max: i64 },

    #[error("Bonus word '{word}' must be {expected} ASCII letters")]
    BonusWord { word: String, expected: usize },

    #[error("Grid size must be at least 1")]
    EmptyGrid,

    #[error("Chunk size must be at least 1")]
    ZeroChunkSize,
}

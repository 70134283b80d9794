//! Puzzle configuration
//!
//! Tile inventory and multiplier schema, read from TOML or taken from the
//! built-in default puzzle.

mod loader;
mod types;

pub use loader::{load_config, load_config_from_str, load_puzzle};
pub use types::{BonusConfig, Puzzle, PuzzleConfig, TileConfig};

use crate::core::ConfigurationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read configuration file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Invalid puzzle: {0}")]
    Invalid(#[from] ConfigurationError),
}

use std::fs;
use std::path::Path;

use super::ConfigLoadError;
use super::types::{Puzzle, PuzzleConfig};

/// Load a puzzle configuration from a TOML file
///
/// # Errors
/// Returns `ConfigLoadError` if the file is missing, unreadable, or not a
/// valid puzzle document. Puzzle invariants are checked later, by
/// `PuzzleConfig::into_puzzle`.
pub fn load_config(path: &Path) -> Result<PuzzleConfig, ConfigLoadError> {
    if !path.exists() {
        return Err(ConfigLoadError::FileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    load_config_from_str(&content)
}

/// Load a puzzle configuration from a TOML string
///
/// # Errors
/// Returns `ConfigLoadError::Parse` if the text is not a valid puzzle document.
pub fn load_config_from_str(toml_str: &str) -> Result<PuzzleConfig, ConfigLoadError> {
    toml::from_str(toml_str).map_err(|e| ConfigLoadError::Parse(e.to_string()))
}

/// Load and validate a puzzle, falling back to the built-in default when no
/// file is given
///
/// # Errors
/// Returns `ConfigLoadError` if the file cannot be loaded or the puzzle breaks
/// its invariants.
pub fn load_puzzle<const N: usize>(path: Option<&Path>) -> Result<Puzzle<N>, ConfigLoadError> {
    let config = match path {
        Some(path) => load_config(path)?,
        None => PuzzleConfig::builtin(),
    };
    Ok(config.into_puzzle()?)
}

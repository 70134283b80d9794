//! Dictionary loading utilities
//!
//! Provides functions to load a dictionary from a file or from the embedded
//! word list.

use super::WORDS;
use crate::core::{Dictionary, Word};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Load an `N`-letter dictionary from a file with one word per line
///
/// Blank lines and entries that are not `N` ASCII letters are skipped; words
/// are uppercased.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use bongo_solver::core::Dictionary;
/// use bongo_solver::wordlists::loader::load_from_file;
///
/// let dictionary: Dictionary = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<const N: usize, P: AsRef<Path>>(path: P) -> io::Result<Dictionary<N>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let mut skipped = 0usize;
    let dictionary: Dictionary<N> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).inspect_err(|_| skipped += 1).ok())
        .collect();

    if skipped > 0 {
        debug!(skipped, length = N, "Skipped entries of the wrong shape");
    }
    info!(path = %path.display(), words = dictionary.len(), "Loaded dictionary");

    Ok(dictionary)
}

/// Build a dictionary from a string slice, skipping invalid entries
///
/// # Examples
/// ```
/// use bongo_solver::core::Dictionary;
/// use bongo_solver::wordlists::loader::words_from_slice;
///
/// let dictionary: Dictionary = words_from_slice(&["stone", "bread", "abc"]);
/// assert_eq!(dictionary.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice<const N: usize>(slice: &[&str]) -> Dictionary<N> {
    Dictionary::from_strs(slice)
}

/// The embedded default dictionary
#[must_use]
pub fn embedded() -> Dictionary {
    words_from_slice(WORDS)
}

//! Fixed-length word representation
//!
//! A Word stores exactly `N` uppercase ASCII letters inline, so it is `Copy`
//! and can be hashed and compared without allocation.

use super::GRID_SIZE;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An `N`-letter uppercase word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word<const N: usize = GRID_SIZE> {
    letters: [u8; N],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl<const N: usize> Word<N> {
    /// Create a new Word from a string, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `N`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use bongo_solver::core::Word;
    ///
    /// let word: Word = Word::new("bread").unwrap();
    /// assert_eq!(word.as_str(), "BREAD");
    ///
    /// assert!(Word::<5>::new("too long").is_err());
    /// assert!(Word::<5>::new("br3ad").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let bytes = text.as_bytes();
        if bytes.len() != N {
            return Err(WordError::InvalidLength {
                expected: N,
                found: bytes.len(),
            });
        }

        if !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = [0u8; N];
        for (slot, &byte) in letters.iter_mut().zip(bytes) {
            *slot = byte.to_ascii_uppercase();
        }

        Ok(Self { letters })
    }

    /// Build a word from letters already known to be uppercase ASCII
    ///
    /// Used for column reads, where every letter comes from a validated row.
    #[inline]
    pub(crate) const fn from_letters(letters: [u8; N]) -> Self {
        Self { letters }
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Will not panic - construction only admits ASCII letters.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.letters).expect("letters are validated ASCII")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; N] {
        &self.letters
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= N`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }
}

impl<const N: usize> FromStr for Word<N> {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<const N: usize> fmt::Display for Word<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

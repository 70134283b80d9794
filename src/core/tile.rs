//! Tile symbols: an ordinary letter or the wildcard

use super::ConfigurationError;
use std::fmt;
use std::str::FromStr;

/// Number of distinct letter tiles (A-Z)
pub const ALPHABET_SIZE: usize = 26;

/// A placeable tile kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tile {
    /// An uppercase ASCII letter
    Letter(u8),
    /// The zero-score tile that stands in for any one letter
    Wildcard,
}

impl Tile {
    /// Create a letter tile, normalizing to uppercase
    ///
    /// Returns `None` for anything outside A-Z.
    #[must_use]
    pub const fn letter(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self::Letter(byte.to_ascii_uppercase()))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// Position of a letter tile in the A-Z tables, `None` for the wildcard
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Letter(byte) => letter_index(byte),
            Self::Wildcard => None,
        }
    }
}

/// Position of an uppercase ASCII letter in the A-Z tables
#[inline]
#[must_use]
pub const fn letter_index(byte: u8) -> Option<usize> {
    if byte.is_ascii_uppercase() {
        Some((byte - b'A') as usize)
    } else {
        None
    }
}

impl FromStr for Tile {
    type Err = ConfigurationError;

    /// Parse a configuration symbol
    ///
    /// Accepts a single letter (any case) or one of the wildcard spellings
    /// `*`, `?` and `ANY`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "*" | "?" => return Ok(Self::Wildcard),
            any if any.eq_ignore_ascii_case("any") => return Ok(Self::Wildcard),
            _ => {}
        }

        match trimmed.as_bytes() {
            [byte] => Self::letter(*byte),
            _ => None,
        }
        .ok_or_else(|| ConfigurationError::InvalidSymbol(s.to_string()))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(byte) => write!(f, "{}", char::from(*byte)),
            Self::Wildcard => f.write_str("*"),
        }
    }
}

//! Letter inventory: how many of each tile exist and what each is worth

use super::tile::{ALPHABET_SIZE, Tile};
use super::ConfigurationError;

/// Largest score weight magnitude a tile may carry
///
/// With multipliers capped by `MAX_MULTIPLIER`, every board score stays far
/// inside `i64` for any realistic grid.
pub const MAX_TILE_SCORE: i64 = 1_000_000;

/// One declared tile kind with its supply and score weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterEntry {
    pub tile: Tile,
    pub count: i64,
    pub score: i64,
}

impl LetterEntry {
    #[must_use]
    pub const fn new(tile: Tile, count: i64, score: i64) -> Self {
        Self { tile, count, score }
    }
}

/// Validated, read-only tile supply
///
/// Per-letter counts and scores are held in A-Z tables so lookups during the
/// search are a single index. Letters that were never declared have count 0
/// and score 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterInventory {
    entries: Vec<LetterEntry>,
    counts: [u32; ALPHABET_SIZE],
    scores: [i64; ALPHABET_SIZE],
    wildcards: u32,
}

impl LetterInventory {
    /// Build an inventory from declared entries
    ///
    /// # Errors
    /// Returns `ConfigurationError` if an entry has a negative or oversized
    /// count, a score beyond `MAX_TILE_SCORE`, a symbol is declared twice,
    /// more than one wildcard is declared, or the wildcard does not have
    /// count 1 and score 0.
    ///
    /// # Examples
    /// ```
    /// use bongo_solver::core::{LetterEntry, LetterInventory, Tile};
    ///
    /// let inventory = LetterInventory::new([
    ///     LetterEntry::new(Tile::Letter(b'A'), 3, 2),
    ///     LetterEntry::new(Tile::Wildcard, 1, 0),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(inventory.count(Tile::Letter(b'A')), 3);
    /// assert_eq!(inventory.count(Tile::Letter(b'Z')), 0);
    /// assert_eq!(inventory.score(Tile::Wildcard), 0);
    /// ```
    pub fn new(entries: impl IntoIterator<Item = LetterEntry>) -> Result<Self, ConfigurationError> {
        let mut inventory = Self {
            entries: Vec::new(),
            counts: [0; ALPHABET_SIZE],
            scores: [0; ALPHABET_SIZE],
            wildcards: 0,
        };
        let mut declared = [false; ALPHABET_SIZE];

        for entry in entries {
            match entry.tile {
                Tile::Wildcard => {
                    if inventory.wildcards > 0 {
                        return Err(ConfigurationError::MultipleWildcards);
                    }
                    if entry.score != 0 {
                        return Err(ConfigurationError::WildcardScore(entry.score));
                    }
                    if entry.count != 1 {
                        return Err(ConfigurationError::WildcardCount(entry.count));
                    }
                    inventory.wildcards = 1;
                }
                Tile::Letter(_) => {
                    let index = entry
                        .tile
                        .index()
                        .ok_or_else(|| ConfigurationError::InvalidSymbol(entry.tile.to_string()))?;
                    if entry.count < 0 {
                        return Err(ConfigurationError::NegativeCount {
                            symbol: entry.tile.to_string(),
                            count: entry.count,
                        });
                    }
                    let count = u32::try_from(entry.count).map_err(|_| {
                        ConfigurationError::CountOutOfRange {
                            symbol: entry.tile.to_string(),
                            count: entry.count,
                            max: u32::MAX,
                        }
                    })?;
                    if entry.score.unsigned_abs() > MAX_TILE_SCORE.unsigned_abs() {
                        return Err(ConfigurationError::ScoreOutOfRange {
                            symbol: entry.tile.to_string(),
                            score: entry.score,
                            max: MAX_TILE_SCORE,
                        });
                    }
                    if declared[index] {
                        return Err(ConfigurationError::DuplicateSymbol(entry.tile.to_string()));
                    }
                    declared[index] = true;
                    inventory.counts[index] = count;
                    inventory.scores[index] = entry.score;
                }
            }
            inventory.entries.push(entry);
        }

        Ok(inventory)
    }

    /// Number of tiles of this kind available (0 if never declared)
    #[inline]
    #[must_use]
    pub fn count(&self, tile: Tile) -> u32 {
        match tile {
            Tile::Letter(_) => tile.index().map_or(0, |i| self.counts[i]),
            Tile::Wildcard => self.wildcards,
        }
    }

    /// Score weight of this tile kind (0 for the wildcard or unknown letters)
    #[inline]
    #[must_use]
    pub fn score(&self, tile: Tile) -> i64 {
        tile.index().map_or(0, |i| self.scores[i])
    }

    /// Whether `tile` is the wildcard
    #[inline]
    #[must_use]
    pub const fn is_wildcard(&self, tile: Tile) -> bool {
        tile.is_wildcard()
    }

    /// Number of wildcard tiles available (0 or 1)
    #[inline]
    #[must_use]
    pub const fn wildcard_count(&self) -> u32 {
        self.wildcards
    }

    /// Per-letter counts indexed A-Z
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &[u32; ALPHABET_SIZE] {
        &self.counts
    }

    /// Per-letter score weights indexed A-Z
    #[inline]
    #[must_use]
    pub const fn letter_scores(&self) -> &[i64; ALPHABET_SIZE] {
        &self.scores
    }

    /// Total number of tiles, wildcard included
    #[must_use]
    pub fn total_tiles(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum::<u64>() + u64::from(self.wildcards)
    }

    /// Declared entries in their original order
    #[must_use]
    pub fn entries(&self) -> &[LetterEntry] {
        &self.entries
    }
}

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{
    BonusWord, ConfigurationError, DEFAULT_BONUS_PERCENT, GRID_SIZE, LetterEntry, LetterInventory,
    Schema, Tile,
};

/// One `[[tiles]]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileConfig {
    /// A single letter, or `*` / `?` / `ANY` for the wildcard
    pub symbol: String,
    pub count: i64,
    #[serde(default)]
    pub score: i64,
}

impl TileConfig {
    fn new(symbol: &str, count: i64, score: i64) -> Self {
        Self {
            symbol: symbol.to_string(),
            count,
            score,
        }
    }
}

/// Optional `[bonus]` table
///
/// ```toml
/// [bonus]
/// cells = [[0, 2], [1, 2], [2, 2], [3, 3]]
/// percent = 130
/// words = ["BOMB", "BOOM"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusConfig {
    /// 0-based `[row, col]` cells, in reading order
    pub cells: Vec<[usize; 2]>,
    #[serde(default = "default_bonus_percent")]
    pub percent: i64,
    pub words: Vec<String>,
}

const fn default_bonus_percent() -> i64 {
    DEFAULT_BONUS_PERCENT
}

/// Puzzle definition as written in a TOML file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub tiles: Vec<TileConfig>,
    pub schema: Vec<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus: Option<BonusConfig>,
}

/// Validated puzzle data, ready to search
#[derive(Debug, Clone)]
pub struct Puzzle<const N: usize = GRID_SIZE> {
    pub inventory: LetterInventory,
    pub schema: Schema<N>,
    /// Off unless the configuration declares a `[bonus]` table
    pub bonus: Option<BonusWord<N>>,
}

impl PuzzleConfig {
    /// The default puzzle: thirteen letters plus one wildcard, with two
    /// bonus rows near the bottom of the grid
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            tiles: vec![
                TileConfig::new("G", 1, 45),
                TileConfig::new("B", 3, 50),
                TileConfig::new("M", 1, 35),
                TileConfig::new("D", 1, 30),
                TileConfig::new("N", 2, 20),
                TileConfig::new("U", 1, 15),
                TileConfig::new("L", 1, 9),
                TileConfig::new("T", 2, 10),
                TileConfig::new("O", 2, 7),
                TileConfig::new("R", 2, 7),
                TileConfig::new("S", 3, 5),
                TileConfig::new("A", 4, 5),
                TileConfig::new("E", 2, 5),
                TileConfig::new("*", 1, 0),
            ],
            schema: vec![
                vec![1, 1, 1, 1, 1],
                vec![1, 1, 1, 1, 1],
                vec![1, 1, 1, 1, 1],
                vec![1, 2, 1, 3, 1],
                vec![1, 1, 1, 2, 1],
            ],
            bonus: None,
        }
    }

    /// Validate into an `N`x`N` puzzle
    ///
    /// # Errors
    /// Returns `ConfigurationError` if a symbol does not parse, the inventory
    /// breaks its invariants, or the schema or bonus table is malformed.
    pub fn into_puzzle<const N: usize>(&self) -> Result<Puzzle<N>, ConfigurationError> {
        let entries = self
            .tiles
            .iter()
            .map(|tile| {
                let symbol: Tile = tile.symbol.parse()?;
                Ok(LetterEntry::new(symbol, tile.count, tile.score))
            })
            .collect::<Result<Vec<_>, ConfigurationError>>()?;

        let inventory = LetterInventory::new(entries)?;
        let schema = Schema::new(&self.schema)?;
        let bonus = self
            .bonus
            .as_ref()
            .map(|bonus| {
                let cells: Vec<(usize, usize)> =
                    bonus.cells.iter().map(|&[row, col]| (row, col)).collect();
                BonusWord::new(&cells, bonus.percent, bonus.words.as_slice())
            })
            .transpose()?;

        let cells = (N * N) as u64;
        if inventory.total_tiles() < cells {
            warn!(
                tiles = inventory.total_tiles(),
                cells, "Inventory cannot fill the grid; no board will validate"
            );
        }

        Ok(Puzzle {
            inventory,
            schema,
            bonus,
        })
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

//! Board configuration
//!
//! Everything that is fixed for the lifetime of a board lives here. The defaults
//! reproduce the classic 8x8 four-color game.

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, MAX_TILE_KINDS, TILE_KINDS};

/// Upper bound on stabilization re-roll passes before giving up
pub const DEFAULT_MAX_STABILIZE_PASSES: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Number of tile kinds (K), in `1..=MAX_TILE_KINDS`
    pub tile_kinds: u8,
    /// Restrict swap evaluation to grid neighbors
    pub enforce_adjacent: bool,
    /// Seed for the default tile source
    pub seed: u32,
    pub max_stabilize_passes: usize,
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_tile_kinds(mut self, tile_kinds: u8) -> Self {
        self.tile_kinds = tile_kinds;
        self
    }

    pub fn with_enforce_adjacent(mut self, enforce_adjacent: bool) -> Self {
        self.enforce_adjacent = enforce_adjacent;
        self
    }

    pub fn with_max_stabilize_passes(mut self, passes: usize) -> Self {
        self.max_stabilize_passes = passes;
        self
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        if self.tile_kinds == 0 {
            return Err(BoardError::NoTileKinds);
        }
        if self.tile_kinds > MAX_TILE_KINDS {
            return Err(BoardError::TooManyTileKinds {
                tile_kinds: self.tile_kinds,
                max: MAX_TILE_KINDS,
            });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tile_kinds: TILE_KINDS,
            enforce_adjacent: true,
            seed: 1,
            max_stabilize_passes: DEFAULT_MAX_STABILIZE_PASSES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_game() {
        let config = BoardConfig::default();
        assert_eq!((config.rows, config.cols), (8, 8));
        assert_eq!(config.tile_kinds, 4);
        assert!(config.enforce_adjacent);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_tile_kinds_rejected() {
        let config = BoardConfig::default().with_tile_kinds(0);
        assert_eq!(config.validate(), Err(BoardError::NoTileKinds));
    }

    #[test]
    fn tile_kinds_must_fit_cell_encoding() {
        assert!(BoardConfig::default().with_tile_kinds(127).validate().is_ok());
        for kinds in [128, 200, 255] {
            assert_eq!(
                BoardConfig::default().with_tile_kinds(kinds).validate(),
                Err(BoardError::TooManyTileKinds {
                    tile_kinds: kinds,
                    max: 127
                })
            );
        }
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: BoardConfig =
            serde_json::from_str(r#"{ "rows": 5, "enforce_adjacent": false }"#).unwrap();
        assert_eq!(config.rows, 5);
        assert_eq!(config.cols, 8);
        assert!(!config.enforce_adjacent);
        assert_eq!(config.max_stabilize_passes, DEFAULT_MAX_STABILIZE_PASSES);
    }
}

//! Game configuration.
//!
//! A `GameConfig` fixes the grid size and the winning tile for the lifetime
//! of one game; changing either means starting a new game. The engine itself
//! never validates configuration, so everything that builds a game goes
//! through [`GameConfig::validate`].
//!
//! # Examples
//!
//! ```
//! use slide_2048::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str(r#"
//!     grid_size = 5
//!     winning_tile = 4096
//! "#).unwrap();
//!
//! assert_eq!(config.grid_size, 5);
//! assert_eq!(config.winning_tile, 4096);
//! assert_eq!(config.history_limit, 64); // defaulted
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tile::is_tile_value;

/// Supported grid side lengths.
pub const GRID_SIZES: RangeInclusive<usize> = 4..=8;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid size {size} is outside the supported range {min}..={max}")]
    UnsupportedGridSize { size: usize, min: usize, max: usize },

    #[error("winning tile {0} must be a power of two of at least 4")]
    InvalidWinningTile(u32),

    #[error("grid is {actual}x{actual} but the configuration expects {expected}x{expected}")]
    GridSizeMismatch { expected: usize, actual: usize },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid (4-8).
    pub grid_size: usize,

    /// Tile value that wins the game. Any tile at or above it counts.
    pub winning_tile: u32,

    /// Maximum number of undo steps kept (0 disables undo).
    pub history_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 4,
            winning_tile: 2048,
            history_limit: 64,
        }
    }
}

impl GameConfig {
    /// Create a validated configuration with the default history limit.
    pub fn new(grid_size: usize, winning_tile: u32) -> Result<Self, ConfigError> {
        let config = Self::default()
            .with_grid_size(grid_size)
            .with_winning_tile(winning_tile);
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from TOML. Missing keys take
    /// their default values.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the grid size.
    #[must_use]
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    /// Set the winning tile.
    #[must_use]
    pub fn with_winning_tile(mut self, tile: u32) -> Self {
        self.winning_tile = tile;
        self
    }

    /// Set the undo depth.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Check the configuration against the supported ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !GRID_SIZES.contains(&self.grid_size) {
            return Err(ConfigError::UnsupportedGridSize {
                size: self.grid_size,
                min: *GRID_SIZES.start(),
                max: *GRID_SIZES.end(),
            });
        }
        // A target of 2 would be won by the opening spawn.
        if !is_tile_value(self.winning_tile) || self.winning_tile < 4 {
            return Err(ConfigError::InvalidWinningTile(self.winning_tile));
        }
        Ok(())
    }
}

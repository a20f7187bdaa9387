//! Core engine types: tiles, grid, directions, RNG, configuration.
//!
//! This module contains the data model every other module builds on.
//! Nothing here knows how tiles slide or merge; that lives in `engine`.

pub mod tile;
pub mod grid;
pub mod direction;
pub mod rng;
pub mod config;

pub use tile::{is_tile_value, Position, Tile, TileId, MAX_TILE_VALUE};
pub use grid::{Grid, GridError};
pub use direction::Direction;
pub use rng::{GameRng, GameRngState};
pub use config::{ConfigError, GameConfig, GRID_SIZES};

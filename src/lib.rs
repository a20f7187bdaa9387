//! # slide-2048
//!
//! A deterministic engine for the 2048 sliding-tile puzzle.
//!
//! ## Design Principles
//!
//! 1. **Pure Moves**: Every engine operation takes a grid and returns a new
//!    one. Nothing is mutated behind the caller's back.
//!
//! 2. **Injected Randomness**: Tile spawning is the only random step and it
//!    draws from a caller-supplied `GameRng`, so games replay exactly from a
//!    seed.
//!
//! 3. **No Free Tiles**: A move that changes nothing spawns nothing and
//!    scores nothing.
//!
//! ## Architecture
//!
//! - **Flat Arena Grid**: `N²` optional tiles in row-major order; tiles keep
//!   stable ids across slides and merges so a renderer can animate them.
//!
//! - **Direction-Agnostic Reducer**: Each row or column is read in travel
//!   order and reduced towards index 0; `Direction::cell` maps it back.
//!
//! ## Modules
//!
//! - `core`: Tiles, grid, directions, RNG, configuration
//! - `engine`: Line reducer, move orchestrator, spawner, win/loss detection
//! - `session`: Game state machine, undo/redo history, share summary
//!
//! ```
//! use slide_2048::{move_grid, Direction, Grid};
//!
//! let grid = Grid::from_rows(&[
//!     [2, 2, 2, 2],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ]).unwrap();
//!
//! let result = move_grid(&grid, Direction::Left);
//! assert_eq!(result.grid.row_values(0), vec![4, 4, 0, 0]);
//! assert_eq!(result.score, 8);
//! ```

pub mod core;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Direction, GameConfig, GameRng, GameRngState,
    Grid, GridError, Position, Tile, TileId,
};

pub use crate::engine::{
    add_random_tile, create_initial_grid, has_won, is_game_over, move_grid,
    MoveResult,
};

pub use crate::session::{
    Game, GameStatus, GameSummary, History, HistoryError, Snapshot, TurnOutcome,
};

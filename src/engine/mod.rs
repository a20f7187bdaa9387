//! The move engine.
//!
//! Pure functions over [`Grid`](crate::core::Grid) values:
//!
//! - `line`: slide and merge a single row or column
//! - `moves`: apply the line reducer to a whole grid for one direction
//! - `spawn`: place a random tile after a successful move
//! - `terminal`: win and loss detection
//!
//! Callers sequence a turn as: move, then (only if it moved) spawn, then
//! check for a terminal state. The session layer in `session` does exactly
//! that.

pub mod line;
pub mod moves;
pub mod spawn;
pub mod terminal;

pub use line::{reduce_line, LineBuf, LineReduction};
pub use moves::{available_moves, move_grid, MoveResult};
pub use spawn::{add_random_tile, create_initial_grid, spawn_value, FOUR_PROBABILITY};
pub use terminal::{has_won, is_game_over};

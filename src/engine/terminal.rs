//! Terminal-state detection: win and loss.

use crate::core::{Direction, Grid};

use super::moves::move_grid;

/// True if any tile has reached `target`.
///
/// Uses `>=` so a merge that overshoots the target still wins.
#[must_use]
pub fn has_won(grid: &Grid, target: u32) -> bool {
    grid.tiles().any(|tile| tile.value >= target)
}

/// True if the grid is full and no direction changes it.
///
/// Every direction is simulated with the full move orchestrator rather than
/// an adjacency check, so the answer always agrees with [`move_grid`].
#[must_use]
pub fn is_game_over(grid: &Grid) -> bool {
    grid.is_full()
        && Direction::ALL
            .iter()
            .all(|&direction| !move_grid(grid, direction).moved)
}

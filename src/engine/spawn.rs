//! Tile spawner and grid initialization.
//!
//! Spawning is the only randomized step of the engine. It runs exactly once
//! after every move that changed the grid, and never before the move has
//! been evaluated.

use tracing::warn;

use crate::core::{GameRng, Grid};

/// Probability that a spawned tile is a 4 rather than a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

/// Draw the value of a newly spawned tile: 2 (90%) or 4 (10%).
pub fn spawn_value(rng: &mut GameRng) -> u32 {
    if rng.gen_bool(FOUR_PROBABILITY) {
        4
    } else {
        2
    }
}

/// Place one new tile in a uniformly chosen empty cell.
///
/// The tile gets a fresh id from the grid. On a full grid this is a no-op
/// and the grid is returned unchanged: callers are expected to have checked
/// for game over first.
///
/// ```
/// use slide_2048::core::{GameRng, Grid};
/// use slide_2048::engine::add_random_tile;
///
/// let mut rng = GameRng::new(7);
/// let grid = add_random_tile(&Grid::empty(4), &mut rng);
/// assert_eq!(grid.occupied_count(), 1);
/// ```
#[must_use]
pub fn add_random_tile(grid: &Grid, rng: &mut GameRng) -> Grid {
    let empty = grid.empty_positions();
    if empty.is_empty() {
        warn!(
            event = "spawn_on_full_grid",
            size = grid.size(),
            "add_random_tile called on a full grid, ignoring"
        );
        return grid.clone();
    }

    let position = empty[rng.gen_index(empty.len())];
    let value = spawn_value(rng);
    let mut next = grid.clone();
    next.spawn(position, value);
    next
}

/// Create an empty grid of side `size` holding two spawned tiles.
///
/// # Panics
///
/// Panics if `size` is zero.
#[must_use]
pub fn create_initial_grid(size: usize, rng: &mut GameRng) -> Grid {
    let grid = add_random_tile(&Grid::empty(size), rng);
    add_random_tile(&grid, rng)
}

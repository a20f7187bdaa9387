//! Move orchestrator: apply the line reducer across the whole grid.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, Grid};

use super::line::{reduce_line, LineBuf};

/// Outcome of one move attempt.
///
/// Produced once per call to [`move_grid`] and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// The grid after sliding and merging. No tile has been spawned yet.
    pub grid: Grid,

    /// True if any tile changed value or position.
    pub moved: bool,

    /// Points gained by merges in this move.
    pub score: u64,
}

/// Slide every row (left/right) or column (up/down) of `grid`.
///
/// Pure and total: the input is never modified. When `moved` is false the
/// returned grid equals the input and the caller must neither spawn a tile
/// nor add score.
///
/// ```
/// use slide_2048::core::{Direction, Grid};
/// use slide_2048::engine::move_grid;
///
/// let grid = Grid::from_rows(&[
///     [2, 2, 4, 4],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ]).unwrap();
///
/// let result = move_grid(&grid, Direction::Left);
/// assert!(result.moved);
/// assert_eq!(result.score, 12);
/// assert_eq!(result.grid.row_values(0), vec![4, 8, 0, 0]);
/// ```
#[must_use]
pub fn move_grid(grid: &Grid, direction: Direction) -> MoveResult {
    let size = grid.size();
    let mut next = grid.clone();
    let mut moved = false;
    let mut score = 0u64;

    for line in 0..size {
        let place = |offset| direction.cell(size, line, offset);
        let cells: LineBuf = (0..size).map(|offset| grid.slot(place(offset))).collect();

        let reduced = reduce_line(&cells, place);
        if !reduced.moved {
            continue;
        }
        moved = true;
        score += reduced.score;
        for (offset, cell) in reduced.cells.into_iter().enumerate() {
            next.set_slot(place(offset), cell);
        }
    }

    MoveResult {
        grid: next,
        moved,
        score,
    }
}

/// Directions in which a move would change `grid`.
#[must_use]
pub fn available_moves(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| move_grid(grid, direction).moved)
        .collect()
}

//! Move directions and the travel-order mapping for lines.
//!
//! The line reducer always slides towards offset 0. `Direction::cell` maps a
//! `(line, offset)` pair back onto the grid, so the same reducer serves all
//! four directions:
//!
//! | Direction | line is | offset 0 is |
//! |-----------|---------|-------------|
//! | Left      | row     | column 0    |
//! | Right     | row     | last column |
//! | Up        | column  | row 0       |
//! | Down      | column  | last row    |

use serde::{Deserialize, Serialize};

use super::tile::Position;

/// A direction to slide tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Grid position of the cell at `offset` in travel order along `line`.
    ///
    /// ```
    /// use slide_2048::core::{Direction, Position};
    ///
    /// // Sliding right, the first cell in travel order is the rightmost one.
    /// assert_eq!(Direction::Right.cell(4, 1, 0), Position::new(1, 3));
    /// assert_eq!(Direction::Up.cell(4, 2, 1), Position::new(1, 2));
    /// ```
    #[must_use]
    pub const fn cell(self, size: usize, line: usize, offset: usize) -> Position {
        match self {
            Direction::Left => Position::new(line, offset),
            Direction::Right => Position::new(line, size - 1 - offset),
            Direction::Up => Position::new(offset, line),
            Direction::Down => Position::new(size - 1 - offset, line),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

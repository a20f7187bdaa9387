//! The square tile grid.
//!
//! ## Layout
//!
//! A grid of side `N` is a flat arena of `N²` optional tiles in row-major
//! order. Slots are updated in place while a new grid is being built, and
//! every engine operation hands back a fresh `Grid` instead of touching its
//! input.
//!
//! ## Invariants
//!
//! - Each occupied slot holds exactly one tile whose `position` is that slot
//! - Every tile value is a power of two, at least 2
//! - Tile ids are unique within the grid and below `next_id`
//!
//! ```
//! use slide_2048::core::{Grid, Position};
//!
//! let grid = Grid::from_rows(&[
//!     [2, 0, 0, 0],
//!     [0, 4, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 8],
//! ]).unwrap();
//!
//! assert_eq!(grid.size(), 4);
//! assert_eq!(grid.occupied_count(), 3);
//! assert_eq!(grid.get(Position::new(1, 1)).map(|t| t.value), Some(4));
//! assert_eq!(grid.max_value(), Some(8));
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tile::{is_tile_value, Position, Tile, TileId};

/// Errors from building a grid out of raw values or a serialized grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size must be at least 1")]
    ZeroSize,

    #[error("expected {expected} cells for the grid, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    #[error("cell {index} holds {value}, which is not a power of two >= 2")]
    InvalidValue { index: usize, value: u32 },

    #[error("cell {index} holds a tile positioned at {position}")]
    MisplacedTile { index: usize, position: Position },

    #[error("{0} appears more than once")]
    DuplicateId(TileId),

    #[error("{id} is not below the next id {next_id}")]
    StaleNextId { id: TileId, next_id: u32 },
}

/// Square grid of optional tiles.
///
/// Deserializing checks every invariant listed above and fails with a
/// [`GridError`] instead of producing a grid the engine cannot handle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Tile>>,
    next_id: u32,
}

impl Grid {
    /// Create an all-empty grid of side `size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(size > 0, "Grid size must be at least 1");

        Self {
            size,
            cells: vec![None; size * size],
            next_id: 0,
        }
    }

    /// Build a grid from row-major values, `0` meaning empty.
    ///
    /// Tiles get ids in row-major order starting from 0.
    pub fn from_values(size: usize, values: &[u32]) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        if values.len() != size * size {
            return Err(GridError::WrongLength {
                expected: size * size,
                actual: values.len(),
            });
        }

        let mut grid = Self::empty(size);
        for (index, &value) in values.iter().enumerate() {
            if value == 0 {
                continue;
            }
            if !is_tile_value(value) {
                return Err(GridError::InvalidValue { index, value });
            }
            grid.spawn(Position::from_index(index, size), value);
        }
        Ok(grid)
    }

    /// Build a grid from a slice of rows, `0` meaning empty.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        let mut values = Vec::with_capacity(size * size);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: cells.len(),
                    expected: size,
                });
            }
            values.extend_from_slice(cells);
        }
        Self::from_values(size, &values)
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The tile at `position`, if any.
    ///
    /// Returns `None` for positions outside the grid.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Tile> {
        if position.row >= self.size || position.col >= self.size {
            return None;
        }
        self.cells[position.index(self.size)].as_ref()
    }

    /// Iterate over all occupied cells in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flatten()
    }

    /// Positions of all empty cells in row-major order.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| Position::from_index(index, self.size))
            .collect()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.occupied_count()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Largest tile value, or `None` on an empty grid.
    #[must_use]
    pub fn max_value(&self) -> Option<u32> {
        self.tiles().map(|tile| tile.value).max()
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn value_sum(&self) -> u64 {
        self.tiles().map(|tile| u64::from(tile.value)).sum()
    }

    /// Row-major values with `0` for empty cells.
    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.cells
            .iter()
            .map(|cell| cell.map_or(0, |tile| tile.value))
            .collect()
    }

    /// Values of one row with `0` for empty cells.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn row_values(&self, row: usize) -> Vec<u32> {
        assert!(row < self.size, "Row {row} out of range");
        self.cells[row * self.size..(row + 1) * self.size]
            .iter()
            .map(|cell| cell.map_or(0, |tile| tile.value))
            .collect()
    }

    /// The id the next spawned tile will receive.
    #[must_use]
    pub fn next_id(&self) -> TileId {
        TileId(self.next_id)
    }

    // === Crate-internal mutation ===

    /// Copy of the slot at `position`.
    pub(crate) fn slot(&self, position: Position) -> Option<Tile> {
        self.cells[position.index(self.size)]
    }

    /// Overwrite the slot at `position`.
    pub(crate) fn set_slot(&mut self, position: Position, cell: Option<Tile>) {
        debug_assert!(cell.map_or(true, |tile| tile.position == position));
        let index = position.index(self.size);
        self.cells[index] = cell;
    }

    /// Place a new tile with a fresh id at an empty `position`.
    pub(crate) fn spawn(&mut self, position: Position, value: u32) -> TileId {
        debug_assert!(self.slot(position).is_none());
        debug_assert!(is_tile_value(value));
        let id = TileId(self.next_id);
        self.next_id += 1;
        self.set_slot(position, Some(Tile::new(id, value, position)));
        id
    }
}

/// Unchecked serialized form of a [`Grid`].
#[derive(Deserialize)]
struct GridRepr {
    size: usize,
    cells: Vec<Option<Tile>>,
    next_id: u32,
}

impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let GridRepr {
            size,
            cells,
            next_id,
        } = repr;

        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        if size.checked_mul(size) != Some(cells.len()) {
            return Err(GridError::WrongLength {
                expected: size.saturating_mul(size),
                actual: cells.len(),
            });
        }

        let mut seen = HashSet::with_capacity(cells.len());
        for (index, tile) in cells.iter().enumerate() {
            let Some(tile) = tile else { continue };
            if !is_tile_value(tile.value) {
                return Err(GridError::InvalidValue {
                    index,
                    value: tile.value,
                });
            }
            if tile.position != Position::from_index(index, size) {
                return Err(GridError::MisplacedTile {
                    index,
                    position: tile.position,
                });
            }
            if tile.id.raw() >= next_id {
                return Err(GridError::StaleNextId { id: tile.id, next_id });
            }
            if !seen.insert(tile.id) {
                return Err(GridError::DuplicateId(tile.id));
            }
        }

        Ok(Self {
            size,
            cells,
            next_id,
        })
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .max_value()
            .map_or(1, |value| value.to_string().len());
        for row in self.cells.chunks(self.size) {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(tile) => format!("{:>width$}", tile.value),
                    None => format!("{:>width$}", "."),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

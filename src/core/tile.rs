//! Tiles and their identity.
//!
//! Every tile on the grid has a `TileId` that survives slides and merges, so a
//! renderer can key its animation state on the id alone. When two tiles
//! merge, the tile that was first in travel order keeps its id and the other
//! id disappears.
//!
//! ```
//! use slide_2048::core::{Position, Tile, TileId};
//!
//! let tile = Tile::new(TileId::new(3), 8, Position::new(1, 2));
//! assert_eq!(tile.position.index(4), 6);
//! assert_eq!(format!("{}", tile.id), "Tile(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a tile within one grid lineage.
///
/// Ids are allocated by the grid that spawns the tile and are never reused
/// by that grid or any grid derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A cell coordinate. Row 0 is the top edge, column 0 the left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index of this position in a grid of side `size`.
    #[must_use]
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`Position::index`].
    #[must_use]
    pub const fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A numbered tile occupying one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Identity preserved across moves.
    pub id: TileId,

    /// Face value: a power of two, at least 2.
    pub value: u32,

    /// The cell this tile occupies. Always matches its slot in the grid.
    pub position: Position,
}

impl Tile {
    /// Create a new tile.
    #[must_use]
    pub const fn new(id: TileId, value: u32, position: Position) -> Self {
        Self { id, value, position }
    }

    /// The same tile moved to `position`.
    #[must_use]
    pub const fn at(self, position: Position) -> Self {
        Self { position, ..self }
    }
}

/// Largest value a tile can hold. Two tiles at this value never merge.
pub const MAX_TILE_VALUE: u32 = 1 << 31;

/// Check whether `value` may appear on a tile.
#[must_use]
pub const fn is_tile_value(value: u32) -> bool {
    value >= 2 && value.is_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_id() {
        let id = TileId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Tile(7)");
    }

    #[test]
    fn test_position_index_roundtrip() {
        for size in 4..=8 {
            for index in 0..size * size {
                assert_eq!(Position::from_index(index, size).index(size), index);
            }
        }
        assert_eq!(Position::new(2, 3).index(4), 11);
        assert_eq!(Position::from_index(11, 4), Position::new(2, 3));
    }

    #[test]
    fn test_tile_at_keeps_identity() {
        let tile = Tile::new(TileId::new(1), 16, Position::new(0, 3));
        let moved = tile.at(Position::new(0, 0));

        assert_eq!(moved.id, tile.id);
        assert_eq!(moved.value, 16);
        assert_eq!(moved.position, Position::new(0, 0));
    }

    #[test]
    fn test_is_tile_value() {
        assert!(is_tile_value(2));
        assert!(is_tile_value(4));
        assert!(is_tile_value(2048));
        assert!(!is_tile_value(0));
        assert!(!is_tile_value(1));
        assert!(!is_tile_value(3));
        assert!(!is_tile_value(6));
        assert!(is_tile_value(MAX_TILE_VALUE));
    }

    #[test]
    fn test_serialization() {
        let tile = Tile::new(TileId::new(9), 32, Position::new(3, 1));
        let json = serde_json::to_string(&tile).unwrap();
        let deserialized: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(tile, deserialized);
    }
}

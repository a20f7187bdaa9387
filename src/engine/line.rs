//! Line reducer: slide and merge one row or column.
//!
//! The reducer sees a line already arranged in travel order, so it only ever
//! slides towards offset 0. The caller supplies the mapping from offset back
//! to grid position (see [`Direction::cell`](crate::core::Direction::cell)).
//!
//! ## Rules
//!
//! 1. Gaps are dropped, order is kept
//! 2. Adjacent equal values merge into one tile of double value, scoring the
//!    merged value; a merged tile does not merge again in the same move
//! 3. Survivors are packed from offset 0 and the tail is left empty
//! 4. Merge survivors keep the id of the tile that was first in travel order
//! 5. Tiles at [`MAX_TILE_VALUE`] never merge

use smallvec::SmallVec;

use crate::core::{Position, Tile, MAX_TILE_VALUE};

/// Scratch buffer for one line. Grids are at most 8 wide.
pub type LineBuf = SmallVec<[Option<Tile>; 8]>;

/// Result of reducing one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineReduction {
    /// The reduced line in travel order, same length as the input.
    pub cells: LineBuf,

    /// Points scored by merges in this line.
    pub score: u64,

    /// True if any tile changed value or position.
    pub moved: bool,
}

/// Slide and merge `cells` towards offset 0.
///
/// `place` maps a travel-order offset to the grid position it denotes; every
/// tile in the output carries the position of its new offset.
///
/// ```
/// use slide_2048::core::{Position, Tile, TileId};
/// use slide_2048::engine::reduce_line;
///
/// let at = |col| Position::new(0, col);
/// let cells = [
///     Some(Tile::new(TileId(0), 2, at(0))),
///     Some(Tile::new(TileId(1), 2, at(1))),
///     None,
///     Some(Tile::new(TileId(2), 4, at(3))),
/// ];
///
/// let reduced = reduce_line(&cells, at);
/// let values: Vec<_> = reduced.cells.iter().map(|c| c.map_or(0, |t| t.value)).collect();
/// assert_eq!(values, vec![4, 4, 0, 0]);
/// assert_eq!(reduced.score, 4);
/// assert!(reduced.moved);
/// ```
pub fn reduce_line<F>(cells: &[Option<Tile>], place: F) -> LineReduction
where
    F: Fn(usize) -> Position,
{
    let mut out = LineBuf::new();
    let mut score = 0u64;
    // Last tile emitted that may still absorb its successor.
    let mut pending: Option<Tile> = None;

    for &tile in cells.iter().flatten() {
        match pending.take() {
            Some(head) if head.value == tile.value && head.value < MAX_TILE_VALUE => {
                let value = head.value * 2;
                score += u64::from(value);
                out.push(Some(Tile::new(head.id, value, place(out.len()))));
            }
            Some(head) => {
                out.push(Some(head.at(place(out.len()))));
                pending = Some(tile);
            }
            None => pending = Some(tile),
        }
    }
    if let Some(head) = pending {
        out.push(Some(head.at(place(out.len()))));
    }
    out.resize(cells.len(), None);

    let moved = out.iter().zip(cells).any(|(after, before)| after != before);

    LineReduction {
        cells: out,
        score,
        moved,
    }
}

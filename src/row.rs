use std::fmt;

/// A single cell value: 0 when empty, otherwise a positive power of two.
///
/// `u32` rather than `u16`: merging two 32768 tiles produces 65536 (2^16),
/// which must survive intact so the table encoder can emit it the same way
/// the reference table does.
pub type Tile = u32;

/// Number of cells in a row.
pub const ROW_LEN: usize = 4;

/// A direction to slide/merge tiles along a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward index 0.
    Left,
    /// Toward index 3.
    Right,
}

impl Direction {
    #[inline]
    fn step(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    /// Positions in processing order: nearest the target edge first, so each
    /// tile settles in one pass and settled tiles are never revisited.
    #[inline]
    fn traversal(self) -> [usize; ROW_LEN] {
        match self {
            Direction::Left => [0, 1, 2, 3],
            Direction::Right => [3, 2, 1, 0],
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

#[inline]
fn in_bounds(idx: isize) -> bool {
    (0..ROW_LEN as isize).contains(&idx)
}

/// Slide all tiles in `row` toward one end, merging equal adjacent tiles.
///
/// Pure and total: the input is taken by value and never observed mutated by
/// the caller; every well-formed row produces a result.
///
/// Merge rules match the classic game exactly:
/// - a destination cell absorbs at most one merge per call, so three or four
///   equal tiles never chain into a single tile in one move;
/// - the tile nearer the target edge settles first and wins the merge;
/// - a tile that can neither move nor merge stays put.
///
/// ```
/// use lut_2048::row::{slide, Direction};
///
/// assert_eq!(slide([2, 2, 0, 0], Direction::Left), [4, 0, 0, 0]);
/// assert_eq!(slide([4, 4, 2, 2], Direction::Right), [0, 0, 8, 4]);
/// ```
pub fn slide(row: [Tile; ROW_LEN], dir: Direction) -> [Tile; ROW_LEN] {
    let mut out = row;
    // One independently owned flag per cell, fresh every call.
    let mut merged = [false; ROW_LEN];
    let step = dir.step();

    for p in dir.traversal() {
        let tile = out[p];
        if tile == 0 {
            continue;
        }
        // Walk toward the target edge through empty cells. `dest` trails one
        // step behind the cursor: the farthest empty cell reached (p itself
        // if the tile cannot move at all).
        let mut dest = p as isize;
        let mut cursor = p as isize + step;
        while in_bounds(cursor) && out[cursor as usize] == 0 {
            dest = cursor;
            cursor += step;
        }
        let stop = cursor;
        if in_bounds(stop) && out[stop as usize] == tile && !merged[stop as usize] {
            merged[stop as usize] = true;
            out[stop as usize] = 2 * tile;
            out[p] = 0;
        } else {
            out[p] = 0;
            out[dest as usize] = tile;
        }
    }
    out
}

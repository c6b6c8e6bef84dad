//! The canonical "slide left" step and the coordinate mappings that let every
//! direction reuse it.

use crate::grid::Direction;

/// Length of a row or column.
pub const SIDE: usize = 4;

/// One row or column, read in the direction tiles travel.
pub type Line = [u32; SIDE];

/// Compacts `line` toward index 0 and merges equal neighbours.
///
/// Each tile merges at most once, scanning from the front, so `[2, 2, 2, 0]`
/// becomes `[4, 2, 0, 0]`. Tiles whose sum would overflow a `u32` never
/// merge. Returns the new line and the sum of the merged
/// values.
pub fn merge_left(line: Line) -> (Line, u64) {
    let mut tiles = line.iter().copied().filter(|&v| v != 0).peekable();
    let mut output = [0; SIDE];
    let mut gained = 0;
    let mut slot = 0;

    while let Some(value) = tiles.next() {
        // a pair whose sum does not fit in a tile stays apart
        let merged = value
            .checked_mul(2)
            .filter(|_| tiles.next_if_eq(&value).is_some());

        let value = match merged {
            Some(merged) => {
                gained += u64::from(merged);
                merged
            }
            None => value,
        };

        output[slot] = value;
        slot += 1;
    }

    (output, gained)
}

/// How canonical `(line, offset)` coordinates map onto the board.
///
/// Reading a line through an orientation and writing it back through the same
/// orientation restores board coordinates, so no separate inverse is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Rows, left to right.
    Identity,
    /// Rows, right to left.
    Reverse,
    /// Columns, top to bottom.
    Transpose,
    /// Columns, bottom to top.
    TransposeReverse,
}

impl Orientation {
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left => Orientation::Identity,
            Direction::Right => Orientation::Reverse,
            Direction::Up => Orientation::Transpose,
            Direction::Down => Orientation::TransposeReverse,
        }
    }

    /// Board `(x, y)` of the `offset`-th cell of canonical line `line`.
    pub fn cell(&self, line: usize, offset: usize) -> (usize, usize) {
        let last = SIDE - 1;

        match self {
            Orientation::Identity => (offset, line),
            Orientation::Reverse => (last - offset, line),
            Orientation::Transpose => (line, offset),
            Orientation::TransposeReverse => (line, last - offset),
        }
    }
}

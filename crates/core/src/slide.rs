//! Slide module - moves and merges tiles toward one edge
//!
//! Every row (Left/Right) or column (Up/Down) is processed independently as a
//! *line*: the list of flat cell indices ordered from the leading edge (the
//! edge tiles travel toward) to the trailing edge.
//!
//! Within a line, tiles close every gap ahead of them. A tile that reaches an
//! equal tile which has not merged yet this move combines with it into one
//! tile of double value at the forward position. Pairs are formed from the
//! leading edge first, so `[2, 2, 2, 2]` moving left becomes `[4, 4, 0, 0]`
//! and never `[8, 0, 0, 0]`.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{Direction, Tile, MAX_GRID_SIZE, MAX_TILE};

/// Flat indices of one line, leading edge first.
pub type Line = ArrayVec<usize, MAX_GRID_SIZE>;

/// What a single slide pass did to the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlideOutcome {
    /// Whether any tile changed cell or value.
    pub moved: bool,
    /// Number of merges performed.
    pub merges: u32,
}

impl SlideOutcome {
    fn absorb(&mut self, other: SlideOutcome) {
        self.moved |= other.moved;
        self.merges += other.merges;
    }
}

/// Indices of line `k` for a grid of side `size`, ordered toward `direction`.
///
/// For Left/Right, `k` is the row; for Up/Down, `k` is the column.
pub fn line_indices(size: usize, direction: Direction, k: usize) -> Line {
    let mut line = Line::new();
    for step in 0..size {
        let (row, col) = match direction {
            Direction::Left => (k, step),
            Direction::Right => (k, size - 1 - step),
            Direction::Up => (step, k),
            Direction::Down => (size - 1 - step, k),
        };
        line.push(row * size + col);
    }
    line
}

/// Slide and merge a single line in place.
pub fn slide_line(cells: &mut [Tile], line: &[usize]) -> SlideOutcome {
    let mut outcome = SlideOutcome::default();
    // Next free slot, counted from the leading edge.
    let mut write = 0usize;
    // Whether the tile at `write - 1` may still absorb an equal tile.
    let mut open = false;

    for read in 0..line.len() {
        let value = cells[line[read]];
        if value == 0 {
            continue;
        }
        cells[line[read]] = 0;

        // Tiles at MAX_TILE never merge.
        let merged = if open && cells[line[write - 1]] == value {
            value.checked_mul(2).filter(|&m| m <= MAX_TILE)
        } else {
            None
        };
        if let Some(merged) = merged {
            cells[line[write - 1]] = merged;
            open = false;
            outcome.moved = true;
            outcome.merges += 1;
        } else {
            cells[line[write]] = value;
            if write != read {
                outcome.moved = true;
            }
            write += 1;
            open = true;
        }
    }

    outcome
}

/// Slide every line of `grid` toward `direction`.
pub fn slide(grid: &mut Grid, direction: Direction) -> SlideOutcome {
    let size = grid.size();
    let cells = grid.cells_mut();
    let mut outcome = SlideOutcome::default();
    for k in 0..size {
        let line = line_indices(size, direction, k);
        outcome.absorb(slide_line(cells, &line));
    }
    outcome
}

//! Grid module - the square matrix of tile values
//!
//! The grid is an N x N matrix where each cell is either empty (`0`) or holds a
//! power-of-two tile. Uses a flat vector in row-major order; the side length is
//! validated once at construction and never changes afterwards.
//! Coordinates: (row, col) with row 0 at the top and col 0 at the left.

use std::fmt;

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::types::{
    is_valid_tile, Coord, Tile, DEFAULT_GRID_SIZE, MAX_CELLS, MAX_GRID_SIZE, MAX_TILE,
    MIN_GRID_SIZE,
};

/// Reasons a grid literal is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size {size} is outside {min}..={max}", min = MIN_GRID_SIZE, max = MAX_GRID_SIZE)]
    SizeOutOfRange { size: usize },

    #[error("grid is not square: row {row} has {len} cells but the grid has {rows} rows")]
    NotSquare { rows: usize, row: usize, len: usize },

    #[error("cell ({row}, {col}) holds {value}, which is not 0 or a power of two")]
    InvalidTile { row: usize, col: usize, value: Tile },

    #[error("cell ({row}, {col}) holds {value}, above the largest tile {max}", max = MAX_TILE)]
    TileTooLarge { row: usize, col: usize, value: Tile },
}

/// Blank cells of a grid, in row-major order. Stack-only.
pub type Blanks = ArrayVec<Coord, MAX_CELLS>;

/// The game grid - N x N tiles using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    /// Flat array of tiles, row-major order (row * size + col)
    cells: Vec<Tile>,
}

impl Grid {
    /// Create a new empty grid with the given side length
    pub fn new(size: usize) -> Result<Self, GridError> {
        check_size(size)?;
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Build a grid from literal rows.
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_rows(vec![vec![2u32, 0], vec![0, 4]]).unwrap();
    /// assert_eq!(grid.size(), 2);
    /// assert_eq!(grid.get(1, 1), Some(4));
    /// assert!(Grid::from_rows(vec![vec![2u32, 0], vec![0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[Tile]>>(rows: impl IntoIterator<Item = R>) -> Result<Self, GridError> {
        let rows: Vec<R> = rows.into_iter().collect();
        let size = rows.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(GridError::NotSquare {
                    rows: size,
                    row,
                    len: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(if value.is_power_of_two() {
                        GridError::TileTooLarge { row, col, value }
                    } else {
                        GridError::InvalidTile { row, col, value }
                    });
                }
                cells.push(value);
            }
        }

        Ok(Self { size, cells })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Positional equality with another grid.
    pub fn equals(&self, other: &Grid) -> bool {
        self == other
    }

    #[inline(always)]
    pub(crate) fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    #[inline(always)]
    pub(crate) fn coord_of(&self, idx: usize) -> Coord {
        Coord::new(idx / self.size, idx % self.size)
    }

    /// Get tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set tile at (row, col)
    /// Returns false if out of bounds
    pub(crate) fn set(&mut self, coord: Coord, value: Tile) -> bool {
        match self.index(coord.row, coord.col) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Tile] {
        &mut self.cells
    }

    /// All tiles in row-major order.
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// One row of the grid. Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[Tile] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells.chunks_exact(self.size)
    }

    /// Copy out the rows, for comparison against literals.
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// Empty cells in row-major order (top-to-bottom, left-to-right).
    pub fn blanks(&self) -> Blanks {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| self.coord_of(i))
            .collect()
    }

    /// First empty cell in row-major order.
    pub fn first_blank(&self) -> Option<Coord> {
        self.cells
            .iter()
            .position(|&v| v == 0)
            .map(|i| self.coord_of(i))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Number of non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    /// Largest tile on the grid (0 for an empty grid).
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            cells: vec![0; DEFAULT_GRID_SIZE * DEFAULT_GRID_SIZE],
        }
    }
}

impl<const N: usize> TryFrom<[[Tile; N]; N]> for Grid {
    type Error = GridError;

    fn try_from(rows: [[Tile; N]; N]) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

/// Space-separated values, one row per line.
///
/// Every value is followed by a space; there is no trailing newline.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            for value in row {
                write!(f, "{} ", value)?;
            }
            if i + 1 != self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

fn check_size(size: usize) -> Result<(), GridError> {
    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
        return Err(GridError::SizeOutOfRange { size });
    }
    Ok(())
}

//! Plain-text grid rendering for line mode.

use crate::core::Grid;

/// The grid as space-separated values, one row per line.
pub fn format_grid(grid: &Grid) -> String {
    grid.to_string()
}

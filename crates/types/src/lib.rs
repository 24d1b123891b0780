//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The board is square. Its side length is chosen when a game starts and never
//! changes afterwards:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_SIZE` | 4 | Classic 4x4 board |
//! | `MIN_GRID_SIZE` | 2 | Smallest playable board |
//! | `MAX_GRID_SIZE` | 16 | Largest supported board |
//! | `SPAWN_VALUE` | 2 | Value of every newly spawned tile |
//! | `MAX_TILE` | 2^30 | Largest tile a grid may hold |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Coord, Direction, DEFAULT_GRID_SIZE};
//!
//! // Parse from string (case-insensitive)
//! let parsed = Direction::from_str("Left").unwrap();
//! assert_eq!(parsed, Direction::Left);
//!
//! let c = Coord::new(1, 3);
//! assert_eq!((c.row, c.col), (1, 3));
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! ```

/// Side length of the classic board.
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Smallest accepted board side length.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest accepted board side length.
pub const MAX_GRID_SIZE: usize = 16;

/// Upper bound on the number of cells of any board.
pub const MAX_CELLS: usize = MAX_GRID_SIZE * MAX_GRID_SIZE;

/// Value placed in a blank cell after every successful move.
pub const SPAWN_VALUE: Tile = 2;

/// A cell value: `0` is empty, anything else is a power-of-two tile.
pub type Tile = u32;

/// Largest tile a grid may hold. Two of these never merge, so every tile
/// stays representable.
pub const MAX_TILE: Tile = 1 << 30;

/// Returns true if `value` may appear in a grid cell.
///
/// ```
/// use tui_2048_types::is_valid_tile;
///
/// assert!(is_valid_tile(0));
/// assert!(is_valid_tile(2048));
/// assert!(!is_valid_tile(3));
/// assert!(!is_valid_tile(1 << 31));
/// ```
pub fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value.is_power_of_two() && value <= MAX_TILE)
}

/// The four directions a move can push tiles toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("DOWN"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell position: `row` counts from the top, `col` from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

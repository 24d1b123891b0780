//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules: the grid, the slide/merge algorithm and
//! the engine that drives a game. It has **zero dependencies** on terminal I/O,
//! making it:
//!
//! - **Deterministic**: Same grid + same seed produces identical games
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`grid`]: N x N tile matrix with positional equality and blank lookup
//! - [`slide`]: Per-line slide and merge toward one edge
//! - [`engine`]: Game state machine owning a grid and a random source
//!
//! # Game Rules
//!
//! - **Slide**: Every tile moves toward the chosen edge until blocked
//! - **Merge**: Two equal tiles meeting during a slide become one tile of
//!   double value; each tile merges at most once per move, leading edge first
//! - **Spawn**: After every move a `2` appears in a blank cell
//! - **Lost**: If no blank cell remains after the slide, the game is over
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Engine, EngineError, Grid};
//! use tui_2048_core::types::Direction;
//!
//! let start = Grid::from_rows([[0u32, 0, 0, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
//! let mut engine = Engine::with_seed(start, 42);
//!
//! match engine.next(Direction::Left) {
//!     Ok(spawned) => assert_eq!(engine.grid().get(spawned.row, spawned.col), Some(2)),
//!     Err(EngineError::Lost) => unreachable!("board has room"),
//! }
//! assert_eq!(engine.grid().get(0, 0), Some(2));
//! ```

pub mod engine;
pub mod grid;
pub mod slide;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use engine::{Engine, EngineError, MoveReport, SpawnPolicy};
pub use grid::{Blanks, Grid, GridError};
pub use slide::{slide, SlideOutcome};

//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::Direction`] for the full-screen mode, and parses
//! raw stdin lines (arrow escape sequences followed by Enter, or plain words)
//! for the line-based mode.

pub mod line;
pub mod map;

pub use tui_2048_types as types;

pub use line::{parse_line, LineInput};
pub use map::{handle_key_event, should_quit};

//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into a
//! simple framebuffer that is then flushed to a terminal backend, rather than
//! printing directly.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so the layout can be asserted in tests
//! - Offer a plain-text rendering for terminals without raw mode

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod text;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameStatus, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use text::format_grid;

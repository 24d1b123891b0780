//! TUI 2048 (workspace facade crate).
//!
//! This package exposes the `tui_2048::{core,input,term,types}` public API while
//! the implementation lives in dedicated crates under `crates/`. The
//! application-level pieces (configuration, logging, the line-based loop) live
//! here because only the binary needs them.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub mod config;
pub mod logging;
pub mod plain;

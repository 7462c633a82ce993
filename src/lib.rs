//! TUI falling-block game (workspace facade crate).
//!
//! Re-exports the workspace crates under stable paths
//! (`tui_blocks::{core, driver, input, term, types}`) and adds the pieces that
//! tie them together for the terminal binary: command-line [`config`] and the
//! crossterm [`frontend`].

pub mod config;
pub mod frontend;

pub use tui_blocks_core as core;
pub use tui_blocks_driver as driver;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;

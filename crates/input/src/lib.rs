//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and detects
//! quit keys. It knows nothing about rendering or the engine itself.

pub mod map;

pub use tui_blocks_types as types;

pub use map::{handle_key_event, should_quit};

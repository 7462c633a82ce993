//! Terminal rendering for the falling-block game.
//!
//! A small game-oriented layer: [`GameView`] turns an engine snapshot into a
//! framebuffer (pure, testable), and [`TerminalRenderer`] flushes framebuffers
//! to the terminal through `crossterm`.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};

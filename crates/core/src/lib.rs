//! Core rules engine - pure, deterministic, and testable
//!
//! This crate contains every game rule: spawning, movement, rotation with
//! wall kicks, collision detection, row burning and game-over detection.
//! It has **zero dependencies** on UI, timers, or I/O; an external driver calls
//! [`GameEngine::tick`] on a fixed interval and [`GameEngine::handle_input`] on
//! key actions, then reads the state back to draw it.
//!
//! # Module Structure
//!
//! - [`grid`]: 2-D boolean occupancy map shared by the field and piece layouts
//! - [`catalog`]: immutable shapes with precomputed rotations, plus the text loader
//! - [`piece`]: the active piece with move/drop/rotate and wall kicks
//! - [`field`]: play grid with row burning and spawn placement
//! - [`rng`]: deterministic uniform shape selection
//! - [`engine`]: the controller tying everything together
//! - [`snapshot`]: render view read by frontends
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{EngineConfig, GameEngine, PieceCatalog};
//! use tui_blocks_types::GameAction;
//!
//! let catalog = PieceCatalog::standard().unwrap();
//! let mut engine = GameEngine::new(catalog, EngineConfig::default());
//!
//! engine.handle_input(GameAction::MoveRight);
//! engine.handle_input(GameAction::Rotate);
//! engine.handle_input(GameAction::Drop);
//!
//! let event = engine.take_last_event().unwrap();
//! assert_eq!(event.rows_burned, 0);
//! assert!(engine.is_running());
//! ```

pub mod catalog;
pub mod engine;
pub mod field;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use catalog::{CatalogError, PieceCatalog, Shape, STANDARD_SHAPES};
pub use engine::{EngineConfig, EngineState, GameEngine, LandingEvent};
pub use field::Field;
pub use grid::Grid;
pub use piece::{kick_offsets, Piece};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;

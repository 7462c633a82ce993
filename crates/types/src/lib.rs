//! Shared types - pure data structures and constants
//!
//! Everything here is plain data with no dependencies, so it can be used by the
//! rules engine, the terminal frontend, and the driver alike.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Timing
//!
//! The core owns no timers. [`TICK_MS`] is only the default interval an external
//! driver uses when it schedules gravity ticks.
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{GameAction, Rotation, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! assert_eq!(Rotation::North.rotate_ccw().index(), 3);
//!
//! assert_eq!(FIELD_WIDTH, 10);
//! assert_eq!(FIELD_HEIGHT, 20);
//! ```

/// Default field width in cells
pub const FIELD_WIDTH: usize = 10;

/// Default field height in cells
pub const FIELD_HEIGHT: usize = 20;

/// Default gravity tick interval (1000ms = one row per second)
pub const TICK_MS: u64 = 1000;

/// Discrete input actions accepted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveDown,
    /// Hard drop followed by an immediate landing
    Drop,
    /// Clockwise rotation with wall kicks
    Rotate,
}

impl GameAction {
    /// Every action, in declaration order
    pub const ALL: [GameAction; 5] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::MoveDown,
        GameAction::Drop,
        GameAction::Rotate,
    ];

    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(GameAction::MoveLeft),
            "moveright" | "right" => Some(GameAction::MoveRight),
            "movedown" | "down" => Some(GameAction::MoveDown),
            "drop" | "land" => Some(GameAction::Drop),
            "rotate" => Some(GameAction::Rotate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Drop => "drop",
            GameAction::Rotate => "rotate",
        }
    }

    /// Unit translation for the movement actions
    pub fn move_vector(&self) -> Option<(i32, i32)> {
        match self {
            GameAction::MoveLeft => Some((-1, 0)),
            GameAction::MoveRight => Some((1, 0)),
            GameAction::MoveDown => Some((0, 1)),
            GameAction::Drop | GameAction::Rotate => None,
        }
    }
}

/// Rotation states, clockwise from the spawn orientation.
///
/// The index space is `{0, 1, 2, 3}` and is cyclic in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise: `(i + 1) mod 4`
    pub fn rotate_cw(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise: `(i + 3) mod 4`
    pub fn rotate_ccw(&self) -> Self {
        Self::from_index(self.index() + 3)
    }

    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build from an index, wrapping modulo 4
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

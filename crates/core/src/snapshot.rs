//! Snapshot module - read-only render view of the engine
//!
//! Frontends draw from a [`GameSnapshot`] instead of borrowing the engine,
//! so the snapshot can be reused across frames via
//! [`GameEngine::snapshot_into`](crate::engine::GameEngine::snapshot_into).

use crate::grid::Grid;
use crate::types::Rotation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Landed blocks with the active piece drawn on top
    pub field: Grid,
    /// Current layout of the next piece
    pub next: Grid,
    pub active_position: (i32, i32),
    pub active_rotation: Rotation,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn new(field_width: usize, field_height: usize) -> Self {
        Self {
            field: Grid::new(field_width, field_height),
            next: Grid::new(1, 1),
            active_position: (0, 0),
            active_rotation: Rotation::North,
            game_over: false,
        }
    }

    /// Occupied field cells, ready to hand to a renderer
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.field.iter_occupied()
    }
}

//! Field module - the play grid of landed blocks
//!
//! The field is a fixed-size [`Grid`] (10x20 by default). Coordinates: (x, y) where
//! x grows left to right and y grows top to bottom; new pieces spawn at the top edge.

use crate::grid::Grid;
use crate::types::{FIELD_HEIGHT, FIELD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    grid: Grid,
}

impl Field {
    /// Create an empty field. Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.grid.in_bounds(x, y)
    }

    /// Occupancy of an in-bounds cell
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y)
    }

    /// Mark an in-bounds cell as a landed block
    pub fn set(&mut self, x: i32, y: i32) {
        self.grid.set(x, y);
    }

    /// Merge a layout into the field at the given top-left offset.
    pub fn merge(&mut self, layout: &Grid, x: i32, y: i32) {
        self.grid.overlay(layout, x, y);
    }

    /// True if any corner of the `width`x`height` box at `(x, y)` leaves the field
    pub fn box_outside(&self, x: i32, y: i32, width: usize, height: usize) -> bool {
        !self.in_bounds(x, y) || !self.in_bounds(x + width as i32 - 1, y + height as i32 - 1)
    }

    /// Spawn offset for a piece of the given width: horizontally centred
    /// (floor division on both halves), on the top row.
    pub fn default_respawn_pos(&self, piece_width: usize) -> (i32, i32) {
        ((self.width() / 2) as i32 - (piece_width / 2) as i32, 0)
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.grid.is_row_full(y)
    }

    /// Burn every full row, scanning bottom to top.
    ///
    /// After a burn the same row index is checked again, since the row that slid
    /// into it may be full too. Returns the number of rows burned.
    pub fn update_rows(&mut self) -> usize {
        let mut burned = 0;
        for y in (0..self.height()).rev() {
            while self.grid.is_row_full(y) {
                self.grid.remove_row(y);
                burned += 1;
            }
        }
        burned
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

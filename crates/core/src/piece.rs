//! Piece module - the active falling piece
//!
//! A piece references a shared [`Shape`], tracks its rotation state and the
//! top-left offset of the current rotation's layout within the field.
//! Every mutating operation checks for collisions first and leaves the piece
//! untouched when the move is illegal.

use std::sync::Arc;

use crate::catalog::Shape;
use crate::field::Field;
use crate::grid::Grid;
use crate::types::Rotation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    shape: Arc<Shape>,
    rotation: Rotation,
    x: i32,
    y: i32,
}

impl Piece {
    /// New piece in its spawn rotation at the field origin
    pub fn new(shape: Arc<Shape>) -> Self {
        Self {
            shape,
            rotation: Rotation::North,
            x: 0,
            y: 0,
        }
    }

    pub fn shape(&self) -> &Arc<Shape> {
        &self.shape
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn set_position(&mut self, (x, y): (i32, i32)) {
        self.x = x;
        self.y = y;
    }

    /// Layout of the current rotation, in the piece's local frame
    pub fn layout(&self) -> &Grid {
        self.shape.rotation(self.rotation)
    }

    pub fn width(&self) -> usize {
        self.layout().width()
    }

    pub fn height(&self) -> usize {
        self.layout().height()
    }

    /// Occupied cells in field coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (px, py) = (self.x, self.y);
        self.layout()
            .iter_occupied()
            .map(move |(x, y)| (px + x, py + y))
    }

    /// Would the piece, shifted by the offset, leave the field or overlap a landed block?
    pub fn collides(&self, field: &Field, offset_x: i32, offset_y: i32) -> bool {
        let (x, y) = (self.x + offset_x, self.y + offset_y);

        // Reject a bounding box outside the field before scanning cells.
        if field.box_outside(x, y, self.width(), self.height()) {
            return true;
        }

        self.layout()
            .iter_occupied()
            .any(|(cx, cy)| field.is_occupied(x + cx, y + cy))
    }

    /// Translate by `(dx, dy)` if the target position is free.
    pub fn try_move(&mut self, field: &Field, dx: i32, dy: i32) -> bool {
        if self.collides(field, dx, dy) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Hard drop: move down until blocked. Always succeeds.
    pub fn try_drop(&mut self, field: &Field) -> bool {
        while self.try_move(field, 0, 1) {}
        true
    }

    /// Rotate clockwise, nudging the piece with the first legal wall kick.
    ///
    /// When every kick collides the previous rotation is restored and the
    /// position is left as it was.
    pub fn try_rotate(&mut self, field: &Field) -> bool {
        let kicks = kick_offsets(self.width(), self.height());
        let previous = self.rotation;
        self.rotation = previous.rotate_cw();

        for (dx, dy) in kicks {
            if !self.collides(field, dx, dy) {
                self.x += dx;
                self.y += dy;
                return true;
            }
        }

        self.rotation = previous;
        false
    }
}

/// Wall kicks tried after a rotation, in order, computed from the
/// pre-rotation bounding box.
///
/// `delta = (width / 2 - 1) - (height / 2 - 1)` recentres the rotated box over the
/// old one; the remaining kicks step one cell right and/or down from there.
pub fn kick_offsets(width: usize, height: usize) -> [(i32, i32); 4] {
    let delta = (width / 2) as i32 - 1 - ((height / 2) as i32 - 1);
    [
        (delta, -delta),
        (delta + 1, -delta),
        (delta + 1, -delta + 1),
        (delta, -delta + 1),
    ]
}

//! Grid module - 2-D boolean occupancy map
//!
//! Used both for the play field and for a piece's cells in its local frame.
//! Storage is a flat row-major `Vec<bool>` (`y * width + x`).
//! Coordinates are signed so callers can ask about positions left of or above
//! the grid; only in-bounds positions may be read or written.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Build from rows of occupancy flags.
    ///
    /// Returns `None` if there are no rows, a row is empty, or rows differ in length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Option<Self> {
        let width = rows.first()?.as_ref().len();
        if width == 0 || rows.iter().any(|row| row.as_ref().len() != width) {
            return None;
        }
        let cells = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Some(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            self.in_bounds(x, y),
            "grid access ({}, {}) outside {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize) * self.width + (x as usize)
    }

    /// Occupancy at `(x, y)`. Panics when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Mark `(x, y)` occupied. Panics when out of bounds.
    pub fn set(&mut self, x: i32, y: i32) {
        let idx = self.index(x, y);
        self.cells[idx] = true;
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Lazily visit every occupied cell in row-major order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &occupied)| occupied)
            .map(move |(i, _)| ((i % width) as i32, (i / width) as i32))
    }

    /// Copy every occupied cell of `source`, shifted by the offset, into this grid.
    ///
    /// Cells that land outside this grid are clipped.
    pub fn overlay(&mut self, source: &Grid, offset_x: i32, offset_y: i32) {
        for (x, y) in source.iter_occupied() {
            let (tx, ty) = (x + offset_x, y + offset_y);
            if self.in_bounds(tx, ty) {
                self.set(tx, ty);
            }
        }
    }

    /// 90° clockwise rotation: width and height swap, new row `i` is old column `i`
    /// read from the bottom up.
    pub fn rotated_cw(&self) -> Grid {
        let mut out = Grid::new(self.height, self.width);
        for (x, y) in self.iter_occupied() {
            out.set(self.height as i32 - 1 - y, x);
        }
        out
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width].iter().all(|&c| c)
    }

    /// Remove row `y`, shifting every row above it down by one and clearing the top row.
    pub fn remove_row(&mut self, y: usize) {
        assert!(y < self.height, "row {} outside height {}", y, self.height);
        let width = self.width;

        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(false);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for &c in row {
                write!(f, "{}", if c { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

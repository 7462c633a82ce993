//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Grid};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BG: Rgb = Rgb::new(30, 30, 40);
const BLOCK: CellStyle = CellStyle::new(Rgb::new(80, 200, 220), BG);
const EMPTY: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), BG);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const PREVIEW: CellStyle = CellStyle::new(Rgb::new(240, 220, 80), Rgb::new(0, 0, 0));

/// Gap between the field frame and the side panel
const PANEL_GAP: u16 = 2;

pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let field_w = snap.field.width() as u16 * self.cell_w;
        let field_h = snap.field.height() as u16 * self.cell_h;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, start_x, start_y, frame_w, frame_h);
        self.draw_grid(fb, &snap.field, start_x + 1, start_y + 1, Some(EMPTY), BLOCK);

        let panel_x = start_x + frame_w + PANEL_GAP;
        if panel_x < viewport.width {
            fb.put_str(panel_x, start_y, "NEXT", LABEL);
            self.draw_grid(fb, &snap.next, panel_x, start_y + 2, None, PREVIEW);
        }

        if snap.game_over {
            let text = "GAME OVER";
            let x = start_x + frame_w.saturating_sub(text.len() as u16) / 2;
            fb.put_str(x, start_y + frame_h / 2, text, LABEL);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_grid(
        &self,
        fb: &mut FrameBuffer,
        grid: &Grid,
        origin_x: u16,
        origin_y: u16,
        empty: Option<CellStyle>,
        filled: CellStyle,
    ) {
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let (ch, style) = if grid.get(x as i32, y as i32) {
                    ('█', filled)
                } else if let Some(style) = empty {
                    ('·', style)
                } else {
                    continue;
                };
                let px = origin_x + x as u16 * self.cell_w;
                let py = origin_y + y as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(x + w - 1, y, '┐', BORDER);
    fb.put_char(x, y + h - 1, '└', BORDER);
    fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', BORDER);
        fb.put_char(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', BORDER);
        fb.put_char(x + w - 1, y + dy, '│', BORDER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_is_dotted() {
        let snap = GameSnapshot::new(3, 2);
        let fb = GameView::default().render(&snap, Viewport::new(8, 4));
        assert_eq!(fb.row_text(0), "┌──────┐");
        assert_eq!(fb.row_text(1), "│······│");
        assert_eq!(fb.row_text(3), "└──────┘");
    }

    #[test]
    fn small_viewport_does_not_panic() {
        let snap = GameSnapshot::new(10, 20);
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}

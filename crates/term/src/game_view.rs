//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

const SCORE_LABEL: &str = "Score: ";
const HIGHSCORE_LABEL: &str = "High Score: ";
const GAME_OVER_TEXT: &str = "GAME OVER";
const RESTART_TEXT: &str = "Press R to Restart";

const WELL_BG: Rgb = Rgb::BLACK;

/// Draws the well: one block per board cell, `cell_w` x `cell_h` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up a typical terminal glyph.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the well including its border, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default());

        let (frame_w, frame_h) = self.frame_size();
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        };

        self.draw_border(fb, origin, frame_w, frame_h);

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                match PieceKind::from_code(snap.board[y as usize][x as usize]) {
                    Some(kind) => self.draw_block(fb, origin, x, y, kind),
                    None => self.draw_empty(fb, origin, x, y),
                }
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                // Rows above the top are legal but not visible.
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_block(fb, origin, x as u8, y as u8, active.kind);
                }
            }
        }

        self.draw_scores(fb, origin, snap);

        if snap.game_over {
            let mid_y = origin.y.saturating_add(frame_h / 2);
            self.draw_centered(fb, origin, frame_w, mid_y.saturating_sub(1), GAME_OVER_TEXT);
            self.draw_centered(fb, origin, frame_w, mid_y, RESTART_TEXT);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, o: Origin, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);

        fb.put_char(o.x, o.y, '┌', style);
        fb.put_char(o.x + w - 1, o.y, '┐', style);
        fb.put_char(o.x, o.y + h - 1, '└', style);
        fb.put_char(o.x + w - 1, o.y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(o.x + dx, o.y, '─', style);
            fb.put_char(o.x + dx, o.y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(o.x, o.y + dy, '│', style);
            fb.put_char(o.x + w - 1, o.y + dy, '│', style);
        }
    }

    /// Grid outline for an empty cell.
    fn draw_empty(&self, fb: &mut FrameBuffer, o: Origin, x: u8, y: u8) {
        let (px, py) = self.cell_origin(o, x, y);
        let style = CellStyle::new(Rgb::GRAY, WELL_BG);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, o: Origin, x: u8, y: u8, kind: PieceKind) {
        let (px, py) = self.cell_origin(o, x, y);
        let style = CellStyle::new(Rgb::from(kind.color()), WELL_BG);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn cell_origin(&self, o: Origin, x: u8, y: u8) -> (u16, u16) {
        (
            o.x + 1 + x as u16 * self.cell_w,
            o.y + 1 + y as u16 * self.cell_h,
        )
    }

    /// "Score" and "High Score" overlay the top of the well.
    fn draw_scores(&self, fb: &mut FrameBuffer, o: Origin, snap: &GameSnapshot) {
        let style = CellStyle::new(Rgb::WHITE, WELL_BG).bold();
        let inner_w = BOARD_WIDTH as u16 * self.cell_w;
        let left = o.x + 1;
        let right = left + inner_w;

        for (row, label, value) in [
            (0, SCORE_LABEL, snap.score),
            (1, HIGHSCORE_LABEL, snap.highscore),
        ] {
            let y = o.y + 1 + row;
            let x = fb.put_str(left, y, label, inner_w, style);
            fb.put_u32(x, y, value, right.saturating_sub(x), style);
        }
    }

    fn draw_centered(&self, fb: &mut FrameBuffer, o: Origin, frame_w: u16, y: u16, text: &str) {
        let style = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
        let text_w = text.chars().count() as u16;
        let x = o.x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, text_w, style);
    }
}

/// Top-left corner of the well's border.
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{color, GameSnapshot, PieceColor};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Terminal color for a piece kind, from the shape catalog's color.
pub fn piece_rgb(kind: PieceKind) -> Rgb {
    match color(kind) {
        PieceColor::Cyan => Rgb::new(0, 255, 255),
        PieceColor::Yellow => Rgb::new(255, 255, 0),
        PieceColor::Purple => Rgb::new(128, 0, 128),
        PieceColor::Green => Rgb::new(0, 128, 0),
        PieceColor::Red => Rgb::new(255, 0, 0),
        PieceColor::Blue => Rgb::new(0, 0, 255),
        PieceColor::Orange => Rgb::new(255, 165, 0),
    }
}

/// Screen placement of the playfield frame (border included).
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Draws the playfield, the score panel and the game-over banner.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    /// Render a snapshot into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame = self.frame(viewport);
        let empty = CellStyle::new(Rgb::new(70, 70, 80), PLAYFIELD_BG);

        self.draw_border(fb, frame, CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG));

        // Locked cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                match PieceKind::from_code(code) {
                    Some(kind) => self.draw_block(fb, frame, x as u16, y as u16, kind),
                    None => self.fill_cell(fb, frame, x as u16, y as u16, '·', empty),
                }
            }
        }

        // Active piece; cells still in the hidden rows are not drawn.
        if let Some(active) = snap.active {
            for (row, col) in active.cells() {
                if (0..BOARD_HEIGHT as i8).contains(&row) && (0..BOARD_WIDTH as i8).contains(&col) {
                    self.draw_block(fb, frame, col as u16, row as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_game_over(fb, frame, snap.high_score);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame, style: CellStyle) {
        let right = f.x + f.w - 1;
        let bottom = f.y + f.h - 1;

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, f: Frame, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle::new(piece_rgb(kind), PLAYFIELD_BG).bold();
        self.fill_cell(fb, f, x, y, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, f: Frame, x: u16, y: u16, ch: char, style: CellStyle) {
        let px = f.x + 1 + x * self.cell_w;
        let py = f.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if viewport.width.saturating_sub(panel_x) < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.put_str(panel_x, f.y, "SCORE", label);
        fb.put_u32(panel_x, f.y + 1, snap.score, value);
        fb.put_str(panel_x, f.y + 3, "HIGH SCORE", label);
        fb.put_u32(panel_x, f.y + 4, snap.high_score, value);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, f: Frame, high_score: u32) {
        let mid = f.y + f.h / 2;
        let band = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

        fb.fill_rect(f.x + 1, mid - 1, f.w - 2, 3, ' ', band);

        let title = "GAME OVER!";
        fb.put_str(centered(f, title.len() as u16), mid, title, band);

        let label = "High Score: ";
        let text_w = label.len() as u16 + digit_count(high_score);
        let x = centered(f, text_w);
        fb.put_str(x, mid + 1, label, band);
        fb.put_u32(x + label.len() as u16, mid + 1, high_score, band);
    }
}

fn centered(f: Frame, text_w: u16) -> u16 {
    f.x + f.w.saturating_sub(text_w) / 2
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

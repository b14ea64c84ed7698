//! Maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure layout code, no I/O, unit-testable. Board cells render as 2x1
//! terminal cells to roughly square them up against typical glyph aspect
//! ratios.

use crate::core::pieces;
use crate::core::snapshot::GameSnapshot;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

const CELL_W: u16 = 2;

const WELL_BG: Rgb = Rgb::new(28, 28, 36);

pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Draw one frame into `fb`. The playfield is centered; the side panel
    /// goes to its right when the viewport is wide enough.
    pub fn render(&self, snap: &GameSnapshot, fb: &mut FrameBuffer) {
        fb.clear();

        let well_w = (BOARD_WIDTH as u16) * CELL_W;
        let well_h = BOARD_HEIGHT as u16;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;

        let origin_x = fb.width().saturating_sub(frame_w + 14) / 2;
        let origin_y = fb.height().saturating_sub(frame_h) / 2;

        self.draw_frame(fb, origin_x, origin_y, frame_w, frame_h);

        // Empty well with grid dots.
        let dots = CellStyle {
            fg: Rgb::new(70, 70, 85),
            bg: WELL_BG,
            bold: false,
            dim: true,
        };
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                self.draw_cell(fb, origin_x, origin_y, x, y, '·', dots);
            }
        }

        // Locked cells.
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                if let Some(kind) = snap.board[y as usize][x as usize] {
                    self.draw_cell(
                        fb,
                        origin_x,
                        origin_y,
                        x as u16,
                        y as u16,
                        '█',
                        block_style(kind),
                    );
                }
            }
        }

        if let Some(active) = snap.active {
            // Ghost first so the active piece draws over it when they
            // overlap near the floor.
            let ghost = CellStyle {
                fg: Rgb::new(130, 130, 140),
                bg: WELL_BG,
                bold: false,
                dim: true,
            };
            self.draw_piece(fb, origin_x, origin_y, active.kind, active.rotation, active.x, snap.ghost_y, '░', ghost);
            self.draw_piece(
                fb,
                origin_x,
                origin_y,
                active.kind,
                active.rotation,
                active.x,
                active.y,
                '█',
                block_style(active.kind),
            );
        }

        self.draw_panel(fb, snap, origin_x + frame_w + 2, origin_y);

        if snap.game_over {
            self.draw_overlay(fb, origin_x, origin_y, frame_w, frame_h, "GAME OVER");
        }
    }

    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        kind: PieceKind,
        rotation: Rotation,
        px: i8,
        py: i8,
        ch: char,
        style: CellStyle,
    ) {
        let size = pieces::grid_size(kind);
        for i in 0..size {
            for j in 0..size {
                if !pieces::occupied(kind, rotation, j, i) {
                    continue;
                }
                let x = px + j;
                let y = py + i;
                if (0..BOARD_WIDTH).contains(&x) && (0..BOARD_HEIGHT).contains(&y) {
                    self.draw_cell(fb, origin_x, origin_y, x as u16, y as u16, ch, style);
                }
            }
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        fb.fill_rect(origin_x + 1 + x * CELL_W, origin_y + 1 + y, CELL_W, 1, ch, style);
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::default();
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        if x + 12 > fb.width() {
            return;
        }
        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y + 1, &snap.score.to_string(), value);

        fb.put_str(x, y + 3, "LINES", label);
        fb.put_str(x, y + 4, &snap.lines.to_string(), value);

        let hold_label = if snap.can_hold {
            label
        } else {
            CellStyle::default().dim()
        };
        fb.put_str(x, y + 6, "HOLD", hold_label);
        self.draw_preview(fb, snap.hold, x, y + 7);

        fb.put_str(x, y + 12, "NEXT", label);
        self.draw_preview(fb, Some(snap.next), x, y + 13);
    }

    /// 4x4 mini preview of a kind in its spawn orientation.
    fn draw_preview(&self, fb: &mut FrameBuffer, kind: Option<PieceKind>, x: u16, y: u16) {
        let Some(kind) = kind else {
            fb.put_str(x, y, "-", CellStyle::default().dim());
            return;
        };
        let style = block_style(kind);
        for i in 0..4i8 {
            for j in 0..4i8 {
                if pieces::occupied(kind, Rotation::North, j, i) {
                    fb.fill_rect(x + (j as u16) * CELL_W, y + i as u16, CELL_W, 1, '█', style);
                }
            }
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(90, 20, 20),
            bold: true,
            dim: false,
        };
        let tw = text.chars().count() as u16;
        let tx = x + (w.saturating_sub(tw)) / 2;
        let ty = y + h / 2;
        fb.put_str(tx, ty, text, style);
        fb.put_str(
            x + (w.saturating_sub(16)) / 2,
            ty + 1,
            "press r to retry",
            CellStyle::default().dim(),
        );
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self::new()
    }
}

fn block_style(kind: PieceKind) -> CellStyle {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    CellStyle {
        fg,
        bg: WELL_BG,
        bold: true,
        dim: false,
    }
}

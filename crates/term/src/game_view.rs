//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceSnapshot, Screen};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL_COLOR};

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

const BLOCK: char = '█';
const WHITE: Rgb = Rgb::new(255, 255, 255);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Blocks stacked along the bottom of the title screen: (column, rows up
/// from the bottom, kind).
const TITLE_BLOCKS: [(u16, u16, PieceKind); 24] = [
    (0, 0, PieceKind::J),
    (0, 1, PieceKind::J),
    (1, 0, PieceKind::J),
    (2, 0, PieceKind::J),
    (2, 1, PieceKind::Z),
    (3, 1, PieceKind::Z),
    (3, 0, PieceKind::Z),
    (4, 0, PieceKind::Z),
    (0, 3, PieceKind::S),
    (0, 2, PieceKind::S),
    (1, 2, PieceKind::S),
    (1, 1, PieceKind::S),
    (5, 0, PieceKind::I),
    (6, 0, PieceKind::I),
    (7, 0, PieceKind::I),
    (8, 0, PieceKind::I),
    (6, 1, PieceKind::O),
    (6, 2, PieceKind::O),
    (7, 1, PieceKind::O),
    (7, 2, PieceKind::O),
    (8, 1, PieceKind::L),
    (8, 2, PieceKind::L),
    (8, 3, PieceKind::L),
    (7, 3, PieceKind::L),
];

/// Board frame position within the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(WHITE, SCREEN_BG).into_cell(' '));

        match snap.screen {
            Screen::TitleScreen => self.draw_title(fb, viewport),
            Screen::InGame => {
                let frame = self.draw_playfield(fb, snap, viewport);
                if snap.paused {
                    self.draw_overlay_text(fb, frame, &["PAUSED", "ESC to resume"]);
                }
            }
            Screen::GameOver => {
                let frame = self.draw_playfield(fb, snap, viewport);
                self.draw_overlay_text(fb, frame, &["GAME OVER", "ENTER for title"]);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_title(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let title = CellStyle::new(Rgb::new(0, 255, 255), SCREEN_BG).bold();
        let hint = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mid_y = viewport.height / 3;
        put_centered(fb, viewport.width, mid_y, "N E O N   T E T R I S", title);
        put_centered(fb, viewport.width, mid_y.saturating_add(2), "Press ENTER to play", hint);
        put_centered(
            fb,
            viewport.width,
            mid_y.saturating_add(3),
            "arrows/WASD move  UP rotate  ESC pause  Q quit",
            CellStyle { dim: true, ..hint },
        );

        let art_w = 9 * self.cell_w;
        let origin_x = viewport.width.saturating_sub(art_w) / 2;
        let bottom = viewport.height.saturating_sub(1);
        for &(col, up, kind) in TITLE_BLOCKS.iter() {
            let Some(y) = bottom
                .checked_sub(up * self.cell_h)
                .and_then(|y| (y + 1).checked_sub(self.cell_h))
            else {
                continue;
            };
            let style = CellStyle::new(crate::core::color_of(kind), SCREEN_BG);
            fb.fill_rect(
                origin_x + col * self.cell_w,
                y,
                self.cell_w,
                self.cell_h,
                BLOCK,
                style,
            );
        }
    }

    fn draw_playfield(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) -> Frame {
        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame = Frame {
            x: viewport.width.saturating_sub(board_px_w + 2) / 2,
            y: viewport.height.saturating_sub(board_px_h + 2) / 2,
            w: board_px_w + 2,
            h: board_px_h + 2,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        self.draw_border(fb, frame, border);

        // Locked cells, with flashing rows blended towards white or the
        // empty color depending on the interval.
        for (y, row) in snap.board.iter().enumerate() {
            let flash = snap.flash.filter(|flash| flash.contains(y));
            for (x, cell) in row.iter().enumerate() {
                let color = match flash {
                    Some(flash) if cell.filled && flash.lit => cell.color.lerp(WHITE, 0.6),
                    Some(_) if cell.filled => cell.color.lerp(EMPTY_CELL_COLOR, 0.6),
                    _ => cell.color,
                };
                self.draw_cell(fb, frame, x as u16, y as u16, Cell { filled: cell.filled, color });
            }
        }

        if let Some(current) = snap.current.as_ref() {
            for (x, y) in current.cells() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_cell(fb, frame, x as u16, y as u16, Cell::filled(current.color));
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);
        frame
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

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

    fn draw_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, cell: Cell) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        if cell.filled {
            let style = CellStyle::new(cell.color, EMPTY_CELL_COLOR).bold();
            fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
        } else {
            let style = CellStyle::new(Rgb::new(70, 72, 80), EMPTY_CELL_COLOR).dim();
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
            fb.put_char(px, py, '·', style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        if viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        for (name, number) in [
            ("SCORE", snap.score),
            // Levels are shown counting from 1.
            ("LEVEL", snap.level.saturating_add(1)),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), number, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        if let Some(next) = snap.next.as_ref() {
            self.draw_preview(fb, panel_x, y.saturating_add(1), next);
        }
    }

    /// Draw a piece's mask at a fixed screen position, ignoring its board
    /// coordinates and skipping empty leading rows.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &PieceSnapshot) {
        let style = CellStyle::new(piece.color, SCREEN_BG).bold();
        let mut py = y;
        for row in piece.shape.iter().filter(|row| row.iter().any(|&set| set)) {
            for (dx, &set) in row.iter().enumerate() {
                if set {
                    fb.fill_rect(x + dx as u16 * self.cell_w, py, self.cell_w, self.cell_h, BLOCK, style);
                }
            }
            py = py.saturating_add(self.cell_h);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
        let style = CellStyle::new(WHITE, SCREEN_BG).bold();
        let mid_y = frame.y.saturating_add(frame.h / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
            let line_style = if i == 0 { style } else { CellStyle { bold: false, ..style } };
            fb.put_str(x, mid_y.saturating_add(i as u16), text, line_style);
        }
    }
}

fn put_centered(fb: &mut FrameBuffer, width: u16, y: u16, text: &str, style: CellStyle) {
    let text_w = text.chars().count() as u16;
    fb.put_str(width.saturating_sub(text_w) / 2, y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{color_of, shape_of, FlashSnapshot};

    fn in_game() -> GameSnapshot {
        GameSnapshot {
            screen: Screen::InGame,
            ..GameSnapshot::default()
        }
    }

    fn find_text(fb: &FrameBuffer, needle: &str) -> bool {
        (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
    }

    #[test]
    fn title_screen_shows_prompt_and_blocks() {
        let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(80, 24));
        assert!(find_text(&fb, "Press ENTER"));
        assert_eq!(
            fb.cells().iter().filter(|c| c.ch == BLOCK).count(),
            TITLE_BLOCKS.len() * 2
        );
    }

    #[test]
    fn locked_cells_use_their_color() {
        let mut snap = in_game();
        snap.board[19][0] = Cell::filled(color_of(PieceKind::T));

        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(80, 24));

        // Frame is 22x22, centered: x = 29, y = 1.
        let cell = fb.get(30, 21).unwrap();
        assert_eq!(cell.ch, BLOCK);
        assert_eq!(cell.style.fg, color_of(PieceKind::T));
        assert_eq!(fb.get(31, 21).unwrap().ch, BLOCK);
    }

    #[test]
    fn current_piece_drawn_only_inside_field() {
        let mut snap = in_game();
        snap.current = Some(PieceSnapshot {
            kind: PieceKind::T,
            shape: shape_of(PieceKind::T),
            x: 3,
            y: -1,
            color: color_of(PieceKind::T),
        });

        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        let blocks = fb.cells().iter().filter(|c| c.ch == BLOCK).count();
        // Three cells visible in row 0, two columns each.
        assert_eq!(blocks, 6);
    }

    #[test]
    fn flashing_rows_alternate_colors() {
        let mut snap = in_game();
        let color = color_of(PieceKind::I);
        for x in 0..BOARD_WIDTH as usize {
            snap.board[19][x] = Cell::filled(color);
        }
        let mut rows = [false; BOARD_HEIGHT as usize];
        rows[19] = true;

        let view = GameView::default();
        snap.flash = Some(FlashSnapshot { rows, lit: true });
        let lit = view.render(&snap, Viewport::new(80, 24)).get(30, 21).unwrap();
        snap.flash = Some(FlashSnapshot { rows, lit: false });
        let unlit = view.render(&snap, Viewport::new(80, 24)).get(30, 21).unwrap();

        assert_eq!(lit.style.fg, color.lerp(WHITE, 0.6));
        assert_eq!(unlit.style.fg, color.lerp(EMPTY_CELL_COLOR, 0.6));
    }

    #[test]
    fn side_panel_and_overlays() {
        let mut snap = in_game();
        snap.score = 1200;
        snap.level = 2;
        snap.paused = true;

        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        assert!(find_text(&fb, "SCORE"));
        assert!(find_text(&fb, "1200"));
        assert!(find_text(&fb, "PAUSED"));

        snap.paused = false;
        snap.screen = Screen::GameOver;
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        assert!(find_text(&fb, "GAME OVER"));
        assert!(!find_text(&fb, "PAUSED"));
    }

    #[test]
    fn tall_cells_skip_title_blocks_that_do_not_fit() {
        let view = GameView::new(2, 3);
        let fb = view.render(&GameSnapshot::default(), Viewport::new(40, 2));
        assert_eq!(fb.cells().iter().filter(|c| c.ch == BLOCK).count(), 0);

        let fb = view.render(&GameSnapshot::default(), Viewport::new(40, 12));
        // Bottom row of blocks fills rows 9..=11.
        assert_eq!(fb.get(40 / 2 - 9, 9).map(|c| c.ch), Some(BLOCK));
        assert_eq!(fb.get(40 / 2 - 9, 11).map(|c| c.ch), Some(BLOCK));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let fb = GameView::default().render(&in_game(), Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }
}

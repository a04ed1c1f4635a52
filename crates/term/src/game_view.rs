//! GameView: maps a [`BoardSurface`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: title, the card grid, the move/time line and a key
//! help line. Each card is a small bordered box; the selected card gets a
//! highlighted border. The win banner is drawn over the middle of the grid.

use crate::board_surface::BoardSurface;
use crate::core::Card;
use crate::fb::{char_width, str_width, CellStyle, FrameBuffer, Rgb};
use crate::types::CardRef;

const TITLE: &str = "M E M O R Y";
const HELP: &str = "arrows move  space flip  r restart  q quit";

/// Title line plus one blank row.
const HEADER_ROWS: u16 = 2;
/// Blank row, HUD line, help line.
const FOOTER_ROWS: u16 = 3;

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

/// Screen position of the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// First row of the whole frame (title line).
    pub top: u16,
    /// Top-left corner of the first card.
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// A lightweight terminal renderer for the card grid.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Card box width in terminal columns (including border).
    card_w: u16,
    /// Card box height in terminal rows (including border).
    card_h: u16,
    gap_x: u16,
    gap_y: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 leaves a 4-column interior: room for one centered emoji.
        Self {
            card_w: 6,
            card_h: 3,
            gap_x: 1,
            gap_y: 0,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, dimension: u8, viewport: Viewport) -> GridLayout {
        let d = dimension as u16;
        let width = span(d, self.card_w, self.gap_x);
        let height = span(d, self.card_h, self.gap_y);
        let frame_h = HEADER_ROWS + height + FOOTER_ROWS;

        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        GridLayout {
            top,
            x: viewport.width.saturating_sub(width) / 2,
            y: top + HEADER_ROWS,
            width,
            height,
        }
    }

    /// Render the board into an existing framebuffer.
    ///
    /// `selected` is the deck index under the keyboard cursor, if any.
    pub fn render_into(
        &self,
        board: &BoardSurface,
        selected: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(board.dimension(), viewport);

        let title = CellStyle {
            fg: Rgb::new(240, 220, 120),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        put_centered(fb, viewport.width, layout.top, TITLE, title);

        let d = board.dimension().max(1) as usize;
        for (i, card) in board.cards().iter().enumerate() {
            let (cx, cy) = ((i % d) as u16, (i / d) as u16);
            let px = layout.x + cx * (self.card_w + self.gap_x);
            let py = layout.y + cy * (self.card_h + self.gap_y);
            self.draw_card(fb, px, py, card, selected == Some(i));
        }

        let hud = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let hud_y = layout.y + layout.height + 1;
        let stats = format!("{} moves   Time: {} sec", board.moves(), board.elapsed());
        put_centered(fb, viewport.width, hud_y, &stats, hud);

        let help = CellStyle {
            dim: true,
            bold: false,
            ..hud
        };
        put_centered(fb, viewport.width, hud_y + 1, HELP, help);

        if let Some((moves, seconds)) = board.win() {
            self.draw_win_banner(fb, &layout, viewport, moves, seconds);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        board: &BoardSurface,
        selected: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, selected, viewport, &mut fb);
        fb
    }

    /// Card under terminal position (`column`, `row`), if any.
    ///
    /// Gaps between cards do not hit anything.
    pub fn hit_test(
        &self,
        board: &BoardSurface,
        viewport: Viewport,
        column: u16,
        row: u16,
    ) -> Option<CardRef> {
        let d = board.dimension() as u16;
        if d == 0 {
            return None;
        }
        let layout = self.layout(board.dimension(), viewport);
        if column < layout.x || row < layout.y {
            return None;
        }

        let cx = cell_at(column - layout.x, self.card_w, self.gap_x)?;
        let cy = cell_at(row - layout.y, self.card_h, self.gap_y)?;
        if cx >= d || cy >= d {
            return None;
        }

        let index = cy as usize * d as usize + cx as usize;
        (index < board.cards().len()).then(|| CardRef::new(board.round(), index))
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, card: &Card, selected: bool) {
        let face_bg = if card.matched {
            Rgb::new(30, 70, 40)
        } else if card.face_up {
            Rgb::new(60, 60, 80)
        } else {
            Rgb::new(30, 30, 40)
        };
        let border = CellStyle {
            fg: if selected {
                Rgb::new(255, 220, 80)
            } else if card.matched {
                Rgb::new(100, 200, 120)
            } else {
                Rgb::new(150, 150, 160)
            },
            bg: Rgb::new(0, 0, 0),
            bold: selected,
            dim: false,
        };
        draw_border(fb, x, y, self.card_w, self.card_h, border);

        let inner_w = self.card_w - 2;
        let inner_h = self.card_h - 2;
        if card.is_visible() {
            let face = CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: face_bg,
                bold: false,
                dim: false,
            };
            fb.fill_rect(x + 1, y + 1, inner_w, inner_h, ' ', face);

            let glyph = card.symbol.glyph();
            let glyph_w = char_width(glyph);
            let gx = x + 1 + inner_w.saturating_sub(glyph_w) / 2;
            let gy = y + 1 + inner_h / 2;
            fb.put_char(gx, gy, glyph, face);
        } else {
            let back = CellStyle {
                fg: Rgb::new(80, 110, 180),
                bg: face_bg,
                bold: false,
                dim: false,
            };
            fb.fill_rect(x + 1, y + 1, inner_w, inner_h, '░', back);
        }
    }

    fn draw_win_banner(
        &self,
        fb: &mut FrameBuffer,
        layout: &GridLayout,
        viewport: Viewport,
        moves: u32,
        seconds: u32,
    ) {
        let lines = [
            "You won!".to_string(),
            format!("in {} moves", moves),
            format!("in {} seconds", seconds),
        ];
        let text_w = lines.iter().map(|l| str_width(l)).max().unwrap_or(0);
        let w = text_w + 4;
        let h = lines.len() as u16 + 2;

        let x = viewport.width.saturating_sub(w) / 2;
        let y = layout.y + layout.height.saturating_sub(h) / 2;

        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(20, 60, 30),
            bold: true,
            dim: false,
        };
        fb.fill_rect(x, y, w, h, ' ', style);
        draw_border(fb, x, y, w, h, style);
        for (i, line) in lines.iter().enumerate() {
            let lx = x + (w - str_width(line)) / 2;
            fb.put_str(lx, y + 1 + i as u16, line, style);
        }
    }
}

/// Total extent of `n` boxes of size `size` separated by `gap`.
fn span(n: u16, size: u16, gap: u16) -> u16 {
    if n == 0 {
        return 0;
    }
    n * size + (n - 1) * gap
}

/// Box index containing offset `offset`, or `None` when it falls in a gap.
fn cell_at(offset: u16, size: u16, gap: u16) -> Option<u16> {
    let stride = size + gap;
    (offset % stride < size).then_some(offset / stride)
}

fn put_centered(fb: &mut FrameBuffer, width: u16, y: u16, text: &str, style: CellStyle) {
    let x = width.saturating_sub(str_width(text)) / 2;
    fb.put_str(x, y, text, style);
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

//! BoardView: maps a `core::Board` plus session status into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Board, Status};
use crate::fb::{FrameBuffer, GlyphStyle, Rgb};
use crate::types::Tile;

pub const HEADER: &str = "Use the arrow keys to play 2048! -- Press t to test -- Press q to quit";
pub const LOST_PROMPT: &str = "You lost! Would you like to play again? (y/n)";

/// Rows above the board frame: header, status, spacer.
const FRAME_TOP: u16 = 3;

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

/// Renders the board as a grid of boxed tiles.
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // Wide enough for "65536" with a space either side; three rows keeps
        // tiles roughly square in most terminal fonts.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the framed board, border included
    pub fn frame_size(&self, board: &Board) -> (u16, u16) {
        let n = board.size() as u16;
        (n * self.cell_w + 2, n * self.cell_h + 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, board: &Board, status: &Status, viewport: Viewport, fb: &mut FrameBuffer) {
        if fb.width() != viewport.width || fb.height() != viewport.height {
            *fb = FrameBuffer::new(viewport.width, viewport.height);
        }
        fb.clear(GlyphStyle::default().glyph(' '));

        let label = GlyphStyle::default().bold();
        let dim = GlyphStyle {
            dim: true,
            ..GlyphStyle::default()
        };

        fb.put_str(0, 0, HEADER, label);
        let swap = if status.swap_available { "ready" } else { "used" };
        let best = board.max_tile().map_or(0, Tile::value);
        fb.put_str(
            0,
            1,
            &format!("Score: {}    Best: {best}    Swap (space): {swap}", status.score),
            dim,
        );

        let (frame_w, frame_h) = self.frame_size(board);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = FRAME_TOP;

        let border = GlyphStyle::fg(Rgb::new(200, 200, 200));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let n = board.size() as i8;
        for y in 0..n {
            for x in 0..n {
                match board.get(x, y) {
                    Some(Some(tile)) => self.draw_tile(fb, start_x, start_y, x as u16, y as u16, tile),
                    _ => self.draw_empty_cell(fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        let mut line_y = start_y + frame_h;
        if let Some(message) = &status.message {
            fb.put_str(0, line_y, message, GlyphStyle::default());
            line_y += 1;
        }
        if status.lost {
            fb.put_str(0, line_y, LOST_PROMPT, GlyphStyle::fg(Rgb::new(255, 120, 120)).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board, status: &Status, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, status, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: GlyphStyle) {
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

    /// Top-left terminal position of board cell (cell_x, cell_y)
    fn cell_origin(&self, start_x: u16, start_y: u16, cell_x: u16, cell_y: u16) -> (u16, u16) {
        (
            start_x + 1 + cell_x * self.cell_w,
            start_y + 1 + cell_y * self.cell_h,
        )
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = GlyphStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: true,
        };
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px + self.cell_w / 2, py + self.cell_h / 2, '·', style);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, tile: Tile) {
        let style = tile_style(tile);
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let text = tile.to_string();
        let text_w = text.chars().count() as u16;
        let tx = px + self.cell_w.saturating_sub(text_w) / 2;
        fb.put_str(tx, py + self.cell_h / 2, &text, style);
    }
}

/// Colour per tile value: 2 red, 4 green, 8 yellow, 16 blue, 32 magenta,
/// 64 cyan, 128 grey, 256 white; 512 and up reuse earlier colours.
pub fn tile_color(tile: Tile) -> Rgb {
    const RED: Rgb = Rgb::new(220, 80, 80);
    const GREEN: Rgb = Rgb::new(100, 220, 120);
    const YELLOW: Rgb = Rgb::new(240, 220, 80);
    const BLUE: Rgb = Rgb::new(80, 120, 220);
    const MAGENTA: Rgb = Rgb::new(200, 120, 220);
    const CYAN: Rgb = Rgb::new(80, 220, 220);
    const GREY: Rgb = Rgb::new(150, 150, 150);
    const WHITE: Rgb = Rgb::new(255, 255, 255);

    match tile.rank() {
        1 => RED,
        2 => GREEN,
        3 => YELLOW,
        4 => BLUE,
        5 => MAGENTA,
        6 => CYAN,
        7 => GREY,
        8 => WHITE,
        9 => GREEN,
        10 => RED,
        11 => BLUE,
        12 => MAGENTA,
        _ => WHITE,
    }
}

fn tile_style(tile: Tile) -> GlyphStyle {
    let style = GlyphStyle::fg(tile_color(tile)).on(Rgb::new(30, 30, 40));
    if tile.value() >= 2048 {
        style.bold()
    } else {
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_scales_with_board() {
        let view = BoardView::default();
        assert_eq!(view.frame_size(&Board::new(4)), (30, 14));
        assert_eq!(view.frame_size(&Board::new(1)), (9, 5));
    }

    #[test]
    fn test_palette_follows_rank() {
        let two = Tile::new(2).unwrap();
        assert_eq!(tile_color(two), Rgb::new(220, 80, 80));
        assert_eq!(tile_color(Tile::new(1024).unwrap()), tile_color(two));
        assert_eq!(
            tile_color(Tile::new(512).unwrap()),
            tile_color(Tile::new(4).unwrap())
        );
    }
}

//! TerminalRenderer: owns the terminal session and paints whole frames.
//!
//! Every draw clears the screen first, so exactly one frame is ever visible.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{self, ClearType},
};

use crate::fb::{FrameBuffer, GlyphStyle, Rgb};

pub struct TerminalRenderer {
    out: io::Stdout,
    /// Frame bytes are assembled here and written with a single flush.
    scratch: Vec<u8>,
    in_session: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            scratch: Vec::with_capacity(16 * 1024),
            in_session: false,
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        self.scratch.clear();
        queue!(
            self.scratch,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.write_scratch()?;
        self.in_session = true;
        Ok(())
    }

    /// Undo [`TerminalRenderer::enter`]. A no-op outside a session.
    pub fn exit(&mut self) -> Result<()> {
        if !self.in_session {
            return Ok(());
        }
        self.in_session = false;

        self.scratch.clear();
        queue!(
            self.scratch,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.write_scratch()?;
        terminal::disable_raw_mode().context("disabling raw mode")?;
        Ok(())
    }

    /// Clear the screen and paint `fb` from the top-left corner.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.scratch.clear();
        encode_full_into(fb, &mut self.scratch)?;
        self.write_scratch()
    }

    fn write_scratch(&mut self) -> Result<()> {
        self.out.write_all(&self.scratch)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode clear-screen plus every glyph of `fb` into `out`.
///
/// Style changes are emitted only where the style differs from the previous
/// glyph. Nothing is written to the terminal.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

    let mut active: Option<GlyphStyle> = None;
    for row in 0..fb.height() {
        if row > 0 {
            queue!(out, Print("\r\n"))?;
        }
        for col in 0..fb.width() {
            let glyph = fb.get(col, row).unwrap_or_default();
            if active != Some(glyph.style) {
                apply_style_into(out, glyph.style)?;
                active = Some(glyph.style);
            }
            queue!(out, Print(glyph.ch))?;
        }
    }

    queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: GlyphStyle) -> Result<()> {
    queue!(
        out,
        SetForegroundColor(rgb_to_color(style.fg)),
        SetBackgroundColor(rgb_to_color(style.bg)),
        SetAttribute(Attribute::Reset)
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(Rgb { r, g, b }: Rgb) -> Color {
    Color::Rgb { r, g, b }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(fb: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_full_into(fb, &mut out).unwrap();
        String::from_utf8_lossy(&out).into_owned()
    }

    #[test]
    fn full_redraw_starts_with_clear() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.put_str(0, 0, "ok", GlyphStyle::default());

        let mut clear = Vec::new();
        queue!(clear, terminal::Clear(ClearType::All)).unwrap();

        let text = encoded(&fb);
        assert!(text.starts_with(String::from_utf8_lossy(&clear).as_ref()));
        assert!(text.contains("ok"));
    }

    #[test]
    fn style_is_emitted_once_per_run() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "abcd", GlyphStyle::default());

        let mut one_style = Vec::new();
        apply_style_into(&mut one_style, GlyphStyle::default()).unwrap();
        let needle = String::from_utf8_lossy(&one_style).into_owned();
        assert_eq!(encoded(&fb).matches(needle.as_str()).count(), 1);
    }

    #[test]
    fn rows_are_separated_by_crlf() {
        let mut fb = FrameBuffer::new(1, 3);
        fb.put_str(0, 0, "a", GlyphStyle::default());
        fb.put_str(0, 1, "b", GlyphStyle::default());
        fb.put_str(0, 2, "c", GlyphStyle::default());

        let text = encoded(&fb);
        assert_eq!(text.matches("\r\n").count(), 2);
    }

    #[test]
    fn exit_outside_session_is_a_no_op() {
        let mut renderer = TerminalRenderer::new();
        renderer.exit().unwrap();
    }
}

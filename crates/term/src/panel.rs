//! Full-screen text panels (diagnostics menu and reports).

use crate::core::{Diagnostic, DiagnosticReport};
use crate::fb::{FrameBuffer, GlyphStyle, Rgb};

/// Colour class of a panel line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Heading,
    Pass,
    Fail,
}

impl Tone {
    fn style(self) -> GlyphStyle {
        match self {
            Tone::Normal => GlyphStyle::default(),
            Tone::Heading => GlyphStyle::default().bold(),
            Tone::Pass => GlyphStyle::fg(Rgb::new(100, 220, 120)),
            Tone::Fail => GlyphStyle::fg(Rgb::new(255, 120, 120)).bold(),
        }
    }
}

/// A screen of text lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextPanel {
    pub lines: Vec<(String, Tone)>,
}

impl TextPanel {
    pub fn push(&mut self, text: impl Into<String>, tone: Tone) {
        self.lines.push((text.into(), tone));
    }

    /// The diagnostics menu, optionally followed by the last report
    pub fn diagnostics_menu(last: Option<&DiagnosticReport>) -> Self {
        let mut panel = TextPanel::default();
        panel.push("Testing...", Tone::Heading);
        panel.push("Which option would you like to test?", Tone::Normal);
        panel.push("0    Back to the game", Tone::Normal);
        for d in Diagnostic::ALL {
            panel.push(format!("{}    {}", d.number(), d.title()), Tone::Normal);
        }

        if let Some(report) = last {
            panel.push("", Tone::Normal);
            let verdict = if report.passed { "Test passed." } else { "Test failed!" };
            panel.push(
                format!("{}: {verdict}", report.diagnostic.title()),
                if report.passed { Tone::Pass } else { Tone::Fail },
            );
            for line in &report.lines {
                let tone = if line.starts_with("[FAIL]") {
                    Tone::Fail
                } else {
                    Tone::Normal
                };
                panel.push(line.clone(), tone);
            }
        }
        panel
    }

    pub fn render(&self, width: u16, height: u16) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, height);
        for (y, (text, tone)) in self.lines.iter().enumerate() {
            if y >= height as usize {
                break;
            }
            fb.put_str(0, y as u16, text, tone.style());
        }
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_diagnostic() {
        let panel = TextPanel::diagnostics_menu(None);
        let text = panel.render(60, 10).text();
        for d in Diagnostic::ALL {
            assert!(text.contains(d.title()), "missing {}", d.title());
        }
    }

    #[test]
    fn test_failed_lines_are_highlighted() {
        let report = DiagnosticReport {
            diagnostic: Diagnostic::LossDetection,
            passed: false,
            lines: vec!["[ok] fine".into(), "[FAIL] broken".into()],
        };
        let panel = TextPanel::diagnostics_menu(Some(&report));
        let (_, tone) = panel.lines.last().unwrap();
        assert_eq!(*tone, Tone::Fail);
        assert!(panel.lines.iter().any(|(t, _)| t.contains("Test failed!")));
    }

    #[test]
    fn test_render_clips_to_height() {
        let mut panel = TextPanel::default();
        for i in 0..5 {
            panel.push(format!("line {i}"), Tone::Normal);
        }
        let fb = panel.render(10, 2);
        assert_eq!(fb.row_text(1).trim_end(), "line 1");
    }
}

//! TerminalPresenter: the core's `Presenter` backed by a real terminal.

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::board_view::{BoardView, Viewport};
use crate::core::{Board, Presenter, Status};
use crate::fb::FrameBuffer;
use crate::panel::TextPanel;
use crate::renderer::TerminalRenderer;

pub struct TerminalPresenter {
    renderer: TerminalRenderer,
    view: BoardView,
    fb: FrameBuffer,
}

impl TerminalPresenter {
    pub fn new(view: BoardView) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view,
            fb: FrameBuffer::new(0, 0),
        }
    }

    /// Switch to raw mode and the alternate screen
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    /// Restore the terminal; safe to call more than once
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Replace the screen with a text panel
    pub fn show_panel(&mut self, panel: &TextPanel) -> Result<()> {
        let vp = viewport();
        let fb = panel.render(vp.width, vp.height);
        self.renderer.draw(&fb)
    }
}

impl Presenter for TerminalPresenter {
    type Error = anyhow::Error;

    fn present(&mut self, board: &Board, status: &Status) -> Result<()> {
        self.view.render_into(board, status, viewport(), &mut self.fb);
        self.renderer.draw(&self.fb)
    }

    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

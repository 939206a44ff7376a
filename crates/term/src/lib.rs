//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is flushed to the terminal with
//! a full clear-and-redraw per frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout pure: `BoardView` and `TextPanel` only touch a framebuffer
//! - Implement the core's `Presenter` (render + pacing) for a real terminal

pub mod board_view;
pub mod fb;
pub mod panel;
pub mod presenter;
pub mod renderer;

pub use term_2048_core as core;
pub use term_2048_types as types;

pub use board_view::{tile_color, BoardView, Viewport, HEADER, LOST_PROMPT};
pub use fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
pub use panel::{TextPanel, Tone};
pub use presenter::TerminalPresenter;
pub use renderer::{encode_full_into, TerminalRenderer};

//! Terminal input module.
//!
//! This module is independent of any rendering code. It maps `crossterm` key
//! events into [`crate::types::InputEvent`]s and provides the one blocking
//! call the game loop needs: wait for the next key press.

pub mod map;
pub mod reader;

pub use term_2048_types as types;

pub use map::{is_yes, map_key, menu_digit, should_quit};
pub use reader::{next_event, read_key_press};

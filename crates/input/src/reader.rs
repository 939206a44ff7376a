//! Blocking key reader.
//!
//! Terminals that report key releases and auto-repeat send several events per
//! physical press; only `Press` events count here.

use std::io;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::InputEvent;

/// Block until the next key press.
pub fn read_key_press() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

/// Block until a key press arrives; unmapped keys yield `None`.
pub fn next_event() -> io::Result<Option<InputEvent>> {
    let key = read_key_press()?;
    let mapped = map_key(key);
    if mapped.is_none() {
        log::trace!("ignored key {:?}", key.code);
    }
    Ok(mapped)
}

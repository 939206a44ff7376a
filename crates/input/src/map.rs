//! Key mapping from terminal events to game inputs.

use crate::types::{Direction, InputEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game inputs.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputEvent::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputEvent::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputEvent::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputEvent::Move(Direction::Down))
        }

        // Actions
        KeyCode::Char(' ') => Some(InputEvent::Swap),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(InputEvent::Diagnostics),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Answer to a yes/no prompt; anything but `y` means no.
pub fn is_yes(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'))
}

/// Digit pressed in a numbered menu.
pub fn menu_digit(key: KeyEvent) -> Option<u8> {
    match key.code {
        KeyCode::Char(c) => c.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(InputEvent::Move(Direction::Left))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(InputEvent::Move(Direction::Right))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(InputEvent::Move(Direction::Up))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(InputEvent::Move(Direction::Down))
        );
    }

    #[test]
    fn test_letter_movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('H'))),
            Some(InputEvent::Move(Direction::Left))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('k'))),
            Some(InputEvent::Move(Direction::Up))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('s'))),
            Some(InputEvent::Move(Direction::Down))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('D'))),
            Some(InputEvent::Move(Direction::Right))
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(InputEvent::Swap)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('t'))),
            Some(InputEvent::Diagnostics)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('Q'))),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn test_prompt_and_menu_keys() {
        assert!(is_yes(KeyEvent::from(KeyCode::Char('y'))));
        assert!(!is_yes(KeyEvent::from(KeyCode::Char('n'))));
        assert!(!is_yes(KeyEvent::from(KeyCode::Enter)));

        assert_eq!(menu_digit(KeyEvent::from(KeyCode::Char('0'))), Some(0));
        assert_eq!(menu_digit(KeyEvent::from(KeyCode::Char('4'))), Some(4));
        assert_eq!(menu_digit(KeyEvent::from(KeyCode::Char('x'))), None);
    }
}

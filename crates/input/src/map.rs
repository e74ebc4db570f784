//! Key mapping from terminal events to input actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for.
///
/// Cursor actions only make sense together with an [`crate::InputHandler`];
/// everything else maps straight to a session action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Game(GameAction),
    CursorLeft,
    CursorRight,
    /// Tap the tube under the cursor
    TapCursor,
}

/// Map keyboard input to input actions.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        // Direct tube taps: 1-9 are tubes 1-9, 0 is tube 10
        KeyCode::Char(c @ '1'..='9') => Some(InputAction::Game(GameAction::Tap(
            (c as usize) - ('1' as usize),
        ))),
        KeyCode::Char('0') => Some(InputAction::Game(GameAction::Tap(9))),

        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(InputAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(InputAction::CursorRight),
        KeyCode::Char(' ') | KeyCode::Enter => Some(InputAction::TapCursor),

        // Session
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Game(GameAction::Restart)),
        KeyCode::Char('u') | KeyCode::Char('U') => {
            Some(InputAction::Game(GameAction::ResetLayout))
        }
        KeyCode::Char('n') | KeyCode::Char('N') => Some(InputAction::Game(GameAction::NextLevel)),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(c: char) -> Option<InputAction> {
        handle_key_event(KeyEvent::from(KeyCode::Char(c)))
    }

    #[test]
    fn test_digit_keys_tap_tubes() {
        assert_eq!(key('1'), Some(InputAction::Game(GameAction::Tap(0))));
        assert_eq!(key('5'), Some(InputAction::Game(GameAction::Tap(4))));
        assert_eq!(key('9'), Some(InputAction::Game(GameAction::Tap(8))));
        assert_eq!(key('0'), Some(InputAction::Game(GameAction::Tap(9))));
    }

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(InputAction::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(InputAction::CursorRight)
        );
        assert_eq!(key('h'), Some(InputAction::CursorLeft));
        assert_eq!(key('L'), Some(InputAction::CursorRight));
        assert_eq!(key(' '), Some(InputAction::TapCursor));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(InputAction::TapCursor)
        );
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(key('r'), Some(InputAction::Game(GameAction::Restart)));
        assert_eq!(key('U'), Some(InputAction::Game(GameAction::ResetLayout)));
        assert_eq!(key('n'), Some(InputAction::Game(GameAction::NextLevel)));
        assert_eq!(key('x'), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('n'))));
    }
}

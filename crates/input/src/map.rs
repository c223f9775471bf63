//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::CursorUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::CursorDown),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::CursorRight),

        // Moves
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Place),
        KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::Keep),
        KeyCode::Char('t') | KeyCode::Char('T') | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(GameAction::Trash)
        }

        // Session controls
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameAction::Undo),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(GameAction::ToggleHints),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::TogglePause),

        // Difficulty selection
        KeyCode::Char('1') => Some(GameAction::Difficulty(1)),
        KeyCode::Char('2') => Some(GameAction::Difficulty(2)),
        KeyCode::Char('3') => Some(GameAction::Difficulty(3)),

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

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::CursorUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::CursorDown)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::CursorLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::CursorRight)
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('W'))),
            Some(GameAction::CursorUp)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(GameAction::CursorLeft)
        );
    }

    #[test]
    fn test_move_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Place)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Place)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('k'))),
            Some(GameAction::Keep)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('t'))),
            Some(GameAction::Trash)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('x'))),
            Some(GameAction::Trash)
        );
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('z'))),
            Some(GameAction::Undo)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('g'))),
            Some(GameAction::ToggleHints)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameAction::TogglePause)
        );
    }

    #[test]
    fn test_difficulty_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('1'))),
            Some(GameAction::Difficulty(1))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('2'))),
            Some(GameAction::Difficulty(2))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('3'))),
            Some(GameAction::Difficulty(3))
        );
    }

    #[test]
    fn test_unmapped_keys_do_nothing() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('v'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Esc)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('e'))));
    }
}

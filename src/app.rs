//! Shell state: a game session plus the board cursor.
//!
//! The terminal shell has no pointer, so placement targets are chosen with
//! a cursor over the grid. Applying a [`GameAction`] routes cursor motion
//! here and everything else to the session; move results are reflected by
//! the session's own status, which the view reads directly.

use just_divide_core::GameSession;
use just_divide_types::{Difficulty, GameAction, GRID_SIZE};

pub struct App {
    pub session: GameSession,
    /// Board cursor as (row, col), always in bounds.
    pub cursor: (usize, usize),
}

impl App {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            cursor: (0, 0),
        }
    }

    /// Apply one shell action.
    pub fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::CursorUp => self.cursor.0 = self.cursor.0.saturating_sub(1),
            GameAction::CursorDown => self.cursor.0 = (self.cursor.0 + 1).min(GRID_SIZE - 1),
            GameAction::CursorLeft => self.cursor.1 = self.cursor.1.saturating_sub(1),
            GameAction::CursorRight => self.cursor.1 = (self.cursor.1 + 1).min(GRID_SIZE - 1),
            GameAction::Place => {
                self.session.try_place(self.cursor.0, self.cursor.1);
            }
            GameAction::Keep => {
                self.session.try_keep();
            }
            GameAction::Trash => {
                self.session.try_trash();
            }
            GameAction::Undo => {
                self.session.undo();
            }
            GameAction::Restart => self.session.restart(),
            GameAction::ToggleHints => {
                let enabled = self.session.hints_enabled();
                self.session.set_hints_enabled(!enabled);
            }
            GameAction::TogglePause => {
                let paused = self.session.paused();
                self.session.set_paused(!paused);
            }
            GameAction::Difficulty(index) => {
                self.session.set_difficulty(Difficulty::from_index(index));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(GameSession::new(12345))
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = app();
        app.apply(GameAction::CursorUp);
        app.apply(GameAction::CursorLeft);
        assert_eq!(app.cursor, (0, 0));

        for _ in 0..10 {
            app.apply(GameAction::CursorDown);
            app.apply(GameAction::CursorRight);
        }
        assert_eq!(app.cursor, (GRID_SIZE - 1, GRID_SIZE - 1));
    }

    #[test]
    fn test_place_targets_the_cursor() {
        let mut app = app();
        app.apply(GameAction::CursorDown);
        app.apply(GameAction::CursorRight);
        app.apply(GameAction::Place);
        assert!(app.session.grid().tile(1, 1).is_some());
    }

    #[test]
    fn test_toggles_flip_session_flags() {
        let mut app = app();
        assert!(app.session.hints_enabled());
        app.apply(GameAction::ToggleHints);
        assert!(!app.session.hints_enabled());

        assert!(!app.session.paused());
        app.apply(GameAction::TogglePause);
        assert!(app.session.paused());
    }

    #[test]
    fn test_difficulty_action_selects_pool() {
        let mut app = app();
        app.apply(GameAction::Difficulty(3));
        assert_eq!(app.session.difficulty(), Difficulty::Hard);
        app.apply(GameAction::Difficulty(9));
        assert_eq!(app.session.difficulty(), Difficulty::Easy);
    }
}

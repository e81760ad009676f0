//! Keyboard input translated into match actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Everything the player can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move the avatar one row up.
    MoveUp,
    /// Move the avatar one row down.
    MoveDown,
    /// Move the avatar one column left.
    MoveLeft,
    /// Move the avatar one column right.
    MoveRight,
    /// Leave the match.
    Escape,
    /// Stop the clock.
    Pause,
    /// A key with no binding. Pauses the match.
    Unrecognized,
}

impl Action {
    /// Translate a key event.
    ///
    /// Returns `None` for key releases and for non-character keys without a
    /// binding, such as function keys.
    #[must_use]
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match key.code {
            KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Left => Some(Action::MoveLeft),
            KeyCode::Right => Some(Action::MoveRight),
            KeyCode::Esc => Some(Action::Escape),
            // Raw mode swallows SIGINT, so honour Ctrl-C here.
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Escape)
            }
            KeyCode::Char('q') => Some(Action::Escape),
            KeyCode::Char('p') => Some(Action::Pause),
            KeyCode::Char(_) => Some(Action::Unrecognized),
            _ => None,
        }
    }
}

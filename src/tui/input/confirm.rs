use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::Action;

pub(super) fn confirm_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('y') => Some(Action::ConfirmDelete),
        // Cancel: n or Esc
        KeyCode::Char('n') | KeyCode::Esc => Some(Action::CancelDelete),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::Action;

pub(super) fn list_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Char('/') => Some(Action::BeginSearch),
        KeyCode::Char('n') => Some(Action::Create),
        KeyCode::Char('?') | KeyCode::Char('h') => Some(Action::Help),
        _ => None,
    }
}

pub(super) fn detail_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('e') => Some(Action::Edit),
        KeyCode::Char('d') => Some(Action::DeleteRequest),
        _ => None,
    }
}

pub(super) fn help_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Back),
        _ => None,
    }
}

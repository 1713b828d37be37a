mod confirm;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{Action, App, Mode};

use confirm::confirm_action;
use navigate::{detail_action, help_action, list_action};
use search::search_action;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if let Some(action) = key_action(&app.mode, key) {
        app.apply(action);
    }
}

/// Map a key to the action it triggers in `mode`, if any
pub fn key_action(mode: &Mode, key: KeyEvent) -> Option<Action> {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    match mode {
        Mode::List => list_action(key),
        Mode::TaskDetail { .. } => detail_action(key),
        Mode::ConfirmDelete { .. } => confirm_action(key),
        Mode::Search { .. } => search_action(key),
        Mode::Help => help_action(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn detail() -> Mode {
        Mode::TaskDetail {
            path: PathBuf::from("/t/a.md"),
            content: String::new(),
        }
    }

    fn confirm() -> Mode {
        Mode::ConfirmDelete {
            path: PathBuf::from("/t/a.md"),
            content: String::new(),
        }
    }

    fn search() -> Mode {
        Mode::Search {
            query: String::new(),
            matches: vec![],
        }
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        for mode in [Mode::List, detail(), confirm(), search(), Mode::Help] {
            assert_eq!(key_action(&mode, ctrl('c')), Some(Action::Quit), "{mode:?}");
        }
    }

    #[test]
    fn q_quits_except_in_search() {
        for mode in [Mode::List, detail(), confirm(), Mode::Help] {
            assert_eq!(key_action(&mode, key(KeyCode::Char('q'))), Some(Action::Quit));
        }
        assert_eq!(
            key_action(&search(), key(KeyCode::Char('q'))),
            Some(Action::Char('q'))
        );
    }

    #[test]
    fn list_bindings() {
        let m = Mode::List;
        assert_eq!(key_action(&m, key(KeyCode::Char('k'))), Some(Action::Up));
        assert_eq!(key_action(&m, key(KeyCode::Down)), Some(Action::Down));
        assert_eq!(key_action(&m, key(KeyCode::Enter)), Some(Action::Select));
        assert_eq!(key_action(&m, key(KeyCode::Char('/'))), Some(Action::BeginSearch));
        assert_eq!(key_action(&m, key(KeyCode::Char('n'))), Some(Action::Create));
        assert_eq!(key_action(&m, key(KeyCode::Char('?'))), Some(Action::Help));
        assert_eq!(key_action(&m, key(KeyCode::Char('h'))), Some(Action::Help));
        assert_eq!(key_action(&m, key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn shifted_question_mark_opens_help() {
        let k = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(key_action(&Mode::List, k), Some(Action::Help));
    }

    #[test]
    fn detail_bindings() {
        let m = detail();
        assert_eq!(key_action(&m, key(KeyCode::Esc)), Some(Action::Back));
        assert_eq!(key_action(&m, key(KeyCode::Char('e'))), Some(Action::Edit));
        assert_eq!(key_action(&m, key(KeyCode::Char('d'))), Some(Action::DeleteRequest));
        assert_eq!(key_action(&m, key(KeyCode::Char('n'))), None);
    }

    #[test]
    fn confirm_bindings() {
        let m = confirm();
        assert_eq!(key_action(&m, key(KeyCode::Char('y'))), Some(Action::ConfirmDelete));
        assert_eq!(key_action(&m, key(KeyCode::Char('n'))), Some(Action::CancelDelete));
        assert_eq!(key_action(&m, key(KeyCode::Esc)), Some(Action::CancelDelete));
        assert_eq!(key_action(&m, key(KeyCode::Char('d'))), None);
    }

    #[test]
    fn search_bindings() {
        let m = search();
        assert_eq!(key_action(&m, key(KeyCode::Char('j'))), Some(Action::Char('j')));
        assert_eq!(key_action(&m, key(KeyCode::Up)), Some(Action::Up));
        assert_eq!(key_action(&m, key(KeyCode::Backspace)), Some(Action::Backspace));
        assert_eq!(key_action(&m, key(KeyCode::Enter)), Some(Action::Select));
        assert_eq!(key_action(&m, key(KeyCode::Esc)), Some(Action::Back));
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(key_action(&m, shifted), Some(Action::Char('A')));
    }

    #[test]
    fn help_bindings() {
        assert_eq!(key_action(&Mode::Help, key(KeyCode::Esc)), Some(Action::Back));
        assert_eq!(key_action(&Mode::Help, key(KeyCode::Char('j'))), None);
    }
}

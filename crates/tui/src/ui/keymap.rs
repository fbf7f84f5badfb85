use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys decoded into app-level actions.
///
/// Characters are always delivered as [`Input`]; whether a character edits
/// a field, navigates or quits is decided by the app state, since most
/// sections mix text entry with shortcuts.
///
/// [`Input`]: AppAction::Input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Ctrl+C, honored everywhere.
    ForceQuit,
    Cancel,
    NextField,
    Submit,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Input(char),
    None,
}

pub fn map_key(key: KeyEvent) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return AppAction::ForceQuit;
        }
        return AppAction::None;
    }

    match key.code {
        KeyCode::Esc => AppAction::Cancel,
        KeyCode::Tab => AppAction::NextField,
        KeyCode::Enter => AppAction::Submit,
        KeyCode::Backspace => AppAction::Backspace,
        KeyCode::Up => AppAction::Up,
        KeyCode::Down => AppAction::Down,
        KeyCode::Left => AppAction::Left,
        KeyCode::Right => AppAction::Right,
        KeyCode::Char(ch) => AppAction::Input(ch),
        _ => AppAction::None,
    }
}

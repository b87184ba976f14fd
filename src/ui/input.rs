use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action the runtime must take after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Handled inside the app.
    None,
    /// Start a new fetch.
    Fetch,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
        app.request_quit();
        return InputAction::None;
    }

    // Selection and sharing only exist while a quote is on screen.
    if app.state().current().is_some() {
        match key.code {
            KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Enter => {
                app.select_new_quote();
            }
            KeyCode::Char('t') | KeyCode::Char('s') => {
                app.copy_share_link();
            }
            _ => {}
        }
        return InputAction::None;
    }

    if matches!(key.code, KeyCode::Char('r')) && app.can_retry() {
        return InputAction::Fetch;
    }

    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Action, App, AppView, FormField};

pub mod keys {
    pub const HELP: &str = "?";
    pub const REFRESH: &str = "r";
    pub const QUIT: &str = "q";
    pub const ESC: &str = "Esc";
    pub const NEXT_FIELD: &str = "Tab";
    pub const PREV_FIELD: &str = "S-Tab";
    pub const ACTIVATE: &str = "Enter";
}

pub struct KeyBinding {
    pub key: &'static str,
    pub description: &'static str,
}

pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        key: "r",
        description: "Refresh usage and battery data",
    },
    KeyBinding {
        key: "?",
        description: "Toggle this help",
    },
    KeyBinding {
        key: "q / Esc",
        description: "Quit",
    },
    KeyBinding {
        key: "Ctrl+C",
        description: "Quit from any screen",
    },
];

pub fn handle_key(app: &App, key: KeyEvent) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match app.view {
        AppView::Onboarding => handle_onboarding_keys(key, app.form.focus),
        AppView::Dashboard => handle_dashboard_keys(key),
        AppView::Help => handle_help_keys(key),
    }
}

fn handle_dashboard_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') | KeyCode::F(5) => Action::Refresh,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => Action::None,
    }
}

fn handle_help_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::CloseOverlay,
        _ => Action::None,
    }
}

fn handle_onboarding_keys(key: KeyEvent, focus: FormField) -> Action {
    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Tab | KeyCode::Down => Action::FocusNext,
        KeyCode::BackTab | KeyCode::Up => Action::FocusPrevious,
        KeyCode::Enter => Action::Activate,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) if focus.is_text() => Action::InputChar(c),
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if focus == FormField::Gender => {
            Action::ToggleGender
        }
        KeyCode::Char(' ') => Action::Activate,
        KeyCode::Char('r') => Action::RecheckAccess,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_dashboard_keys() {
        assert_eq!(handle_dashboard_keys(press(KeyCode::Char('r'))), Action::Refresh);
        assert_eq!(handle_dashboard_keys(press(KeyCode::Char('?'))), Action::ToggleHelp);
        assert_eq!(handle_dashboard_keys(press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_dashboard_keys(press(KeyCode::Esc)), Action::Quit);
        assert_eq!(handle_dashboard_keys(press(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn test_text_fields_capture_letters() {
        assert_eq!(
            handle_onboarding_keys(press(KeyCode::Char('q')), FormField::Name),
            Action::InputChar('q')
        );
        assert_eq!(
            handle_onboarding_keys(press(KeyCode::Char('r')), FormField::Age),
            Action::InputChar('r')
        );
        assert_eq!(
            handle_onboarding_keys(press(KeyCode::Char('q')), FormField::Submit),
            Action::Quit
        );
    }

    #[test]
    fn test_gender_field_toggles() {
        for code in [KeyCode::Left, KeyCode::Right, KeyCode::Char(' ')] {
            assert_eq!(
                handle_onboarding_keys(press(code), FormField::Gender),
                Action::ToggleGender
            );
        }
        assert_eq!(
            handle_onboarding_keys(press(KeyCode::Char(' ')), FormField::Submit),
            Action::Activate
        );
    }

    #[test]
    fn test_form_navigation() {
        assert_eq!(
            handle_onboarding_keys(press(KeyCode::Tab), FormField::Name),
            Action::FocusNext
        );
        assert_eq!(
            handle_onboarding_keys(press(KeyCode::BackTab), FormField::Name),
            Action::FocusPrevious
        );
        assert_eq!(
            handle_onboarding_keys(press(KeyCode::Enter), FormField::Permission),
            Action::Activate
        );
    }

    #[test]
    fn test_help_closes() {
        assert_eq!(handle_help_keys(press(KeyCode::Esc)), Action::CloseOverlay);
        assert_eq!(handle_help_keys(press(KeyCode::Char('r'))), Action::None);
    }
}

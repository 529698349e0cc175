//! Core types for the TUI application.

/// Actions that can be performed in the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    ToggleHelp,
    CloseOverlay,
    FocusNext,
    FocusPrevious,
    InputChar(char),
    Backspace,
    ToggleGender,
    /// Enter on the focused onboarding field.
    Activate,
    RecheckAccess,
    None,
}

/// Current screen of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Onboarding,
    Dashboard,
    Help,
}

/// Focusable fields of the onboarding form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Age,
    Gender,
    Permission,
    Submit,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Age,
            FormField::Age => FormField::Gender,
            FormField::Gender => FormField::Permission,
            FormField::Permission => FormField::Submit,
            FormField::Submit => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Submit,
            FormField::Age => FormField::Name,
            FormField::Gender => FormField::Age,
            FormField::Permission => FormField::Gender,
            FormField::Submit => FormField::Permission,
        }
    }

    /// Text fields swallow printable keys.
    pub fn is_text(self) -> bool {
        matches!(self, FormField::Name | FormField::Age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_field_next_cycles_through_all_variants() {
        let mut field = FormField::Name;
        let mut seen = vec![field];
        for _ in 0..4 {
            field = field.next();
            seen.push(field);
        }
        assert_eq!(
            seen,
            vec![
                FormField::Name,
                FormField::Age,
                FormField::Gender,
                FormField::Permission,
                FormField::Submit
            ]
        );
        assert_eq!(field.next(), FormField::Name);
    }

    #[test]
    fn form_field_prev_undoes_next() {
        for field in [
            FormField::Name,
            FormField::Age,
            FormField::Gender,
            FormField::Permission,
            FormField::Submit,
        ] {
            assert_eq!(field.next().prev(), field);
        }
    }

    #[test]
    fn only_name_and_age_are_text_fields() {
        assert!(FormField::Name.is_text());
        assert!(FormField::Age.is_text());
        assert!(!FormField::Gender.is_text());
        assert!(!FormField::Submit.is_text());
    }
}

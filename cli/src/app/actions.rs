//! Action handling methods for App.

use tracing::debug;

use super::types::{Action, AppView, FormField};
use super::App;

impl App {
    /// Main action handler.
    ///
    /// Returns `false` if the application should quit, `true` otherwise.
    pub fn handle_action(&mut self, action: Action) -> bool {
        debug!(?action, view = ?self.view, "Handling action");

        match action {
            Action::Quit => return false,
            Action::None => {}

            Action::Refresh => self.refresh(),
            Action::RecheckAccess => self.recheck_access(),

            Action::ToggleHelp | Action::CloseOverlay => self.handle_view_action(action),

            Action::FocusNext
            | Action::FocusPrevious
            | Action::InputChar(_)
            | Action::Backspace
            | Action::ToggleGender
            | Action::Activate => self.handle_form_action(action),
        }

        true
    }

    fn handle_view_action(&mut self, action: Action) {
        self.view = match (action, self.view) {
            (Action::ToggleHelp, AppView::Dashboard) => AppView::Help,
            (Action::ToggleHelp | Action::CloseOverlay, AppView::Help) => AppView::Dashboard,
            (_, view) => view,
        };
    }

    fn handle_form_action(&mut self, action: Action) {
        if self.view != AppView::Onboarding {
            return;
        }
        self.status_message = None;

        match action {
            Action::FocusNext => self.form.focus_next(),
            Action::FocusPrevious => self.form.focus_prev(),
            Action::InputChar(c) => self.form.push_char(c),
            Action::Backspace => self.form.backspace(),
            Action::ToggleGender => self.form.toggle_gender(),
            Action::Activate => match self.form.focus {
                FormField::Name | FormField::Age => self.form.focus_next(),
                FormField::Gender => self.form.toggle_gender(),
                FormField::Permission => self.recheck_access(),
                FormField::Submit => self.submit_onboarding(),
            },
            _ => {}
        }
    }
}

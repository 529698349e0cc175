//! Application core module.
//!
//! Holds the App state shared by the onboarding and dashboard screens.

mod actions;
mod onboarding;
mod tui;
pub mod types;

pub use onboarding::OnboardingForm;
pub use tui::run_tui;
pub use types::{Action, AppView, FormField};

use chrono::{DateTime, Local};
use drainwatch_model::DrainReport;
use tracing::{error, info, warn};

use crate::config::UserConfig;
use crate::data::{complete_onboarding, Preferences, StatsCollector, UserProfile};

/// Main application state for the TUI.
pub struct App {
    pub config: UserConfig,
    pub view: AppView,
    pub profile: UserProfile,
    pub form: OnboardingForm,
    pub report: Option<DrainReport>,
    pub usage_access: bool,
    pub last_refresh: Option<DateTime<Local>>,
    pub status_message: Option<String>,
    preferences: Preferences,
    collector: StatsCollector,
}

impl App {
    /// Starts on the dashboard only when onboarding is done and usage access
    /// is granted; otherwise the onboarding screen is shown first.
    pub fn new(config: UserConfig, preferences: Preferences, collector: StatsCollector) -> Self {
        let profile = UserProfile::from_preferences(&preferences);
        let usage_access = collector.has_usage_access();
        let view = if profile.onboarding_complete && usage_access {
            AppView::Dashboard
        } else {
            AppView::Onboarding
        };

        info!(
            ?view,
            onboarding_complete = profile.onboarding_complete,
            usage_access,
            "Initializing app"
        );

        let mut app = Self {
            config,
            view,
            form: OnboardingForm::from_profile(&profile),
            profile,
            report: None,
            usage_access,
            last_refresh: None,
            status_message: None,
            preferences,
            collector,
        };

        if app.view == AppView::Dashboard {
            app.refresh();
        }

        app
    }

    /// Recompute the dashboard from a fresh reading of every source.
    ///
    /// On the onboarding screen only the permission state is rechecked.
    pub fn refresh(&mut self) {
        if self.view == AppView::Onboarding {
            self.recheck_access();
            return;
        }

        let profile = self.profile.profile_config(&self.config);
        let settings = self.config.estimator_settings();
        let report = self.collector.refresh(&profile, &settings);

        self.usage_access = report.usage_access;
        self.report = Some(report);
        self.last_refresh = Some(Local::now());
    }

    /// Terminal focus came back, the equivalent of the view resuming.
    pub fn on_focus_gained(&mut self) {
        self.refresh();
    }

    pub fn recheck_access(&mut self) {
        self.usage_access = self.collector.has_usage_access();
        if !self.usage_access {
            warn!("Usage access not granted");
        }
    }

    pub fn grant_instructions(&self) -> &'static str {
        self.collector.grant_instructions()
    }

    pub fn can_submit(&self) -> bool {
        self.form.can_submit(self.usage_access)
    }

    /// Save the onboarding answers and switch to the dashboard.
    pub(crate) fn submit_onboarding(&mut self) {
        self.recheck_access();
        if !self.can_submit() {
            self.status_message = Some(if self.usage_access {
                "Enter your name and age to continue".to_string()
            } else {
                "Usage access is required to continue".to_string()
            });
            return;
        }

        match complete_onboarding(
            &mut self.preferences,
            &self.form.name,
            &self.form.age,
            self.form.is_male,
        ) {
            Ok(profile) => {
                info!(name = %profile.name, age = profile.age, "Onboarding complete");
                self.profile = profile;
                self.status_message = None;
                self.view = AppView::Dashboard;
                self.refresh();
            }
            Err(e) => {
                error!(error = %e, path = %self.preferences.path().display(), "Failed to save preferences");
                self.status_message = Some(format!("Failed to save preferences: {}", e));
            }
        }
    }
}

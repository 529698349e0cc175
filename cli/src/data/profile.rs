use drainwatch_model::ProfileConfig;

use crate::config::UserConfig;

use super::preferences::{Preferences, PreferencesError};

pub const KEY_NAME: &str = "name";
pub const KEY_AGE: &str = "age";
pub const KEY_IS_MALE: &str = "is_male";
pub const KEY_ONBOARDING_COMPLETE: &str = "onboarding_complete";

const DEFAULT_NAME: &str = "User";
const DEFAULT_AGE_TEXT: &str = "25";

/// The user's onboarding answers.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub age: f64,
    pub gender_is_male: bool,
    pub onboarding_complete: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            age: ProfileConfig::DEFAULT_AGE,
            gender_is_male: true,
            onboarding_complete: false,
        }
    }
}

/// Age as stored in preferences; anything non-numeric reads as the default.
pub fn parse_age(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|age| age.is_finite())
        .unwrap_or(ProfileConfig::DEFAULT_AGE)
}

impl UserProfile {
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self {
            name: prefs.get_string(KEY_NAME, DEFAULT_NAME),
            age: parse_age(&prefs.get_string(KEY_AGE, DEFAULT_AGE_TEXT)),
            gender_is_male: prefs.get_bool(KEY_IS_MALE, true),
            onboarding_complete: prefs.get_bool(KEY_ONBOARDING_COMPLETE, false),
        }
    }

    /// Model inputs for this profile under the configured constants.
    pub fn profile_config(&self, config: &UserConfig) -> ProfileConfig {
        ProfileConfig {
            age: self.age,
            gender_is_male: self.gender_is_male,
            behavior_class: config.behavior_class,
            platform_is_alternate: config.platform_is_alternate,
        }
    }
}

/// Persist onboarding answers and mark onboarding complete.
pub fn complete_onboarding(
    prefs: &mut Preferences,
    name: &str,
    age_text: &str,
    is_male: bool,
) -> Result<UserProfile, PreferencesError> {
    prefs.set_string(KEY_NAME, name.trim());
    prefs.set_string(KEY_AGE, age_text.trim());
    prefs.set_bool(KEY_IS_MALE, is_male);
    prefs.set_bool(KEY_ONBOARDING_COMPLETE, true);
    prefs.save()?;
    Ok(UserProfile::from_preferences(prefs))
}

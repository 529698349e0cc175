//! Onboarding form state.

use crate::data::UserProfile;

use super::types::FormField;

const MAX_NAME_LEN: usize = 40;
const MAX_AGE_DIGITS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingForm {
    pub name: String,
    pub age: String,
    pub is_male: bool,
    pub focus: FormField,
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            is_male: true,
            focus: FormField::Name,
        }
    }
}

impl OnboardingForm {
    /// Form prefilled from earlier answers. Default values stay blank.
    pub fn from_profile(profile: &UserProfile) -> Self {
        if !profile.onboarding_complete {
            return Self {
                is_male: profile.gender_is_male,
                ..Self::default()
            };
        }
        Self {
            name: profile.name.clone(),
            age: profile.age.to_string(),
            is_male: profile.gender_is_male,
            focus: FormField::Name,
        }
    }

    /// Typed character goes to the focused text field. Age takes digits only.
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            FormField::Name if !c.is_control() && self.name.chars().count() < MAX_NAME_LEN => {
                self.name.push(c)
            }
            FormField::Age if c.is_ascii_digit() && self.age.len() < MAX_AGE_DIGITS => {
                self.age.push(c)
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Name => {
                self.name.pop();
            }
            FormField::Age => {
                self.age.pop();
            }
            _ => {}
        }
    }

    pub fn toggle_gender(&mut self) {
        self.is_male = !self.is_male;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// "Get Started" needs usage access, a name and an age.
    pub fn can_submit(&self, has_access: bool) -> bool {
        has_access && !self.name.trim().is_empty() && !self.age.is_empty()
    }
}

//! Daily drain prediction.

use serde::{Deserialize, Serialize};

use crate::coefficients::DrainCoefficients;
use crate::types::{ProfileConfig, UsageSnapshot};

/// The eight model inputs, already converted to numbers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DrainFeatures {
    pub app_usage_minutes: f64,
    pub screen_time_hours: f64,
    pub installed_app_count: f64,
    pub data_usage_mb: f64,
    pub age: f64,
    pub behavior_class: f64,
    /// 1.0 for male, 0.0 otherwise.
    pub gender_is_male: f64,
    /// 1.0 for the alternate platform, 0.0 otherwise.
    pub platform_is_alternate: f64,
}

impl DrainFeatures {
    pub fn from_inputs(usage: &UsageSnapshot, profile: &ProfileConfig) -> Self {
        Self {
            app_usage_minutes: usage.app_usage_minutes,
            screen_time_hours: usage.screen_time_hours,
            installed_app_count: usage.installed_app_count,
            data_usage_mb: usage.data_usage_mb,
            age: profile.age,
            behavior_class: profile.behavior_class,
            gender_is_male: flag(profile.gender_is_male),
            platform_is_alternate: flag(profile.platform_is_alternate),
        }
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Linear drain model over a coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrainModel {
    coefficients: DrainCoefficients,
}

impl DrainModel {
    pub const fn new(coefficients: DrainCoefficients) -> Self {
        Self { coefficients }
    }

    /// Predicted drain in mAh/day. Inputs are not validated.
    pub fn predict(&self, features: &DrainFeatures) -> f64 {
        let c = &self.coefficients;
        c.intercept
            + (c.app_usage * features.app_usage_minutes)
            + (c.screen_time * features.screen_time_hours)
            + (c.num_apps * features.installed_app_count)
            + (c.data_usage * features.data_usage_mb)
            + (c.age * features.age)
            + (c.behavior_class * features.behavior_class)
            + (c.gender_male * features.gender_is_male)
            + (c.platform_alternate * features.platform_is_alternate)
    }

    pub fn predict_for(&self, usage: &UsageSnapshot, profile: &ProfileConfig) -> f64 {
        self.predict(&DrainFeatures::from_inputs(usage, profile))
    }
}

/// Evaluate the default model on scalar inputs.
#[allow(clippy::too_many_arguments)]
pub fn estimate_daily_drain_mah(
    app_usage_minutes: f64,
    screen_time_hours: f64,
    installed_app_count: f64,
    data_usage_mb: f64,
    age: f64,
    behavior_class: f64,
    gender_is_male: f64,
    platform_is_alternate: f64,
) -> f64 {
    DrainModel::default().predict(&DrainFeatures {
        app_usage_minutes,
        screen_time_hours,
        installed_app_count,
        data_usage_mb,
        age,
        behavior_class,
        gender_is_male,
        platform_is_alternate,
    })
}

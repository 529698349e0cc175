//! Regression coefficients for the daily drain model.

use serde::{Deserialize, Serialize};

/// Weights of the linear drain model, in mAh/day per unit of each feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrainCoefficients {
    pub intercept: f64,
    pub app_usage: f64,
    pub screen_time: f64,
    pub num_apps: f64,
    pub data_usage: f64,
    pub age: f64,
    pub behavior_class: f64,
    pub gender_male: f64,
    pub platform_alternate: f64,
}

impl DrainCoefficients {
    /// The pre-trained table shipped with drainwatch.
    pub const DEFAULT: DrainCoefficients = DrainCoefficients {
        intercept: -112.1245825400506,
        app_usage: 0.4728849997647,
        screen_time: 13.911041935832795,
        num_apps: 1.353342790122157,
        data_usage: 0.02938806991774966,
        age: -0.21161813843346342,
        behavior_class: 471.19718393690164,
        gender_male: 3.586155014525511,
        platform_alternate: 7.853044095674283,
    };
}

impl Default for DrainCoefficients {
    fn default() -> Self {
        Self::DEFAULT
    }
}

//! Remaining-time and time-to-full estimates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coefficients::DrainCoefficients;

/// Battery capacity assumed when the device does not report one.
pub const DEFAULT_CAPACITY_MAH: f64 = 4000.0;

/// Hours to charge from empty to full in the linear charging model.
pub const DEFAULT_FULL_CHARGE_HOURS: f64 = 2.0;

/// Remaining times at or above this are shown as unknown.
pub const DEFAULT_DISPLAY_CLAMP_HOURS: f64 = 100.0;

const UNKNOWN_LABEL: &str = "--h --m";
const FULL_LABEL: &str = "Full";

/// Constants used to turn a drain prediction into a displayed time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimatorSettings {
    pub capacity_mah: f64,
    pub full_charge_hours: f64,
    pub display_clamp_hours: f64,
    pub coefficients: DrainCoefficients,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            capacity_mah: DEFAULT_CAPACITY_MAH,
            full_charge_hours: DEFAULT_FULL_CHARGE_HOURS,
            display_clamp_hours: DEFAULT_DISPLAY_CLAMP_HOURS,
            coefficients: DrainCoefficients::DEFAULT,
        }
    }
}

/// Hours until empty at the predicted drain rate.
///
/// Returns 0.0 when the drain rate is zero or negative.
pub fn hours_remaining(daily_drain_mah: f64, battery_fraction: f32, capacity_mah: f64) -> f64 {
    let drain_per_hour = daily_drain_mah / 24.0;
    if drain_per_hour > 0.0 {
        (capacity_mah * battery_fraction as f64) / drain_per_hour
    } else {
        0.0
    }
}

/// Hours until full, assuming a constant charge rate.
pub fn hours_to_full(battery_fraction: f32, full_charge_hours: f64) -> f64 {
    full_charge_hours * (1.0 - battery_fraction as f64)
}

/// A time estimate ready for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "hours", rename_all = "snake_case")]
pub enum RemainingTime {
    /// Hours left on battery.
    Remaining(f64),
    /// Hours until the battery is full.
    UntilFull(f64),
    Full,
    Unknown,
}

impl RemainingTime {
    pub fn discharging(hours: f64, clamp_hours: f64) -> Self {
        if hours > 0.0 && hours < clamp_hours {
            RemainingTime::Remaining(hours)
        } else {
            RemainingTime::Unknown
        }
    }

    pub fn charging(hours: f64) -> Self {
        if hours > 0.0 {
            RemainingTime::UntilFull(hours)
        } else {
            RemainingTime::Full
        }
    }

    pub fn hours(&self) -> Option<f64> {
        match self {
            RemainingTime::Remaining(h) | RemainingTime::UntilFull(h) => Some(*h),
            RemainingTime::Full => Some(0.0),
            RemainingTime::Unknown => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            RemainingTime::Remaining(h) | RemainingTime::UntilFull(h) => hours_minutes(*h),
            RemainingTime::Full => FULL_LABEL.to_string(),
            RemainingTime::Unknown => UNKNOWN_LABEL.to_string(),
        }
    }
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn hours_minutes(hours: f64) -> String {
    let whole = hours.trunc();
    let minutes = ((hours - whole) * 60.0) as u64;
    format!("{}h {}m", whole as u64, minutes)
}

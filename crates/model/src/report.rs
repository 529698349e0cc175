//! One refresh worth of dashboard data.

use serde::{Deserialize, Serialize};

use crate::drain::DrainModel;
use crate::format;
use crate::remaining::{hours_remaining, hours_to_full, EstimatorSettings, RemainingTime};
use crate::types::{BatterySnapshot, ProfileConfig, TopAppEntry, UsageSnapshot};

/// Result of the drain/charge branch for a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DrainEstimate {
    Discharging {
        predicted_daily_drain_mah: f64,
        hours_remaining: f64,
        remaining: RemainingTime,
    },
    Charging {
        hours_to_full: f64,
        remaining: RemainingTime,
    },
}

impl DrainEstimate {
    pub fn compute(
        usage: &UsageSnapshot,
        battery: &BatterySnapshot,
        profile: &ProfileConfig,
        settings: &EstimatorSettings,
    ) -> Self {
        if battery.is_charging {
            let hours = hours_to_full(battery.percentage, settings.full_charge_hours);
            return DrainEstimate::Charging {
                hours_to_full: hours,
                remaining: RemainingTime::charging(hours),
            };
        }

        let drain = DrainModel::new(settings.coefficients).predict_for(usage, profile);
        let hours = hours_remaining(drain, battery.percentage, settings.capacity_mah);
        DrainEstimate::Discharging {
            predicted_daily_drain_mah: drain,
            hours_remaining: hours,
            remaining: RemainingTime::discharging(hours, settings.display_clamp_hours),
        }
    }

    pub fn remaining(&self) -> RemainingTime {
        match self {
            DrainEstimate::Discharging { remaining, .. } | DrainEstimate::Charging { remaining, .. } => {
                *remaining
            }
        }
    }

    pub fn predicted_drain(&self) -> Option<f64> {
        match self {
            DrainEstimate::Discharging {
                predicted_daily_drain_mah,
                ..
            } => Some(*predicted_daily_drain_mah),
            DrainEstimate::Charging { .. } => None,
        }
    }

    pub fn hero_label(&self) -> &'static str {
        match self {
            DrainEstimate::Discharging { .. } => format::REMAINING_LABEL,
            DrainEstimate::Charging { .. } => format::UNTIL_FULL_LABEL,
        }
    }

    pub fn drain_label(&self) -> String {
        match self {
            DrainEstimate::Discharging {
                predicted_daily_drain_mah,
                ..
            } => format::predicted_drain(*predicted_daily_drain_mah),
            DrainEstimate::Charging { .. } => format::CHARGING_LABEL.to_string(),
        }
    }
}

/// Usage, battery and estimate computed from the same refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrainReport {
    pub usage: UsageSnapshot,
    pub battery: BatterySnapshot,
    pub estimate: DrainEstimate,
    pub top_apps: Vec<TopAppEntry>,
    pub usage_access: bool,
}

impl DrainReport {
    pub fn build(
        usage: UsageSnapshot,
        battery: BatterySnapshot,
        profile: &ProfileConfig,
        settings: &EstimatorSettings,
        top_apps: Vec<TopAppEntry>,
        usage_access: bool,
    ) -> Self {
        let estimate = DrainEstimate::compute(&usage, &battery, profile, settings);
        Self {
            usage,
            battery,
            estimate,
            top_apps,
            usage_access,
        }
    }
}

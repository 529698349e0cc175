//! Readings, snapshots and profile inputs shared by the model and its sources.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Battery fraction used when the battery source cannot report a level.
pub const DEFAULT_BATTERY_FRACTION: f32 = 0.5;

const MS_PER_MINUTE: f64 = 1000.0 * 60.0;
const MS_PER_HOUR: f64 = MS_PER_MINUTE * 60.0;
const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One row returned by a usage statistics query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub package_name: String,
    pub total_foreground_ms: u64,
}

impl UsageRecord {
    pub fn new(package_name: impl Into<String>, total_foreground_ms: u64) -> Self {
        Self {
            package_name: package_name.into(),
            total_foreground_ms,
        }
    }
}

/// The four usage signals fed to the drain estimator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UsageSnapshot {
    pub app_usage_minutes: f64,
    pub screen_time_hours: f64,
    pub installed_app_count: f64,
    pub data_usage_mb: f64,
}

impl UsageSnapshot {
    /// Derive a snapshot from raw counters.
    ///
    /// Screen time is the same foreground total expressed in hours.
    pub fn from_counters(records: &[UsageRecord], installed_apps: usize, total_bytes: u64) -> Self {
        let total_ms: u64 = records.iter().map(|r| r.total_foreground_ms).sum();
        Self {
            app_usage_minutes: total_ms as f64 / MS_PER_MINUTE,
            screen_time_hours: total_ms as f64 / MS_PER_HOUR,
            installed_app_count: installed_apps as f64,
            data_usage_mb: total_bytes as f64 / BYTES_PER_MB,
        }
    }
}

/// Charging status as reported by the battery source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Charging,
    Discharging,
    Full,
    NotCharging,
    #[default]
    Unknown,
}

impl ChargeStatus {
    /// Parse a `power_supply` status string (e.g. "Not charging").
    pub fn from_sysfs(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "charging" => ChargeStatus::Charging,
            "discharging" => ChargeStatus::Discharging,
            "full" => ChargeStatus::Full,
            "not charging" => ChargeStatus::NotCharging,
            _ => ChargeStatus::Unknown,
        }
    }

    /// A full battery on external power counts as charging.
    pub fn is_charging(&self) -> bool {
        matches!(self, ChargeStatus::Charging | ChargeStatus::Full)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChargeStatus::Charging => "Charging",
            ChargeStatus::Discharging => "On Battery",
            ChargeStatus::Full => "Full",
            ChargeStatus::NotCharging => "Not Charging",
            ChargeStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Battery health as reported by the power supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatteryHealth {
    Good,
    Overheat,
    Dead,
    OverVoltage,
    Failed,
    Cold,
    #[default]
    Unknown,
}

impl BatteryHealth {
    /// Parse a `power_supply` health string.
    pub fn from_sysfs(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "good" => BatteryHealth::Good,
            "overheat" | "hot" => BatteryHealth::Overheat,
            "dead" => BatteryHealth::Dead,
            "over voltage" => BatteryHealth::OverVoltage,
            "unspecified failure" => BatteryHealth::Failed,
            "cold" => BatteryHealth::Cold,
            _ => BatteryHealth::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BatteryHealth::Good => "Good",
            BatteryHealth::Overheat => "Overheat",
            BatteryHealth::Dead => "Dead",
            BatteryHealth::OverVoltage => "Over Volt",
            BatteryHealth::Failed => "Failed",
            BatteryHealth::Cold => "Cold",
            BatteryHealth::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BatteryHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A point-in-time battery reading before any defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawBatteryStatus {
    pub status: ChargeStatus,
    pub level: Option<i32>,
    pub scale: Option<i32>,
    pub temperature_tenths_c: Option<i32>,
    pub voltage_mv: Option<i32>,
    pub health: BatteryHealth,
}

/// Battery state used for one refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatterySnapshot {
    /// Charge as a fraction in `[0, 1]`.
    pub percentage: f32,
    pub is_charging: bool,
    pub status: ChargeStatus,
    pub temperature_tenths_c: i32,
    pub voltage_mv: i32,
    pub health: BatteryHealth,
}

impl Default for BatterySnapshot {
    fn default() -> Self {
        Self::from_raw(&RawBatteryStatus::default())
    }
}

impl BatterySnapshot {
    pub fn from_raw(raw: &RawBatteryStatus) -> Self {
        let percentage = match (raw.level, raw.scale) {
            (Some(level), Some(scale)) if level >= 0 && scale > 0 => level as f32 / scale as f32,
            _ => DEFAULT_BATTERY_FRACTION,
        };

        Self {
            percentage,
            is_charging: raw.status.is_charging(),
            status: raw.status,
            temperature_tenths_c: raw.temperature_tenths_c.unwrap_or(0),
            voltage_mv: raw.voltage_mv.unwrap_or(0),
            health: raw.health,
        }
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_tenths_c as f64 / 10.0
    }
}

/// Display metadata for an installed application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMetadata {
    pub display_name: String,
    /// Icon name or path, as declared by the application.
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopAppEntry {
    pub package_name: String,
    pub display_name: String,
    pub icon: Option<String>,
    pub foreground_minutes: u64,
}

/// Profile inputs to the drain model, passed explicitly at call time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub age: f64,
    pub gender_is_male: bool,
    /// Pinned to 3.0 ("moderate") unless configured otherwise.
    pub behavior_class: f64,
    pub platform_is_alternate: bool,
}

impl ProfileConfig {
    pub const DEFAULT_AGE: f64 = 25.0;
    pub const DEFAULT_BEHAVIOR_CLASS: f64 = 3.0;
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            age: Self::DEFAULT_AGE,
            gender_is_male: true,
            behavior_class: Self::DEFAULT_BEHAVIOR_CLASS,
            platform_is_alternate: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_snapshot_from_counters() {
        let records = vec![
            UsageRecord::new("a", 30 * 60 * 1000),
            UsageRecord::new("b", 90 * 60 * 1000),
        ];
        let usage = UsageSnapshot::from_counters(&records, 42, 3 * 1024 * 1024);

        assert_eq!(usage.app_usage_minutes, 120.0);
        assert_eq!(usage.screen_time_hours, 2.0);
        assert_eq!(usage.installed_app_count, 42.0);
        assert_eq!(usage.data_usage_mb, 3.0);
    }

    #[test]
    fn test_empty_usage_is_zero() {
        let usage = UsageSnapshot::from_counters(&[], 0, 0);
        assert_eq!(usage, UsageSnapshot::default());
    }

    #[test]
    fn test_battery_defaults_without_level() {
        let snapshot = BatterySnapshot::from_raw(&RawBatteryStatus {
            level: Some(80),
            scale: None,
            ..Default::default()
        });
        assert_eq!(snapshot.percentage, DEFAULT_BATTERY_FRACTION);

        let snapshot = BatterySnapshot::from_raw(&RawBatteryStatus {
            level: Some(80),
            scale: Some(0),
            ..Default::default()
        });
        assert_eq!(snapshot.percentage, DEFAULT_BATTERY_FRACTION);
    }

    #[test]
    fn test_battery_fraction_from_level_and_scale() {
        let snapshot = BatterySnapshot::from_raw(&RawBatteryStatus {
            status: ChargeStatus::Discharging,
            level: Some(45),
            scale: Some(100),
            temperature_tenths_c: Some(312),
            voltage_mv: Some(3987),
            health: BatteryHealth::Good,
        });

        assert_eq!(snapshot.percentage, 0.45);
        assert!(!snapshot.is_charging);
        assert_eq!(snapshot.temperature_c(), 31.2);
        assert_eq!(snapshot.voltage_mv, 3987);
    }

    #[test]
    fn test_full_counts_as_charging() {
        assert!(ChargeStatus::Charging.is_charging());
        assert!(ChargeStatus::Full.is_charging());
        assert!(!ChargeStatus::NotCharging.is_charging());
        assert!(!ChargeStatus::Discharging.is_charging());
        assert!(!ChargeStatus::Unknown.is_charging());
    }

    #[test]
    fn test_status_from_sysfs() {
        assert_eq!(ChargeStatus::from_sysfs("Charging\n"), ChargeStatus::Charging);
        assert_eq!(
            ChargeStatus::from_sysfs("Not charging"),
            ChargeStatus::NotCharging
        );
        assert_eq!(ChargeStatus::from_sysfs("bogus"), ChargeStatus::Unknown);
    }

    #[test]
    fn test_health_labels() {
        assert_eq!(BatteryHealth::from_sysfs("Over voltage").label(), "Over Volt");
        assert_eq!(
            BatteryHealth::from_sysfs("Unspecified failure").label(),
            "Failed"
        );
        assert_eq!(BatteryHealth::from_sysfs("Good\n"), BatteryHealth::Good);
        assert_eq!(BatteryHealth::from_sysfs("Hot"), BatteryHealth::Overheat);
        assert_eq!(BatteryHealth::from_sysfs("bogus"), BatteryHealth::Unknown);
    }
}

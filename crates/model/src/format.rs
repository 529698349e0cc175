//! Display strings for dashboard values.

use crate::types::BatterySnapshot;

pub const REMAINING_LABEL: &str = "Estimated Remaining Time";
pub const UNTIL_FULL_LABEL: &str = "Time Until Full";
pub const CHARGING_LABEL: &str = "Charging ⚡";

pub fn greeting(name: &str) -> String {
    format!("Hello, {}", name)
}

/// Battery fraction as a truncated percentage, e.g. "87%".
pub fn battery_percent(fraction: f32) -> String {
    format!("{}%", (fraction * 100.0) as i32)
}

/// Total app usage: hours above one hour, minutes otherwise.
pub fn app_usage(minutes: f64) -> String {
    if minutes > 60.0 {
        format!("{:.1} h", minutes / 60.0)
    } else {
        format!("{:.0} m", minutes)
    }
}

pub fn screen_time(hours: f64) -> String {
    format!("{:.1} h", hours)
}

pub fn installed_apps(count: f64) -> String {
    format!("{:.0}", count)
}

pub fn data_usage(mb: f64) -> String {
    if mb > 1024.0 {
        format!("{:.1} GB", mb / 1024.0)
    } else {
        format!("{:.0} MB", mb)
    }
}

/// Foreground time of a single app, e.g. "1h 5m" or "42m".
pub fn app_time(minutes: u64) -> String {
    if minutes > 60 {
        format!("{}h {}m", minutes / 60, minutes % 60)
    } else {
        format!("{}m", minutes)
    }
}

pub fn predicted_drain(mah_per_day: f64) -> String {
    format!("Predicted Drain: {:.0} mAh/day", mah_per_day)
}

pub fn temperature(battery: &BatterySnapshot) -> String {
    format!("{} °C", battery.temperature_c())
}

pub fn voltage(battery: &BatterySnapshot) -> String {
    format!("{} mV", battery.voltage_mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawBatteryStatus;

    #[test]
    fn test_app_usage_units() {
        assert_eq!(app_usage(45.4), "45 m");
        assert_eq!(app_usage(60.0), "60 m");
        assert_eq!(app_usage(90.0), "1.5 h");
    }

    #[test]
    fn test_data_usage_units() {
        assert_eq!(data_usage(512.0), "512 MB");
        assert_eq!(data_usage(1024.0), "1024 MB");
        assert_eq!(data_usage(2048.0), "2.0 GB");
    }

    #[test]
    fn test_app_time() {
        assert_eq!(app_time(42), "42m");
        assert_eq!(app_time(60), "60m");
        assert_eq!(app_time(125), "2h 5m");
    }

    #[test]
    fn test_battery_readouts() {
        let battery = BatterySnapshot::from_raw(&RawBatteryStatus {
            level: Some(87),
            scale: Some(100),
            temperature_tenths_c: Some(305),
            voltage_mv: Some(4012),
            ..Default::default()
        });
        assert_eq!(battery_percent(battery.percentage), "87%");
        assert_eq!(temperature(&battery), "30.5 °C");
        assert_eq!(voltage(&battery), "4012 mV");
    }

    #[test]
    fn test_labels() {
        assert_eq!(greeting("Ada"), "Hello, Ada");
        assert_eq!(predicted_drain(1437.26), "Predicted Drain: 1437 mAh/day");
        assert_eq!(installed_apps(50.0), "50");
        assert_eq!(screen_time(2.24), "2.2 h");
    }
}

use std::time::Duration;

use color_eyre::eyre::Result;
use drainwatch_model::{DrainReport, ProfileConfig};
use serde_json::{json, Value};

use crate::config::{preferences_path, UserConfig};
use crate::data::{Preferences, StatsCollector, UserProfile};

fn sample(name: &str, inputs: &ProfileConfig, report: &DrainReport) -> Value {
    let remaining = report.estimate.remaining();
    json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "profile": {
            "name": name,
            "age": inputs.age,
            "is_male": inputs.gender_is_male,
            "behavior_class": inputs.behavior_class,
        },
        "remaining_label": remaining.label(),
        "remaining_hours": remaining.hours(),
        "hero_label": report.estimate.hero_label(),
        "report": report,
    })
}

pub fn run(samples: u32, interval: u64, compact: bool) -> Result<()> {
    let config = UserConfig::load();
    let profile = UserProfile::from_preferences(&Preferences::load(preferences_path())?);
    let model_inputs = profile.profile_config(&config);
    let settings = config.estimator_settings();

    let mut collector = StatsCollector::new(&config);
    if !collector.has_usage_access() {
        eprintln!("{}", collector.grant_instructions());
    }

    let mut counter = 0u32;

    loop {
        let report = collector.refresh(&model_inputs, &settings);
        let doc = sample(&profile.name, &model_inputs, &report);

        if compact {
            println!("{}", serde_json::to_string(&doc)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }

        counter += 1;
        if samples > 0 && counter >= samples {
            break;
        }

        std::thread::sleep(Duration::from_millis(interval));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drainwatch_model::{
        BatterySnapshot, ChargeStatus, EstimatorSettings, RawBatteryStatus, UsageSnapshot,
    };

    fn report(status: ChargeStatus, level: i32, profile: &ProfileConfig) -> DrainReport {
        let battery = BatterySnapshot::from_raw(&RawBatteryStatus {
            status,
            level: Some(level),
            scale: Some(100),
            ..Default::default()
        });
        let usage = UsageSnapshot {
            app_usage_minutes: 60.0,
            screen_time_hours: 1.0,
            installed_app_count: 50.0,
            data_usage_mb: 500.0,
        };
        DrainReport::build(
            usage,
            battery,
            profile,
            &EstimatorSettings::default(),
            Vec::new(),
            true,
        )
    }

    #[test]
    fn test_sample_carries_remaining_hours() {
        let report = report(ChargeStatus::Charging, 25, &ProfileConfig::default());
        let doc = sample("Ada", &ProfileConfig::default(), &report);

        assert_eq!(doc["remaining_label"], "1h 30m");
        assert_eq!(doc["remaining_hours"], 1.5);
        assert_eq!(doc["hero_label"], "Time Until Full");
        assert_eq!(doc["profile"]["name"], "Ada");
    }

    #[test]
    fn test_unknown_remaining_is_null() {
        // a light-use profile drains slowly enough to pass the display clamp
        let light = ProfileConfig {
            behavior_class: 1.0,
            ..Default::default()
        };
        let report = report(ChargeStatus::Discharging, 80, &light);
        let doc = sample("Ada", &light, &report);

        assert_eq!(doc["remaining_label"], "--h --m");
        assert!(doc["remaining_hours"].is_null());
    }
}

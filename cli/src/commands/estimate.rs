use color_eyre::eyre::Result;
use drainwatch_model::{
    format, BatterySnapshot, ChargeStatus, DrainEstimate, EstimatorSettings, ProfileConfig,
    RawBatteryStatus, UsageSnapshot,
};
use serde_json::json;

use crate::cli::EstimateArgs;
use crate::config::{preferences_path, UserConfig};
use crate::data::{Preferences, UserProfile};

fn inputs(args: &EstimateArgs, base: ProfileConfig) -> (UsageSnapshot, BatterySnapshot, ProfileConfig) {
    let usage = UsageSnapshot {
        app_usage_minutes: args.app_usage,
        screen_time_hours: args.screen_time,
        installed_app_count: args.num_apps,
        data_usage_mb: args.data_usage,
    };

    let battery = BatterySnapshot::from_raw(&RawBatteryStatus {
        status: if args.charging {
            ChargeStatus::Charging
        } else {
            ChargeStatus::Discharging
        },
        level: Some(args.battery.round() as i32),
        scale: Some(100),
        ..Default::default()
    });

    let profile = ProfileConfig {
        age: args.age.unwrap_or(base.age),
        gender_is_male: args.gender.map(|g| g.is_male()).unwrap_or(base.gender_is_male),
        ..base
    };

    (usage, battery, profile)
}

fn estimate(args: &EstimateArgs, base: ProfileConfig, settings: &EstimatorSettings) -> DrainEstimate {
    let (usage, battery, profile) = inputs(args, base);
    DrainEstimate::compute(&usage, &battery, &profile, settings)
}

pub fn run(args: EstimateArgs) -> Result<()> {
    let config = UserConfig::load();
    let saved = UserProfile::from_preferences(&Preferences::load(preferences_path())?);
    let base = saved.profile_config(&config);
    let settings = config.estimator_settings();

    let result = estimate(&args, base, &settings);
    let remaining = result.remaining();

    if args.json {
        let doc = json!({
            "estimate": result,
            "remaining_label": remaining.label(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("{}", result.drain_label());
    println!("{}: {}", result.hero_label(), remaining);
    if let Some(drain) = result.predicted_drain() {
        println!(
            "Battery: {} of {:.0} mAh, draining {:.1} mAh/h",
            format::battery_percent(args.battery / 100.0),
            settings.capacity_mah,
            drain / 24.0
        );
    }

    Ok(())
}

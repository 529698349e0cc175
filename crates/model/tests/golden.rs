use drainwatch_model::*;
use pretty_assertions::assert_eq;

const GOLDEN_DRAIN_MAH: f64 = 1437.260938454706;

fn golden_usage() -> UsageSnapshot {
    UsageSnapshot {
        app_usage_minutes: 60.0,
        screen_time_hours: 2.0,
        installed_app_count: 50.0,
        data_usage_mb: 500.0,
    }
}

fn golden_profile() -> ProfileConfig {
    ProfileConfig {
        age: 30.0,
        gender_is_male: true,
        behavior_class: 3.0,
        platform_is_alternate: false,
    }
}

#[test]
fn golden_drain_scalar_inputs() {
    let drain = estimate_daily_drain_mah(60.0, 2.0, 50.0, 500.0, 30.0, 3.0, 1.0, 0.0);
    assert!(
        (drain - GOLDEN_DRAIN_MAH).abs() < 1e-9,
        "drain was {}",
        drain
    );
}

#[test]
fn golden_drain_through_model() {
    let drain = DrainModel::default().predict_for(&golden_usage(), &golden_profile());
    assert!((drain - GOLDEN_DRAIN_MAH).abs() < 1e-9);
}

#[test]
fn golden_report_serializes() {
    let battery = BatterySnapshot::from_raw(&RawBatteryStatus {
        status: ChargeStatus::Discharging,
        level: Some(100),
        scale: Some(100),
        temperature_tenths_c: Some(290),
        voltage_mv: Some(4200),
        health: BatteryHealth::Good,
    });
    let top_apps = vec![TopAppEntry {
        package_name: "firefox".to_string(),
        display_name: "Firefox".to_string(),
        icon: Some("firefox".to_string()),
        foreground_minutes: 75,
    }];

    let report = DrainReport::build(
        golden_usage(),
        battery,
        &golden_profile(),
        &EstimatorSettings::default(),
        top_apps,
        true,
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["estimate"]["mode"], "discharging");
    assert_eq!(json["battery"]["health"], "good");
    assert_eq!(json["battery"]["status"], "discharging");
    assert_eq!(json["top_apps"][0]["display_name"], "Firefox");
    assert_eq!(report.estimate.drain_label(), "Predicted Drain: 1437 mAh/day");

    // 4000 mAh / (1437.26 / 24) = ~66.8h
    assert_eq!(report.estimate.remaining().label(), "66h 47m");
}

#[test]
fn remaining_time_on_clamp_boundary() {
    let settings = EstimatorSettings::default();
    let hours = hours_remaining(960.0, 1.0, settings.capacity_mah);
    assert_eq!(hours, 100.0);
    assert_eq!(
        RemainingTime::discharging(hours, settings.display_clamp_hours).label(),
        "--h --m"
    );
    assert_eq!(
        RemainingTime::discharging(99.99, settings.display_clamp_hours).label(),
        "99h 59m"
    );
    assert_eq!(
        RemainingTime::discharging(100.01, settings.display_clamp_hours).label(),
        "--h --m"
    );
}

#[test]
fn top_apps_end_to_end() {
    let records = vec![
        UsageRecord::new("editor", 20 * 60_000),
        UsageRecord::new(SYSTEM_UI_PACKAGE, 500 * 60_000),
        UsageRecord::new("drainwatch", 400 * 60_000),
        UsageRecord::new("editor", 50 * 60_000),
        UsageRecord::new("terminal", 65 * 60_000),
        UsageRecord::new("chat", 5 * 60_000),
        UsageRecord::new("player", 60_000),
    ];

    let ranked = rank_usage(&records, &["drainwatch", SYSTEM_UI_PACKAGE]);
    let top = select_top_apps(&ranked, 3, |pkg| {
        Some(AppMetadata {
            display_name: pkg.to_string(),
            icon: None,
        })
    });

    let summary: Vec<(String, String)> = top
        .iter()
        .map(|t| (t.package_name.clone(), format::app_time(t.foreground_minutes)))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("editor".to_string(), "1h 10m".to_string()),
            ("terminal".to_string(), "1h 5m".to_string()),
            ("chat".to_string(), "5m".to_string()),
        ]
    );
}

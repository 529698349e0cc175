use std::time::Duration;

use bytesize::ByteSize;
use color_eyre::eyre::Result;
use drainwatch_model::{rank_usage, BatterySnapshot};
use drainwatch_platform::{
    current_package_name, default_battery_provider, default_usage_access, AppRegistry,
    BatteryProvider, DesktopEntryRegistry, NetworkCounters, ProcessUsageSource, StarshipBattery,
    SysinfoNetworks, UsageStatsSource, UsageWindow,
};
use sysinfo::System;

use crate::config::{self, config_path, preferences_path, UserConfig};
use crate::logging;

fn section(title: &str) {
    println!("\n--- {} ---", title);
}

fn format_ms(ms: u64) -> String {
    // drop sub-second noise
    humantime::format_duration(Duration::from_secs(ms / 1000)).to_string()
}

pub fn run() -> Result<()> {
    let config = UserConfig::load();

    println!("drainwatch debug information");
    println!("{}", "=".repeat(60));

    section("System Info");
    println!(
        "Host: {}",
        System::host_name().unwrap_or_else(|| "Unknown".to_string())
    );
    println!(
        "OS: {}",
        System::long_os_version().unwrap_or_else(|| "Unknown".to_string())
    );
    println!("Package name: {}", current_package_name());

    section("Battery Info");
    println!("starship-battery sees a battery: {}", StarshipBattery::is_available());
    #[cfg(target_os = "linux")]
    {
        use drainwatch_platform::linux::LinuxBattery;
        match LinuxBattery::new() {
            Ok(battery) => match battery.battery_path() {
                Some(path) => println!("sysfs battery: {}", path.display()),
                None => println!("sysfs battery: none"),
            },
            Err(e) => println!("Battery manager failed: {}", e),
        }
    }
    match default_battery_provider().and_then(|mut provider| {
        provider.refresh()?;
        Ok(*provider.status())
    }) {
        Ok(raw) => {
            let snapshot = BatterySnapshot::from_raw(&raw);
            println!("Raw: {:?}", raw);
            println!("Charge: {:.1}%", snapshot.percentage * 100.0);
            println!("State: {}", snapshot.status);
            println!("Charging: {}", snapshot.is_charging);
            println!("Temperature: {:.1} °C", snapshot.temperature_c());
            println!("Voltage: {} mV", snapshot.voltage_mv);
            println!("Health: {}", snapshot.health);
        }
        Err(e) => println!("Battery read failed: {}", e),
    }

    section("Usage Stats");
    let access = default_usage_access();
    println!("Usage access: {}", access.has_usage_access());
    if !access.has_usage_access() {
        println!("{}", access.grant_instructions());
    }
    let window = UsageWindow::last_day();
    println!(
        "Window: {} to {} ({})",
        window.start.to_rfc3339(),
        window.end.to_rfc3339(),
        humantime::format_duration(Duration::from_secs(
            (window.end - window.start).num_seconds().max(0) as u64
        ))
    );
    let records = ProcessUsageSource::new().and_then(|mut source| source.query(&window));
    match records {
        Ok(records) => {
            let total: u64 = records.iter().map(|r| r.total_foreground_ms).sum();
            println!("Records: {}", records.len());
            println!("Total foreground: {}", format_ms(total));
            let excluded = config.effective_excluded_packages(&current_package_name());
            let excluded: Vec<&str> = excluded.iter().map(String::as_str).collect();
            for usage in rank_usage(&records, &excluded).iter().take(10) {
                println!(
                    "  {:<32} {}",
                    usage.package_name,
                    format_ms(usage.foreground_ms)
                );
            }
        }
        Err(e) => println!("Usage query failed: {}", e),
    }

    section("Network");
    match SysinfoNetworks::new().and_then(|mut networks| networks.total_bytes()) {
        Ok(bytes) => println!(
            "Since boot: {} ({} bytes)",
            ByteSize::b(bytes).display().iec(),
            bytes
        ),
        Err(e) => println!("Network counters failed: {}", e),
    }

    section("Installed Apps");
    match DesktopEntryRegistry::new() {
        Ok(registry) => {
            println!("Installed: {}", registry.installed_count());
            for dir in registry.search_dirs().iter().filter(|d| d.exists()) {
                println!("  {}", dir.display());
            }
        }
        Err(e) => println!("App scan failed: {}", e),
    }

    section("Paths");
    println!("Config: {}", config_path().display());
    println!("Preferences: {}", preferences_path().display());
    println!("Data: {}", config::data_dir().display());
    println!("Logs: {}", logging::log_dir().display());

    section("Current Config");
    println!("{}", toml::to_string_pretty(&config)?);

    Ok(())
}

//! Gathers one refresh worth of usage and battery data.

use std::time::Instant;

use color_eyre::eyre::Result;
use drainwatch_model::{
    rank_usage, select_top_apps, BatterySnapshot, DrainReport, EstimatorSettings, ProfileConfig,
    UsageSnapshot,
};
use drainwatch_platform::{
    current_package_name, default_battery_provider, default_usage_access, AppRegistry,
    BatteryProvider, DesktopEntryRegistry, NetworkCounters, ProcessUsageSource, SysinfoNetworks,
    UsageAccess, UsageStatsSource, UsageWindow,
};
use tracing::{debug, info, warn};

use crate::config::UserConfig;

/// Platform sources the collector reads from.
///
/// A source that failed to initialize is `None` and contributes its default.
pub struct Sources {
    pub battery: Option<Box<dyn BatteryProvider>>,
    pub usage: Option<Box<dyn UsageStatsSource>>,
    pub network: Option<Box<dyn NetworkCounters>>,
    pub apps: Option<Box<dyn AppRegistry>>,
    pub access: Box<dyn UsageAccess>,
}

impl Sources {
    pub fn system() -> Self {
        Self {
            battery: init_source("battery", default_battery_provider()),
            usage: init_source(
                "usage",
                ProcessUsageSource::new().map(|s| Box::new(s) as Box<dyn UsageStatsSource>),
            ),
            network: init_source(
                "network",
                SysinfoNetworks::new().map(|s| Box::new(s) as Box<dyn NetworkCounters>),
            ),
            apps: init_source(
                "apps",
                DesktopEntryRegistry::new().map(|s| Box::new(s) as Box<dyn AppRegistry>),
            ),
            access: default_usage_access(),
        }
    }
}

fn init_source<T: ?Sized>(name: &str, source: Result<Box<T>>) -> Option<Box<T>> {
    match source {
        Ok(source) => Some(source),
        Err(e) => {
            warn!(source = name, error = %e, "Failed to initialize source");
            None
        }
    }
}

pub struct StatsCollector {
    sources: Sources,
    top_apps_count: usize,
    excluded: Vec<String>,
}

impl StatsCollector {
    pub fn new(config: &UserConfig) -> Self {
        Self::with_sources(config, Sources::system(), &current_package_name())
    }

    pub fn with_sources(config: &UserConfig, sources: Sources, own_package: &str) -> Self {
        Self {
            sources,
            top_apps_count: config.top_apps_count,
            excluded: config.effective_excluded_packages(own_package),
        }
    }

    pub fn has_usage_access(&self) -> bool {
        self.sources.access.has_usage_access()
    }

    pub fn grant_instructions(&self) -> &'static str {
        self.sources.access.grant_instructions()
    }

    /// Read every source once and build a report from that single reading.
    ///
    /// Source failures are logged and replaced by defaults; a refresh always
    /// yields a report.
    pub fn refresh(&mut self, profile: &ProfileConfig, settings: &EstimatorSettings) -> DrainReport {
        let start = Instant::now();
        let usage_access = self.has_usage_access();
        if !usage_access {
            warn!("Usage access not granted, usage statistics may be incomplete");
        }

        let window = UsageWindow::last_day();
        let records = match self.sources.usage.as_mut().map(|s| s.query(&window)) {
            Some(Ok(records)) => records,
            Some(Err(e)) => {
                warn!(error = %e, "Usage query failed");
                Vec::new()
            }
            None => Vec::new(),
        };

        let installed = match self.sources.apps.as_mut() {
            Some(apps) => {
                if let Err(e) = apps.refresh() {
                    warn!(error = %e, "Failed to rescan installed applications");
                }
                apps.installed_count()
            }
            None => 0,
        };

        let total_bytes = match self.sources.network.as_mut().map(|n| n.total_bytes()) {
            Some(Ok(bytes)) => bytes,
            Some(Err(e)) => {
                warn!(error = %e, "Failed to read network counters");
                0
            }
            None => 0,
        };

        let battery = self.read_battery();
        let usage = UsageSnapshot::from_counters(&records, installed, total_bytes);

        let excluded: Vec<&str> = self.excluded.iter().map(String::as_str).collect();
        let ranked = rank_usage(&records, &excluded);
        let apps = self.sources.apps.as_deref();
        let top_apps = select_top_apps(&ranked, self.top_apps_count, |package| {
            let meta = apps.and_then(|registry| registry.lookup(package));
            if meta.is_none() {
                debug!(package, "No metadata for package, skipping");
            }
            meta
        });

        let report = DrainReport::build(usage, battery, profile, settings, top_apps, usage_access);

        info!(
            records = records.len(),
            installed,
            total_bytes,
            battery_percent = battery.percentage * 100.0,
            charging = battery.is_charging,
            remaining = %report.estimate.remaining(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Refresh completed"
        );

        report
    }

    fn read_battery(&mut self) -> BatterySnapshot {
        let Some(provider) = self.sources.battery.as_mut() else {
            return BatterySnapshot::default();
        };

        match provider.refresh() {
            Ok(()) => BatterySnapshot::from_raw(provider.status()),
            Err(e) => {
                warn!(error = %e, "Battery read failed");
                BatterySnapshot::default()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use color_eyre::eyre::eyre;
    use drainwatch_model::{AppMetadata, ChargeStatus, RawBatteryStatus, UsageRecord};

    use super::*;

    pub struct FakeBattery {
        pub status: RawBatteryStatus,
        pub fail: bool,
    }

    impl BatteryProvider for FakeBattery {
        fn new() -> Result<Self> {
            Ok(Self {
                status: RawBatteryStatus::default(),
                fail: false,
            })
        }

        fn refresh(&mut self) -> Result<()> {
            if self.fail {
                return Err(eyre!("battery unplugged"));
            }
            Ok(())
        }

        fn status(&self) -> &RawBatteryStatus {
            &self.status
        }
    }

    pub struct FakeUsage {
        pub records: Vec<UsageRecord>,
        pub fail: bool,
    }

    impl UsageStatsSource for FakeUsage {
        fn new() -> Result<Self> {
            Ok(Self {
                records: Vec::new(),
                fail: false,
            })
        }

        fn query(&mut self, _window: &UsageWindow) -> Result<Vec<UsageRecord>> {
            if self.fail {
                return Err(eyre!("usage stats unavailable"));
            }
            Ok(self.records.clone())
        }
    }

    pub struct FakeNetwork(pub Option<u64>);

    impl NetworkCounters for FakeNetwork {
        fn new() -> Result<Self> {
            Ok(Self(Some(0)))
        }

        fn total_bytes(&mut self) -> Result<u64> {
            self.0.ok_or_else(|| eyre!("no interfaces"))
        }
    }

    pub struct FakeApps {
        pub installed: usize,
        pub known: Vec<(&'static str, &'static str)>,
    }

    impl AppRegistry for FakeApps {
        fn new() -> Result<Self> {
            Ok(Self {
                installed: 0,
                known: Vec::new(),
            })
        }

        fn refresh(&mut self) -> Result<()> {
            Ok(())
        }

        fn installed_count(&self) -> usize {
            self.installed
        }

        fn lookup(&self, package: &str) -> Option<AppMetadata> {
            self.known
                .iter()
                .find(|(id, _)| *id == package)
                .map(|(_, name)| AppMetadata {
                    display_name: name.to_string(),
                    icon: None,
                })
        }
    }

    pub struct FakeAccess(pub bool);

    impl UsageAccess for FakeAccess {
        fn has_usage_access(&self) -> bool {
            self.0
        }

        fn grant_instructions(&self) -> &'static str {
            "grant it"
        }
    }

    pub fn battery(status: ChargeStatus, level: i32) -> FakeBattery {
        FakeBattery {
            status: RawBatteryStatus {
                status,
                level: Some(level),
                scale: Some(100),
                temperature_tenths_c: Some(312),
                voltage_mv: Some(3950),
                ..Default::default()
            },
            fail: false,
        }
    }

    pub fn sources(battery: FakeBattery, records: Vec<UsageRecord>, access: bool) -> Sources {
        Sources {
            battery: Some(Box::new(battery)),
            usage: Some(Box::new(FakeUsage {
                records,
                fail: false,
            })),
            network: Some(Box::new(FakeNetwork(Some(500 * 1024 * 1024)))),
            apps: Some(Box::new(FakeApps {
                installed: 50,
                known: vec![
                    ("firefox", "Firefox"),
                    ("code", "Visual Studio Code"),
                    ("slack", "Slack"),
                    ("spotify", "Spotify"),
                    ("drainwatch", "drainwatch"),
                ],
            })),
            access: Box::new(FakeAccess(access)),
        }
    }
}

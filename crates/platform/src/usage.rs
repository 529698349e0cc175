//! Per-application usage statistics.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use color_eyre::eyre::Result;
use drainwatch_model::UsageRecord;
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};
use tracing::debug;

/// Length of the usage query window.
pub const USAGE_WINDOW_HOURS: i64 = 24;

/// Query window for usage statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl UsageWindow {
    /// The trailing day ending now.
    pub fn last_day() -> Self {
        Self::ending_at(Utc::now())
    }

    fn ending_at(end: DateTime<Utc>) -> Self {
        Self {
            start: end - Duration::hours(USAGE_WINDOW_HOURS),
            end,
        }
    }

    /// Milliseconds of `[started_at, end]` that fall inside the window.
    pub fn overlap_ms(&self, started_at: DateTime<Utc>) -> u64 {
        let from = started_at.max(self.start);
        (self.end - from).num_milliseconds().max(0) as u64
    }
}

/// Trait for sources of per-application foreground time.
pub trait UsageStatsSource {
    /// Create a new usage source instance.
    fn new() -> Result<Self>
    where
        Self: Sized;

    /// One record per observed application instance in the window.
    ///
    /// The same package may appear more than once.
    fn query(&mut self, window: &UsageWindow) -> Result<Vec<UsageRecord>>;
}

/// Usage source built from the process table.
///
/// A process counts as in the foreground while it is using CPU, so its time is
/// its accumulated CPU time, capped by how long it has been alive inside the
/// window. Only processes of the current user are reported.
pub struct ProcessUsageSource {
    system: System,
}

impl UsageStatsSource for ProcessUsageSource {
    fn new() -> Result<Self> {
        Ok(Self {
            system: System::new(),
        })
    }

    fn query(&mut self, window: &UsageWindow) -> Result<Vec<UsageRecord>> {
        self.system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing()
                .with_cpu()
                .with_exe(UpdateKind::OnlyIfNotSet)
                .with_user(UpdateKind::OnlyIfNotSet),
        );

        let current_user = sysinfo::get_current_pid()
            .ok()
            .and_then(|pid| self.system.process(pid))
            .and_then(|p| p.user_id().cloned());

        let mut records = Vec::new();
        for process in self.system.processes().values() {
            if current_user.is_some() && process.user_id() != current_user.as_ref() {
                continue;
            }

            let Some(started_at) = DateTime::<Utc>::from_timestamp(process.start_time() as i64, 0)
            else {
                continue;
            };

            let alive_ms = window.overlap_ms(started_at);
            let active_ms = process.accumulated_cpu_time().min(alive_ms);
            if active_ms == 0 {
                continue;
            }

            let package = process
                .exe()
                .and_then(package_from_exe)
                .unwrap_or_else(|| process.name().to_string_lossy().to_string());

            records.push(UsageRecord::new(package, active_ms));
        }

        debug!(records = records.len(), "Queried process usage");
        Ok(records)
    }
}

fn package_from_exe(exe: &Path) -> Option<String> {
    exe.file_name().map(|name| name.to_string_lossy().to_string())
}

/// Package name under which this program shows up in usage records.
pub fn current_package_name() -> String {
    std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(package_from_exe)
        .unwrap_or_else(|| "drainwatch".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn window() -> UsageWindow {
        UsageWindow::ending_at(Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_overlap_for_old_process_is_whole_window() {
        let started = Utc.with_ymd_and_hms(2026, 2, 20, 0, 0, 0).unwrap();
        assert_eq!(window().overlap_ms(started), 24 * 3600 * 1000);
    }

    #[test]
    fn test_overlap_for_recent_process() {
        let started = Utc.with_ymd_and_hms(2026, 3, 2, 11, 30, 0).unwrap();
        assert_eq!(window().overlap_ms(started), 30 * 60 * 1000);
    }

    #[test]
    fn test_overlap_for_future_start_is_zero() {
        let started = Utc.with_ymd_and_hms(2026, 3, 2, 13, 0, 0).unwrap();
        assert_eq!(window().overlap_ms(started), 0);
    }

    #[test]
    fn test_window_is_last_day() {
        let w = UsageWindow::last_day();
        assert_eq!((w.end - w.start).num_hours(), 24);
        assert!(w.start < w.end);
        assert_eq!(window().start, Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_package_from_exe() {
        assert_eq!(
            package_from_exe(Path::new("/usr/bin/firefox")),
            Some("firefox".to_string())
        );
        assert!(!current_package_name().is_empty());
    }
}

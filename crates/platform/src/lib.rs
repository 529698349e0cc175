//! Platform sources for drainwatch.
//!
//! Each signal the dashboard needs is read through a small provider trait so
//! the collector can be driven by real system sources or by test doubles:
//!
//! - [`BatteryProvider`] - point-in-time battery status
//! - [`UsageStatsSource`] - per-application foreground time in a window
//! - [`NetworkCounters`] - bytes transferred since boot
//! - [`AppRegistry`] - installed applications and their display metadata
//! - [`UsageAccess`] - whether usage statistics may be read
//!
//! # Example
//!
//! ```ignore
//! use drainwatch_platform::{default_battery_provider, BatteryProvider};
//!
//! let mut battery = default_battery_provider()?;
//! battery.refresh()?;
//! println!("Level: {:?}", battery.status().level);
//! ```

mod access;
mod apps;
mod battery;
mod network;
mod usage;

pub use access::{default_usage_access, UsageAccess};
pub use apps::{parse_desktop_entry, AppRegistry, DesktopEntry, DesktopEntryRegistry};
pub use battery::{default_battery_provider, BatteryProvider, StarshipBattery};
pub use network::{NetworkCounters, SysinfoNetworks};
pub use usage::{
    current_package_name, ProcessUsageSource, UsageStatsSource, UsageWindow, USAGE_WINDOW_HOURS,
};

#[cfg(target_os = "linux")]
pub mod linux;

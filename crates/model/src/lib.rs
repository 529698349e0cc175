//! Battery drain estimation for drainwatch.
//!
//! Everything in this crate is pure: it takes readings that were collected
//! elsewhere and turns them into a predicted daily drain, a remaining-time
//! estimate and a ranked list of the most used applications.
//!
//! # Example
//!
//! ```
//! use drainwatch_model::{estimate_daily_drain_mah, hours_remaining};
//!
//! let drain = estimate_daily_drain_mah(60.0, 2.0, 50.0, 500.0, 30.0, 3.0, 1.0, 0.0);
//! let hours = hours_remaining(drain, 0.8, 4000.0);
//! assert!(hours > 0.0);
//! ```

mod coefficients;
mod drain;
pub mod format;
mod ranking;
mod remaining;
mod report;
mod types;

pub use coefficients::DrainCoefficients;
pub use drain::{estimate_daily_drain_mah, DrainFeatures, DrainModel};
pub use ranking::{rank_usage, select_top_apps, RankedUsage, SYSTEM_UI_PACKAGE};
pub use remaining::{
    hours_remaining, hours_to_full, EstimatorSettings, RemainingTime, DEFAULT_CAPACITY_MAH,
    DEFAULT_DISPLAY_CLAMP_HOURS, DEFAULT_FULL_CHARGE_HOURS,
};
pub use report::{DrainEstimate, DrainReport};
pub use types::{
    AppMetadata, BatteryHealth, BatterySnapshot, ChargeStatus, ProfileConfig, RawBatteryStatus,
    TopAppEntry, UsageRecord, UsageSnapshot, DEFAULT_BATTERY_FRACTION,
};

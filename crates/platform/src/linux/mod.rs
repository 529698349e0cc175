//! Linux sources: the `power_supply` class in sysfs and procfs.
//!
//! Android kernels expose the same `power_supply` attributes, so the battery
//! extras also work there.

mod access;
mod battery;

pub use access::ProcAccess;
pub use battery::LinuxBattery;

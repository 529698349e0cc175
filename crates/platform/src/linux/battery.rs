use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;
use drainwatch_model::{BatteryHealth, ChargeStatus, RawBatteryStatus};
use starship_battery::Manager;
use tracing::debug;

use crate::battery::{read_first_battery, BatteryProvider};

const POWER_SUPPLY_PATH: &str = "/sys/class/power_supply";

/// Linux battery provider.
///
/// Level, state, temperature and voltage come from `starship-battery`. The
/// `power_supply` class in sysfs fills in what the crate lacks: the health
/// string and the "Not charging" state of a battery held on mains power.
pub struct LinuxBattery {
    status: RawBatteryStatus,
    manager: Manager,
    power_supply: PathBuf,
    battery_path: Option<PathBuf>,
}

impl BatteryProvider for LinuxBattery {
    fn new() -> Result<Self> {
        Self::with_root(POWER_SUPPLY_PATH)
    }

    fn refresh(&mut self) -> Result<()> {
        let mut status = read_first_battery(&self.manager)?;

        if self.battery_path.is_none() {
            self.battery_path = find_battery_path(&self.power_supply);
        }
        apply_sysfs_extras(&mut status, &self.power_supply, self.battery_path.as_deref());

        debug!(?status, path = ?self.battery_path, "Read battery");
        self.status = status;
        Ok(())
    }

    fn status(&self) -> &RawBatteryStatus {
        &self.status
    }
}

impl LinuxBattery {
    /// Read sysfs extras from a `power_supply` directory other than the
    /// system one.
    pub fn with_root(power_supply: impl Into<PathBuf>) -> Result<Self> {
        let power_supply = power_supply.into();
        let battery_path = find_battery_path(&power_supply);
        Ok(Self {
            status: RawBatteryStatus::default(),
            manager: Manager::new()?,
            power_supply,
            battery_path,
        })
    }

    pub fn battery_path(&self) -> Option<&Path> {
        self.battery_path.as_deref()
    }
}

/// Fill in health and correct the charge state from sysfs.
fn apply_sysfs_extras(status: &mut RawBatteryStatus, power_supply: &Path, battery: Option<&Path>) {
    let on_mains = is_ac_connected(power_supply);

    if let Some(path) = battery {
        if let Some(health) = read_attr(path, "health") {
            status.health = BatteryHealth::from_sysfs(&health);
        }
    }

    status.status = match status.status {
        ChargeStatus::Unknown => {
            let reported = battery
                .and_then(|path| read_attr(path, "status"))
                .map(|s| ChargeStatus::from_sysfs(&s))
                .unwrap_or_default();
            if reported == ChargeStatus::NotCharging || on_mains {
                ChargeStatus::NotCharging
            } else {
                reported
            }
        }
        ChargeStatus::Discharging if on_mains => ChargeStatus::NotCharging,
        other => other,
    };
}

fn read_attr(dir: &Path, name: &str) -> Option<String> {
    fs::read_to_string(dir.join(name))
        .ok()
        .map(|s| s.trim().to_string())
}

fn find_battery_path(power_supply: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(power_supply).ok()?;
    let mut candidates: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            read_attr(path, "type")
                .map(|t| t.eq_ignore_ascii_case("Battery"))
                .unwrap_or(false)
        })
        .collect();
    // BAT0 before BAT1
    candidates.sort();
    candidates.into_iter().next()
}

fn is_ac_connected(power_supply: &Path) -> bool {
    let Ok(entries) = fs::read_dir(power_supply) else {
        return false;
    };

    entries.flatten().any(|entry| {
        let path = entry.path();
        let is_mains = read_attr(&path, "type")
            .map(|t| t == "Mains" || t == "USB")
            .unwrap_or(false);
        is_mains && read_attr(&path, "online").as_deref() == Some("1")
    })
}

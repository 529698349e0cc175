//! Battery status providers.

use color_eyre::eyre::{eyre, Result};
use drainwatch_model::{BatteryHealth, ChargeStatus, RawBatteryStatus};
use starship_battery::units::electric_potential::millivolt;
use starship_battery::units::ratio::percent;
use starship_battery::units::thermodynamic_temperature::degree_celsius;
use starship_battery::Manager;

/// Trait for platform-specific battery providers.
///
/// A provider holds the reading from its last `refresh`; callers take one
/// reading per refresh cycle and derive everything else from it.
pub trait BatteryProvider {
    /// Create a new battery provider instance.
    fn new() -> Result<Self>
    where
        Self: Sized;

    /// Read battery status from the system.
    fn refresh(&mut self) -> Result<()>;

    /// The status read by the last successful refresh.
    fn status(&self) -> &RawBatteryStatus;

    /// Check if a battery is available on this system.
    fn is_available() -> bool
    where
        Self: Sized,
    {
        Manager::new()
            .ok()
            .and_then(|m| m.batteries().ok())
            .and_then(|mut b| b.next())
            .and_then(|b| b.ok())
            .is_some()
    }
}

/// Provider for the current target. Linux adds sysfs extras to the
/// `starship-battery` reading.
#[cfg(target_os = "linux")]
pub fn default_battery_provider() -> Result<Box<dyn BatteryProvider>> {
    Ok(Box::new(crate::linux::LinuxBattery::new()?))
}

/// Provider for the current target.
#[cfg(not(target_os = "linux"))]
pub fn default_battery_provider() -> Result<Box<dyn BatteryProvider>> {
    Ok(Box::new(StarshipBattery::new()?))
}

pub(crate) fn charge_status_from(state: starship_battery::State) -> ChargeStatus {
    match state {
        starship_battery::State::Charging => ChargeStatus::Charging,
        starship_battery::State::Discharging => ChargeStatus::Discharging,
        starship_battery::State::Empty => ChargeStatus::Discharging,
        starship_battery::State::Full => ChargeStatus::Full,
        _ => ChargeStatus::Unknown,
    }
}

/// Level, state, temperature and voltage of the first battery the crate finds.
///
/// Health is left `Unknown`; the crate has no health code.
pub(crate) fn read_first_battery(manager: &Manager) -> Result<RawBatteryStatus> {
    let mut battery = manager
        .batteries()?
        .next()
        .ok_or_else(|| eyre!("No battery found"))??;

    manager.refresh(&mut battery)?;

    Ok(RawBatteryStatus {
        status: charge_status_from(battery.state()),
        level: Some(battery.state_of_charge().get::<percent>().round() as i32),
        scale: Some(100),
        temperature_tenths_c: battery
            .temperature()
            .map(|t| (t.get::<degree_celsius>() * 10.0).round() as i32),
        voltage_mv: Some(battery.voltage().get::<millivolt>() as i32),
        health: BatteryHealth::Unknown,
    })
}

/// Cross-platform provider backed by `starship-battery`.
///
/// The crate exposes no health code, so health is always `Unknown`.
pub struct StarshipBattery {
    status: RawBatteryStatus,
    manager: Manager,
}

impl BatteryProvider for StarshipBattery {
    fn new() -> Result<Self> {
        let manager = Manager::new()?;
        Ok(Self {
            status: RawBatteryStatus::default(),
            manager,
        })
    }

    fn refresh(&mut self) -> Result<()> {
        self.status = read_first_battery(&self.manager)?;
        Ok(())
    }

    fn status(&self) -> &RawBatteryStatus {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_status_conversion() {
        assert_eq!(
            charge_status_from(starship_battery::State::Charging),
            ChargeStatus::Charging
        );
        assert_eq!(
            charge_status_from(starship_battery::State::Discharging),
            ChargeStatus::Discharging
        );
        assert_eq!(
            charge_status_from(starship_battery::State::Full),
            ChargeStatus::Full
        );
        assert_eq!(
            charge_status_from(starship_battery::State::Empty),
            ChargeStatus::Discharging
        );
        assert_eq!(
            charge_status_from(starship_battery::State::Unknown),
            ChargeStatus::Unknown
        );
    }
}

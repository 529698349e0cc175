use std::fs;
use std::path::PathBuf;

use drainwatch_model::{
    DrainCoefficients, EstimatorSettings, ProfileConfig, DEFAULT_CAPACITY_MAH,
    DEFAULT_DISPLAY_CLAMP_HOURS, DEFAULT_FULL_CHARGE_HOURS, SYSTEM_UI_PACKAGE,
};
use serde::{Deserialize, Serialize};
use tracing::{warn, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "off" | "none" => LogLevel::Off,
            "error" => LogLevel::Error,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Warn,
        }
    }

    pub fn as_tracing_level(&self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserConfig {
    pub log_level: LogLevel,
    pub battery_capacity_mah: f64,
    pub full_charge_hours: f64,
    pub display_clamp_hours: f64,
    /// Behavior class fed to the drain model (1-5, 3 is "moderate").
    pub behavior_class: f64,
    pub platform_is_alternate: bool,
    pub top_apps_count: usize,
    pub excluded_packages: Vec<String>,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            battery_capacity_mah: DEFAULT_CAPACITY_MAH,
            full_charge_hours: DEFAULT_FULL_CHARGE_HOURS,
            display_clamp_hours: DEFAULT_DISPLAY_CLAMP_HOURS,
            behavior_class: ProfileConfig::DEFAULT_BEHAVIOR_CLASS,
            platform_is_alternate: false,
            top_apps_count: 3,
            excluded_packages: Vec::new(),
        }
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("drainwatch")
}

pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("drainwatch")
}

pub fn runtime_dir() -> PathBuf {
    dirs::runtime_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("drainwatch")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn preferences_path() -> PathBuf {
    data_dir().join("preferences.toml")
}

pub fn ensure_dirs() -> std::io::Result<()> {
    fs::create_dir_all(config_dir())?;
    fs::create_dir_all(data_dir())?;
    Ok(())
}

impl UserConfig {
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// Parse config contents, falling back to defaults when invalid.
    pub fn parse(content: &str) -> Self {
        toml::from_str(content).unwrap_or_else(|e| {
            warn!(error = %e, "Invalid config file, using defaults");
            Self::default()
        })
    }

    pub fn save(&self) -> std::io::Result<()> {
        let _ = ensure_dirs();
        let path = config_path();
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        fs::write(path, content)
    }

    pub fn estimator_settings(&self) -> EstimatorSettings {
        EstimatorSettings {
            capacity_mah: self.battery_capacity_mah,
            full_charge_hours: self.full_charge_hours,
            display_clamp_hours: self.display_clamp_hours,
            coefficients: DrainCoefficients::DEFAULT,
        }
    }

    /// Packages never shown in the top apps: this program, the system UI and
    /// whatever the user listed.
    pub fn effective_excluded_packages(&self, own_package: &str) -> Vec<String> {
        let mut excluded = vec![own_package.to_string(), SYSTEM_UI_PACKAGE.to_string()];
        excluded.extend(self.excluded_packages.iter().cloned());
        excluded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("off"), LogLevel::Off);
        assert_eq!(LogLevel::from_str("bogus"), LogLevel::Warn);
        assert_eq!(LogLevel::Off.as_tracing_level(), None);
        assert_eq!(LogLevel::Trace.as_tracing_level(), Some(Level::TRACE));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = UserConfig::parse("battery_capacity_mah = 5000.0\nlog_level = \"info\"\n");
        assert_eq!(config.battery_capacity_mah, 5000.0);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.full_charge_hours, 2.0);
        assert_eq!(config.display_clamp_hours, 100.0);
        assert_eq!(config.behavior_class, 3.0);
        assert_eq!(config.top_apps_count, 3);
    }

    #[test]
    fn test_stale_window_key_is_ignored() {
        let config = UserConfig::parse("usage_window_hours = -5\ntop_apps_count = 5\n");
        assert_eq!(config.top_apps_count, 5);
        assert_eq!(
            config,
            UserConfig {
                top_apps_count: 5,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let config = UserConfig::parse("battery_capacity_mah = \"lots\"");
        assert_eq!(config, UserConfig::default());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = UserConfig {
            excluded_packages: vec!["ssh-agent".to_string()],
            ..Default::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(UserConfig::parse(&text), config);
    }

    #[test]
    fn test_estimator_settings_follow_config() {
        let config = UserConfig {
            battery_capacity_mah: 3000.0,
            display_clamp_hours: 48.0,
            ..Default::default()
        };
        let settings = config.estimator_settings();
        assert_eq!(settings.capacity_mah, 3000.0);
        assert_eq!(settings.full_charge_hours, 2.0);
        assert_eq!(settings.display_clamp_hours, 48.0);
    }

    #[test]
    fn test_excluded_packages_include_self_and_system_ui() {
        let config = UserConfig {
            excluded_packages: vec!["Xorg".to_string()],
            ..Default::default()
        };
        let excluded = config.effective_excluded_packages("drainwatch");
        assert_eq!(excluded, vec!["drainwatch", "com.android.systemui", "Xorg"]);
    }
}

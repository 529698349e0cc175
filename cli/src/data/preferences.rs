//! Key-value preference store backed by a TOML table.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid preferences file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Flat key-value preferences. Values are written on `save`.
#[derive(Debug, Clone)]
pub struct Preferences {
    path: PathBuf,
    values: Table,
}

impl Preferences {
    /// Load preferences from `path`. A missing file is an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PreferencesError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => content.parse::<Table>()?,
            Err(e) if e.kind() == ErrorKind::NotFound => Table::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), keys = values.len(), "Loaded preferences");
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    pub fn set_string(&mut self, key: &str, value: impl Into<String>) {
        self.values
            .insert(key.to_string(), Value::String(value.into()));
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), Value::Boolean(value));
    }

    pub fn save(&self) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&self.values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

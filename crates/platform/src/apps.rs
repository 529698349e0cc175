//! Installed application registry.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;
use drainwatch_model::AppMetadata;
use tracing::debug;

/// Trait for registries of installed applications.
pub trait AppRegistry {
    /// Create a new registry instance.
    fn new() -> Result<Self>
    where
        Self: Sized;

    /// Rescan installed applications.
    fn refresh(&mut self) -> Result<()>;

    fn installed_count(&self) -> usize;

    /// Display metadata for a package, if it is installed.
    fn lookup(&self, package: &str) -> Option<AppMetadata>;
}

/// Parsed `[Desktop Entry]` group of a `.desktop` file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopEntry {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub exec: Option<String>,
    pub entry_type: Option<String>,
    pub hidden: bool,
}

impl DesktopEntry {
    pub fn is_application(&self) -> bool {
        !self.hidden && self.entry_type.as_deref() == Some("Application")
    }

    /// File name of the program `Exec` launches, skipping `env` prefixes.
    pub fn exec_name(&self) -> Option<String> {
        self.exec
            .as_deref()?
            .split_whitespace()
            .find(|token| *token != "env" && !token.contains('='))
            .and_then(|program| Path::new(program).file_name())
            .map(|name| name.to_string_lossy().to_string())
    }
}

/// Parse the keys drainwatch needs from desktop entry file contents.
pub fn parse_desktop_entry(contents: &str) -> DesktopEntry {
    let mut entry = DesktopEntry::default();
    let mut in_main_group = false;

    for line in contents.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            in_main_group = line == "[Desktop Entry]";
            continue;
        }
        if !in_main_group || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().to_string();
        match key.trim() {
            "Name" => entry.name = Some(value),
            "Icon" => entry.icon = Some(value),
            "Exec" => entry.exec = Some(value),
            "Type" => entry.entry_type = Some(value),
            "Hidden" => entry.hidden = value.eq_ignore_ascii_case("true"),
            _ => {}
        }
    }

    entry
}

/// Registry built from XDG `.desktop` files and macOS `.app` bundles.
///
/// Lookups match the desktop file id (`firefox` for `firefox.desktop`) or the
/// file name of the program in its `Exec` line, case-insensitively.
pub struct DesktopEntryRegistry {
    search_dirs: Vec<PathBuf>,
    installed: usize,
    index: HashMap<String, AppMetadata>,
}

impl AppRegistry for DesktopEntryRegistry {
    fn new() -> Result<Self> {
        let mut registry = Self::with_dirs(default_search_dirs());
        registry.refresh()?;
        Ok(registry)
    }

    fn refresh(&mut self) -> Result<()> {
        self.installed = 0;
        self.index.clear();

        for dir in self.search_dirs.clone() {
            let Ok(entries) = fs::read_dir(&dir) else {
                continue;
            };
            for path in entries.flatten().map(|e| e.path()) {
                match path.extension().and_then(|e| e.to_str()) {
                    Some("desktop") => self.add_desktop_file(&path),
                    Some("app") => self.add_bundle(&path),
                    _ => {}
                }
            }
        }

        debug!(
            installed = self.installed,
            indexed = self.index.len(),
            "Scanned installed applications"
        );
        Ok(())
    }

    fn installed_count(&self) -> usize {
        self.installed
    }

    fn lookup(&self, package: &str) -> Option<AppMetadata> {
        self.index.get(&package.to_lowercase()).cloned()
    }
}

impl DesktopEntryRegistry {
    /// Registry over explicit directories; call `refresh` to scan them.
    pub fn with_dirs(search_dirs: Vec<PathBuf>) -> Self {
        Self {
            search_dirs,
            installed: 0,
            index: HashMap::new(),
        }
    }

    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    fn add_desktop_file(&mut self, path: &Path) {
        let Ok(contents) = fs::read_to_string(path) else {
            return;
        };
        let entry = parse_desktop_entry(&contents);
        if !entry.is_application() {
            return;
        }
        self.installed += 1;

        let Some(id) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
            return;
        };
        let meta = AppMetadata {
            display_name: entry.name.clone().unwrap_or_else(|| id.clone()),
            icon: entry.icon.clone(),
        };

        // first directory wins, so user entries shadow system ones
        if let Some(exec) = entry.exec_name() {
            self.index
                .entry(exec.to_lowercase())
                .or_insert_with(|| meta.clone());
        }
        self.index.entry(id.to_lowercase()).or_insert(meta);
    }

    fn add_bundle(&mut self, path: &Path) {
        let Some(name) = path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
            return;
        };
        self.installed += 1;
        self.index
            .entry(name.to_lowercase())
            .or_insert_with(|| AppMetadata {
                display_name: name,
                icon: None,
            });
    }
}

fn default_search_dirs() -> Vec<PathBuf> {
    let mut search_dirs = Vec::new();
    if let Some(data) = dirs::data_dir() {
        search_dirs.push(data.join("applications"));
        search_dirs.push(data.join("flatpak/exports/share/applications"));
    }
    search_dirs.push(PathBuf::from("/usr/local/share/applications"));
    search_dirs.push(PathBuf::from("/usr/share/applications"));
    search_dirs.push(PathBuf::from("/var/lib/flatpak/exports/share/applications"));
    search_dirs.push(PathBuf::from("/var/lib/snapd/desktop/applications"));
    if let Some(home) = dirs::home_dir() {
        search_dirs.push(home.join("Applications"));
    }
    search_dirs.push(PathBuf::from("/Applications"));
    search_dirs
}

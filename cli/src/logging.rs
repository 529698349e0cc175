use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{runtime_dir, LogLevel};

const LOG_PREFIX: &str = "drainwatch";
const KEEP_LOG_FILES: usize = 7;

/// Crates whose debug output drowns out the refresh logs.
const QUIET_TARGETS: &[&str] = &["starship_battery=warn", "sysinfo=warn"];

static INIT: OnceLock<()> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Daily rolling file; the TUI owns the terminal.
    File,
    Stderr,
}

/// Keeps the file writer flushing until dropped at the end of `main`.
pub struct LogGuard {
    _guard: Option<WorkerGuard>,
}

/// Directory holding the TUI's rolling log files.
pub fn log_dir() -> PathBuf {
    runtime_dir()
}

fn effective_level(configured: LogLevel, cli_override: Option<LogLevel>) -> Option<Level> {
    cli_override.unwrap_or(configured).as_tracing_level()
}

/// Install the global subscriber once. Later calls are no-ops.
pub fn init(level: LogLevel, mode: LogMode, cli_override: Option<LogLevel>) -> LogGuard {
    let mut guard = None;

    INIT.get_or_init(|| {
        let Some(level) = effective_level(level, cli_override) else {
            return;
        };

        let (file_writer, file_guard) = match mode {
            LogMode::File => match file_writer(&log_dir()) {
                Some((writer, guard)) => (Some(writer), Some(guard)),
                None => (None, None),
            },
            LogMode::Stderr => (None, None),
        };
        guard = file_guard;

        let file_layer = file_writer.map(|writer| {
            fmt::layer()
                .with_writer(writer)
                .with_timer(UtcTime::rfc_3339())
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
        });
        let stderr_layer = (mode == LogMode::Stderr).then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(UtcTime::rfc_3339())
                .with_ansi(true)
        });

        tracing_subscriber::registry()
            .with(env_filter(level))
            .with(file_layer)
            .with(stderr_layer)
            .init();
    });

    LogGuard { _guard: guard }
}

fn env_filter(level: Level) -> EnvFilter {
    QUIET_TARGETS.iter().fold(
        EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy(),
        |filter, directive| match directive.parse() {
            Ok(directive) => filter.add_directive(directive),
            Err(_) => filter,
        },
    )
}

fn file_writer(dir: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Warning: could not create log directory {}: {}", dir.display(), e);
        return None;
    }

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix("log")
        .max_log_files(KEEP_LOG_FILES)
        .build(dir)
        .ok()?;

    Some(tracing_appender::non_blocking(appender))
}

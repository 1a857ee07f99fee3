//! Application logging.
//!
//! [`Logger`] keeps a bounded in-memory history for the debug log dialog and
//! forwards every entry to the `log` facade. When file logging is enabled a
//! `fern` dispatch is installed that writes `log` records to a file in the data
//! directory.

use crate::config::Config;
use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Entries kept in memory; older entries are dropped first.
pub const MAX_LOG_ENTRIES: usize = 1000;

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    file_path: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            file_path: None,
        }
    }

    /// Build a logger from the `[logging] enabled` flag, installing the file
    /// dispatch when it is set.
    pub fn from_config(enabled: bool) -> Result<Self> {
        if enabled {
            Self::with_file(Self::get_log_file_path()?)
        } else {
            Ok(Self::new())
        }
    }

    /// Logger that also writes to `path`. If another global logger is already
    /// installed the file sink is skipped and the logger stays memory-only.
    pub fn with_file(path: PathBuf) -> Result<Self> {
        let mut logger = Self::new();
        if install_file_logger(&path, LevelFilter::Debug)? {
            logger.file_path = Some(path);
        } else {
            logger.log(format!(
                "File logging skipped: a logger is already installed, not writing to {}",
                path.display()
            ));
        }
        Ok(logger)
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!(target: "checklist", "{}", message);

        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_LOG_ENTRIES {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Whether entries are also written to a file
    pub fn is_enabled(&self) -> bool {
        self.file_path.is_some()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Location of the log file inside the data directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        Ok(Config::get_data_dir()?.join("checklist.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a `fern` dispatch that appends `log` records to `path`.
///
/// Returns `Ok(false)` when another global logger is already installed; the
/// `log` facade only accepts one per process.
pub fn install_file_logger(path: &Path, level: LevelFilter) -> Result<bool> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let installed = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // reqwest/hyper are noisy at debug
        .level_for("hyper", LevelFilter::Warn)
        .level_for("hyper_util", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Info)
        .chain(file)
        .apply()
        .is_ok();

    Ok(installed)
}

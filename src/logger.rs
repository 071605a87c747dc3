//! Logging setup.
//!
//! Records go through the `log` facade and are dispatched by `fern` to an
//! in-memory ring buffer (shown by the logs dialog) and, when enabled in the
//! configuration, to a log file in the platform data directory. Nothing is
//! written to stdout: the terminal belongs to the TUI.

use crate::config::LoggingConfig;
use crate::constants::{LOG_BUFFER_CAPACITY, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

static LOG_BUFFER: Lazy<Mutex<VecDeque<String>>> =
    Lazy::new(|| Mutex::new(VecDeque::with_capacity(LOG_BUFFER_CAPACITY)));

/// Handle to the shared in-memory log buffer
#[derive(Clone, Default)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Self
    }

    /// Add an already formatted line, evicting the oldest when full
    pub fn push(&self, line: String) {
        if let Ok(mut logs) = LOG_BUFFER.lock() {
            if logs.len() == LOG_BUFFER_CAPACITY {
                logs.pop_front();
            }
            logs.push_back(line);
        }
    }

    /// Get all buffered lines, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = LOG_BUFFER.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all buffered lines
    pub fn clear(&self) {
        if let Ok(mut logs) = LOG_BUFFER.lock() {
            logs.clear();
        }
    }

    /// Path of the log file written when file logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("gradient-feed").join(LOG_FILE_NAME))
    }
}

/// Install the global logger described by `config`
pub fn init(config: &LoggingConfig) -> Result<Logger> {
    let level = config.level_filter()?;
    let logger = Logger::new();
    let buffer = logger.clone();

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .level_for("arboard", log::LevelFilter::Warn)
        .chain(fern::Output::call(move |record| buffer.push(record.args().to_string())));

    if config.enabled {
        let path = Logger::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().context("Logger already initialised")?;
    log::info!("Logging started at level {}", level);
    Ok(logger)
}

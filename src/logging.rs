//! Tracing subscriber setup shared by both binaries.
//!
//! Console output goes to stderr so stdout stays free for the text summary.
//! When a log directory is given, every event is also appended to a daily
//! file named `<name>_YYYYMMDD.log`.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Path of today's log file for `name` inside `log_dir`.
#[must_use]
pub fn log_file_path(log_dir: &Path, name: &str) -> PathBuf {
    let date = chrono::Local::now().format("%Y%m%d");
    log_dir.join(format!("{name}_{date}.log"))
}

/// Installs the global subscriber.
///
/// The level is `debug` when `debug` is set and `info` otherwise; `RUST_LOG`
/// overrides both. Calling this twice is harmless: the second call keeps
/// the first subscriber.
pub fn init(name: &str, debug: bool, log_dir: Option<&Path>) -> Result<()> {
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into());

    let file_layer = match log_dir {
        Some(dir) => {
            let file = open_log_file(dir, name)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(file_layer)
        .try_init();

    Ok(())
}

fn open_log_file(dir: &Path, name: &str) -> Result<File> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let path = log_file_path(dir, name);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

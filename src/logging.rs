//! File logging
//!
//! The terminal is owned by the UI, so tracing output goes to a file.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::ConfigError;

const LOG_FILE: &str = "metrowatch.log";
const DEFAULT_FILTER: &str = "metrowatch=info";

/// Default log location under the platform data directory
pub fn default_log_path() -> PathBuf {
    dirs_next::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("metrowatch")
        .join(LOG_FILE)
}

/// Install the global subscriber. Returns the path being written.
pub fn init(log_file: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    let path = log_file.unwrap_or_else(default_log_path);
    let file = open_log(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_target(true)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    Ok(path)
}

fn open_log(path: &Path) -> Result<File, ConfigError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .map_err(|e| ConfigError::Logging(format!("{}: {e}", dir.display())))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ConfigError::Logging(format!("{}: {e}", path.display())))
}

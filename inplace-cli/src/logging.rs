//! File logging. The terminal belongs to the UI, so traces go to a file.
//!
//! Filtering follows `RUST_LOG` and defaults to `info`.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "inplace.log";

pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_LOG_FILE)
}

/// Installs the subscriber; keep the guard alive until exit so buffered lines flush.
pub fn init(log_file: &Path) -> Result<WorkerGuard> {
    let file_name = log_file
        .file_name()
        .ok_or_else(|| eyre!("log file '{}' has no file name", log_file.display()))?;
    let dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .wrap_err("failed to install log subscriber")?;
    Ok(guard)
}

//! Logging setup using the tracing ecosystem.
//!
//! Jog activity and dispatch traces go to a daily rotating file so they
//! never draw over the terminal panel. The level is taken from `RUST_LOG`.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::error::{AppError, Result};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "traykeys=info,warn";

/// Prefix of the rotated log files (`traykeys.log.YYYY-MM-DD`).
pub const LOG_FILE_PREFIX: &str = "traykeys.log";

/// Initialize logging in the default log directory.
///
/// Use `RUST_LOG=traykeys=debug` to trace every dispatched key, or
/// `RUST_LOG=traykeys=trace` to also see ignored keys.
///
/// Returns the directory the log files are written to.
///
/// # Errors
///
/// Fails if the local data directory is unknown, the log directory cannot
/// be created, or a global subscriber is already set.
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory()
        .ok_or_else(|| AppError::other("Could not determine local data directory"))?;
    init_in(&log_dir)?;
    Ok(log_dir)
}

/// Initialize logging, writing rotated files into `log_dir`.
pub fn init_in(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|e| AppError::other(format!("Could not install logger: {}", e)))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %log_dir.display(),
        "traykeys starting up"
    );
    Ok(())
}

/// Where log files are written: `traykeys/logs` under the platform local
/// data directory.
pub fn log_directory() -> Option<PathBuf> {
    dirs::data_local_dir().map(|base| base.join("traykeys").join("logs"))
}

/// Log a clean shutdown.
pub fn shutdown() {
    tracing::info!("traykeys shutting down");
}

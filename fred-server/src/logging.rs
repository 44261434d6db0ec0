//! Subscriber setup: stderr plus a non-blocking copy in the log file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::ServerError;

/// Filter from `RUST_LOG` when set, otherwise from `level`.
///
/// # Errors
/// Returns `ServerError::Logging` when `level` is not a valid filter directive.
pub fn env_filter(level: &str) -> Result<EnvFilter, ServerError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level)
        .map_err(|e| ServerError::Logging(format!("invalid log level '{level}': {e}")))
}

/// Install the global subscriber.
///
/// Stdout is reserved for protocol frames, so console output goes to stderr. The
/// returned guard flushes the file writer on drop and must live as long as `main`.
///
/// # Errors
/// Returns `ServerError::Logging` for a bad level or when a subscriber is already set.
pub fn init(level: &str, log_file: &Path) -> Result<WorkerGuard, ServerError> {
    let filter = env_filter(level)?;

    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_file
        .file_name()
        .ok_or_else(|| ServerError::Logging(format!("log file '{}' has no file name", log_file.display())))?;
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .map_err(|e| ServerError::Logging(e.to_string()))?;

    Ok(guard)
}

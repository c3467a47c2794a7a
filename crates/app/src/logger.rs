//! Tracing setup for the terminal binary.
//!
//! Logs go to stderr so they never interleave with question text on stdout.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

pub const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber.
///
/// An explicit `level` (from `--log-level`) wins over `RUST_LOG`; otherwise
/// `RUST_LOG` is used and [`DEFAULT_LEVEL`] is the fallback.
pub fn init(level: Option<&str>) -> Result<(), AppError> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)
            .map_err(|e| AppError::Logger(format!("invalid log level '{level}': {e}")))?,
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(DEFAULT_LEVEL))
            .map_err(|e| AppError::Logger(e.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))
}

//! Logging initialization.
//!
//! Installs a global `tracing-subscriber` fmt subscriber writing to stderr,
//! so that stdout stays reserved for command results.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::config::{LogFormat, LoggingConfig};

#[derive(thiserror::Error, Debug)]
pub enum LoggingError {
    #[error("invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: ParseError,
    },
}

/// Builds the event filter. `RUST_LOG`, when set and valid, wins over the
/// configured level.
///
/// # Errors
/// Returns [`LoggingError::InvalidFilter`] if the configured level is not a
/// valid filter directive.
pub fn build_filter(cfg: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&cfg.level).map_err(|source| LoggingError::InvalidFilter {
        filter: cfg.level.clone(),
        source,
    })
}

/// Installs the global subscriber.
///
/// Returns `Ok(false)` when a global subscriber was already installed; the
/// existing one is kept.
///
/// # Errors
/// Returns [`LoggingError::InvalidFilter`] if the filter cannot be built.
pub fn init_logging(cfg: &LoggingConfig) -> Result<bool, LoggingError> {
    let filter = build_filter(cfg)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(cfg.ansi)
        .with_target(true);

    let installed = match cfg.format {
        LogFormat::Text => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    };

    if installed {
        tracing::debug!(level = %cfg.level, format = ?cfg.format, "logging initialized");
    }
    Ok(installed)
}

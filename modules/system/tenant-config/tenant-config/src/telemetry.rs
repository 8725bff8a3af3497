//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Installs a global `fmt` subscriber filtered by `cfg.level`, with JSON
/// output when `cfg.json` is set.
///
/// # Errors
/// Returns `InvalidFilter` for malformed directives and `Init` when a global
/// subscriber is already installed.
pub fn init_tracing(cfg: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&cfg.level).map_err(|source| TelemetryError::InvalidFilter {
        filter: cfg.level.clone(),
        source,
    })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let result = if cfg.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))
}

//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout carries only the comfort cards. `RUST_LOG`
//! overrides the default level.

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, VERBOSE_LOG_LEVEL};
use crate::errors::{AppError, AppResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the level filter: `RUST_LOG` if set, else info or debug.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs the global subscriber with a text or JSON layer.
///
/// # Errors
///
/// Returns `AppError::Config` if a global subscriber is already installed.
pub fn init(log_format: &str, verbose: bool) -> AppResult<()> {
    let registry = tracing_subscriber::registry().with(env_filter(verbose));

    let result = if log_format == LOG_FORMAT_JSON {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}

//! Configuration management for the moodbuddy application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. It covers the credentials, endpoints, model
//! and timeouts of the two network collaborators.
//!
//! # Environment Variables
//!
//! - `GROQ_API_KEY`: Chat completion API key (required for the AI comforter)
//! - `UNSPLASH_ACCESS_KEY`: Image search key (image lookups are skipped without it)
//! - `MOODBUDDY_MODEL`: Chat model (defaults to "llama3-8b-8192")
//! - `MOODBUDDY_COMPLETION_URL`: Completion API base URL
//! - `MOODBUDDY_IMAGE_URL`: Image search API base URL
//! - `MOODBUDDY_COMPLETION_TIMEOUT_SECS`: Completion timeout (defaults to 30)
//! - `MOODBUDDY_IMAGE_TIMEOUT_SECS`: Image lookup timeout (defaults to 10)

use crate::constants::{
    DEFAULT_CHAT_MODEL, DEFAULT_COMPLETION_TIMEOUT_SECS, DEFAULT_COMPLETION_URL,
    DEFAULT_IMAGE_TIMEOUT_SECS, DEFAULT_IMAGE_URL, ENV_VAR_API_KEY, ENV_VAR_COMPLETION_TIMEOUT,
    ENV_VAR_COMPLETION_URL, ENV_VAR_IMAGE_KEY, ENV_VAR_IMAGE_TIMEOUT, ENV_VAR_IMAGE_URL,
    ENV_VAR_MODEL, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::time::Duration;

/// Configuration for the moodbuddy application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use moodbuddy::Config;
///
/// let config = Config {
///     api_key: Some("secret".to_string()),
///     ..Config::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct Config {
    /// Bearer token for the completion API; `None` disables the AI comforter.
    pub api_key: Option<String>,

    /// Access key for the image search; `None` disables image lookups.
    pub image_key: Option<String>,

    /// Chat model name.
    pub model: String,

    /// Completion API base URL.
    pub completion_url: String,

    /// Image search API base URL.
    pub image_url: String,

    /// Upper bound for a completion request.
    pub completion_timeout: Duration,

    /// Upper bound for an image lookup.
    pub image_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| REDACTED_PLACEHOLDER);
        f.debug_struct("Config")
            .field("api_key", &redact(&self.api_key))
            .field("image_key", &redact(&self.image_key))
            .field("model", &self.model)
            .field("completion_url", &self.completion_url)
            .field("image_url", &self.image_url)
            .field("completion_timeout", &self.completion_timeout)
            .field("image_timeout", &self.image_timeout)
            .finish()
    }
}

impl Default for Config {
    /// Creates a new Config with default values and no credentials.
    fn default() -> Self {
        Config {
            api_key: None,
            image_key: None,
            model: DEFAULT_CHAT_MODEL.to_string(),
            completion_url: DEFAULT_COMPLETION_URL.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            completion_timeout: Duration::from_secs(DEFAULT_COMPLETION_TIMEOUT_SECS),
            image_timeout: Duration::from_secs(DEFAULT_IMAGE_TIMEOUT_SECS),
        }
    }
}

/// Reads a variable, treating unset and blank values alike.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn timeout_var(name: &str, default_secs: u64) -> AppResult<Duration> {
    match non_empty_var(name) {
        None => Ok(Duration::from_secs(default_secs)),
        Some(raw) => raw.parse::<u64>().map(Duration::from_secs).map_err(|_| {
            AppError::Config(format!(
                "{} must be a whole number of seconds, got '{}'",
                name, raw
            ))
        }),
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// Missing keys are not an error here: the AI comforter and image lookups
    /// check for them when used.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a timeout variable is not a whole number.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use moodbuddy::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Using model: {}", config.model),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let config = Config {
            api_key: non_empty_var(ENV_VAR_API_KEY),
            image_key: non_empty_var(ENV_VAR_IMAGE_KEY),
            model: non_empty_var(ENV_VAR_MODEL).unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            completion_url: non_empty_var(ENV_VAR_COMPLETION_URL)
                .unwrap_or_else(|| DEFAULT_COMPLETION_URL.to_string()),
            image_url: non_empty_var(ENV_VAR_IMAGE_URL)
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
            completion_timeout: timeout_var(
                ENV_VAR_COMPLETION_TIMEOUT,
                DEFAULT_COMPLETION_TIMEOUT_SECS,
            )?,
            image_timeout: timeout_var(ENV_VAR_IMAGE_TIMEOUT, DEFAULT_IMAGE_TIMEOUT_SECS)?,
        };

        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The model name is empty
    /// - A base URL is empty or not http(s)
    /// - A timeout is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.model.trim().is_empty() {
            return Err(AppError::Config("Model name is empty".to_string()));
        }

        for (name, url) in [
            ("Completion URL", &self.completion_url),
            ("Image URL", &self.image_url),
        ] {
            if url.trim().is_empty() {
                return Err(AppError::Config(format!("{} is empty", name)));
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::Config(format!(
                    "{} must start with http:// or https://",
                    name
                )));
            }
        }

        if self.completion_timeout.is_zero() || self.image_timeout.is_zero() {
            return Err(AppError::Config(
                "Timeouts must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

//! Constants used throughout the application.
//!
//! This module contains all constants used in the moodbuddy application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "moodbuddy";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str =
    "Tell me how you feel: comfort, a recipe, a vibe and a song for your mood";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is given.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable holding the chat completion API key.
pub const ENV_VAR_API_KEY: &str = "GROQ_API_KEY";
/// Environment variable holding the image search access key.
pub const ENV_VAR_IMAGE_KEY: &str = "UNSPLASH_ACCESS_KEY";
/// Environment variable overriding the chat model.
pub const ENV_VAR_MODEL: &str = "MOODBUDDY_MODEL";
/// Environment variable overriding the completion API base URL.
pub const ENV_VAR_COMPLETION_URL: &str = "MOODBUDDY_COMPLETION_URL";
/// Environment variable overriding the image search base URL.
pub const ENV_VAR_IMAGE_URL: &str = "MOODBUDDY_IMAGE_URL";
/// Environment variable overriding the completion timeout, in seconds.
pub const ENV_VAR_COMPLETION_TIMEOUT: &str = "MOODBUDDY_COMPLETION_TIMEOUT_SECS";
/// Environment variable overriding the image lookup timeout, in seconds.
pub const ENV_VAR_IMAGE_TIMEOUT: &str = "MOODBUDDY_IMAGE_TIMEOUT_SECS";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// External Services
/// Default chat model.
pub const DEFAULT_CHAT_MODEL: &str = "llama3-8b-8192";
/// Default OpenAI-compatible completion API base URL.
pub const DEFAULT_COMPLETION_URL: &str = "https://api.groq.com/openai/v1";
/// Default image search API base URL.
pub const DEFAULT_IMAGE_URL: &str = "https://api.unsplash.com";
/// Default completion timeout in seconds.
pub const DEFAULT_COMPLETION_TIMEOUT_SECS: u64 = 30;
/// Default image lookup timeout in seconds.
pub const DEFAULT_IMAGE_TIMEOUT_SECS: u64 = 10;

// Journal
/// Timestamp format of journal entries.
pub const JOURNAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Header row of the CSV export.
pub const JOURNAL_CSV_HEADERS: [&str; 7] = [
    "id",
    "time",
    "mood",
    "who",
    "sentiment_label",
    "sentiment_polarity",
    "response",
];

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "moodbuddy";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

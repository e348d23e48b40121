//! Error handling utilities for the moodbuddy application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! The sentiment classifier and the response parser never produce errors; only
//! the network collaborators, the journal export and configuration do.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur during AI operations.
///
/// This enum provides detailed, contextual error information for different failure modes
/// when interacting with the chat completion API.
///
/// # Examples
///
/// ```
/// use moodbuddy::errors::AIError;
///
/// let error = AIError::ModelNotFound("llama3-8b-8192".to_string());
/// assert!(format!("{}", error).contains("llama3-8b-8192"));
/// ```
#[derive(Debug, Error)]
pub enum AIError {
    /// Completion API is not reachable or the request timed out.
    #[error("Completion API unreachable: {0}. Check your network connection or MOODBUDDY_COMPLETION_URL.")]
    Unreachable(#[source] reqwest::Error),

    /// The API key was rejected.
    #[error("Completion API rejected the credentials (HTTP {0}). Check GROQ_API_KEY.")]
    Unauthorized(u16),

    /// Requested model not found by the completion API.
    #[error("Model not found: {0}. Set MOODBUDDY_MODEL to a model your provider serves.")]
    ModelNotFound(String),

    /// No API key configured, so the AI comforter cannot be used.
    #[error("No API key configured. Set GROQ_API_KEY or choose the human friend (--who human).")]
    MissingApiKey,

    /// Invalid or unexpected response from the completion API.
    #[error("Invalid response from completion API: {0}")]
    InvalidResponse(String),
}

/// Represents errors that can occur when looking up an image for a dish.
///
/// # Examples
///
/// ```
/// use moodbuddy::errors::ImageError;
///
/// let error = ImageError::Status(503);
/// assert!(format!("{}", error).contains("503"));
/// ```
#[derive(Debug, Error)]
pub enum ImageError {
    /// Image search API is not reachable or the request timed out.
    #[error("Image search unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// Image search answered with a non-success status.
    #[error("Image search failed with HTTP status {0}")]
    Status(u16),

    /// The image search body could not be decoded.
    #[error("Invalid response from image search: {0}")]
    InvalidResponse(String),
}

/// Represents errors that can occur when exporting the mood journal.
///
/// # Examples
///
/// ```
/// use moodbuddy::errors::JournalError;
/// use std::path::PathBuf;
///
/// let error = JournalError::EmptyJournal;
/// assert!(format!("{}", error).contains("empty"));
///
/// let error = JournalError::InvalidPath {
///     path: PathBuf::from("/nope/journal.csv"),
///     reason: "parent directory does not exist".to_string(),
/// };
/// assert!(format!("{}", error).contains("/nope/journal.csv"));
/// ```
#[derive(Debug, Error)]
pub enum JournalError {
    /// Nothing has been journaled yet.
    #[error("The mood journal is empty. Share how you feel first, then export.")]
    EmptyJournal,

    /// The export target cannot be used.
    #[error("Cannot export journal to {path}: {reason}")]
    InvalidPath {
        /// The requested export path
        path: PathBuf,
        /// Why the path was rejected
        reason: String,
    },

    /// Writing CSV records failed.
    #[error("Failed to write journal CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Represents all possible errors that can occur in the moodbuddy application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use moodbuddy::errors::AppError;
///
/// let error = AppError::Config("Completion URL is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Completion URL is empty");
/// ```
///
/// Converting from an IO error:
/// ```
/// use moodbuddy::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The user did not say how they feel.
    #[error("Please tell me how you're feeling first. Your comfort awaits!")]
    EmptyMood,

    /// Input/output errors from the terminal or filesystem.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to AI operations.
    #[error("AI error: {0}")]
    AI(#[from] AIError),

    /// Errors related to image lookups.
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    /// Errors related to journal export.
    #[error("Journal error: {0}")]
    Journal(#[from] JournalError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use moodbuddy::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Config("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

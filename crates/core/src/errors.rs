//! Core error types for the goal planner.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, HTTP, etc.) are converted to these types by the
//! crate that owns the storage backend.

use chrono::ParseError as ChronoParseError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for goal operations.
///
/// Every variant is recoverable: a failed operation leaves the goal collection
/// untouched and the caller may retry or pick another action.
#[derive(Error, Debug)]
pub enum Error {
    /// The operation referenced a goal id that does not exist.
    #[error("Goal not found: {0}")]
    NotFound(String),

    /// A deposit amount that is zero or negative.
    #[error("Invalid deposit amount {0}: deposits must be greater than zero")]
    InvalidAmount(Decimal),

    /// The remote goal backend could not be reached or failed to answer.
    #[error("Remote goal store unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage operation failed: {0}")]
    Storage(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// Stable, machine-readable name of the error variant.
    ///
    /// Used as the `kind` field of API error bodies so that remote clients can
    /// rebuild the same variant on their side.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "NotFound",
            Error::InvalidAmount(_) => "InvalidAmount",
            Error::RemoteUnavailable(_) => "RemoteUnavailable",
            Error::Validation(_) => "Validation",
            Error::Storage(_) => "Storage",
            Error::Unexpected(_) => "Unexpected",
        }
    }

    pub fn not_found(goal_id: impl Into<String>) -> Self {
        Error::NotFound(goal_id.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::Validation(ValidationError::InvalidInput(message.into()))
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(format!("Serialization error: {}", err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

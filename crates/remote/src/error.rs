//! Error types for the remote goal store.

use goalplanner_core::errors::{Error as CoreError, ValidationError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for remote operations.
pub type Result<T> = std::result::Result<T, RemoteError>;

/// Errors that can occur while talking to the goal API.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport failure: connection refused, timeout, broken body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a body we could not decode
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error response from the goal API
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        kind: Option<String>,
        message: String,
    },

    /// Invalid client configuration (bad base URL, etc.)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl RemoteError {
    /// Create an API error from status, error kind and message
    pub fn api(status: u16, kind: Option<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            kind,
            message: message.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Converts into the core error taxonomy.
    ///
    /// `amount` is the deposit amount when the failing call was a deposit, so
    /// that a server-side `InvalidAmount` can be rebuilt faithfully.
    pub fn into_core(self, amount: Option<Decimal>) -> CoreError {
        match self {
            RemoteError::Http(e) => CoreError::RemoteUnavailable(e.to_string()),
            RemoteError::Json(e) => {
                CoreError::RemoteUnavailable(format!("Malformed response from goal API: {}", e))
            }
            RemoteError::InvalidRequest(message) => CoreError::Unexpected(message),
            RemoteError::Api {
                status,
                kind,
                message,
            } => match (status, kind.as_deref(), amount) {
                (404, _, _) => CoreError::NotFound(message),
                (_, Some("InvalidAmount"), Some(amount)) => CoreError::InvalidAmount(amount),
                (500..=599, _, _) => {
                    CoreError::RemoteUnavailable(format!("{} ({})", message, status))
                }
                (400..=499, _, _) => {
                    CoreError::Validation(ValidationError::InvalidInput(message))
                }
                _ => CoreError::Unexpected(format!("{} ({})", message, status)),
            },
        }
    }
}

impl From<RemoteError> for CoreError {
    fn from(err: RemoteError) -> Self {
        err.into_core(None)
    }
}

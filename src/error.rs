//! Error types for the Spin client

use std::fmt;
use thiserror::Error;

/// Client result type
pub type Result<T> = std::result::Result<T, SpinError>;

/// Fallback used when the platform reports a failure without a message
pub const UNKNOWN_API_ERROR: &str = "unknown API error";

/// Why a request field failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    /// Required field is absent (or null)
    Missing,
    /// Field is present but has the wrong primitive kind
    WrongKind(&'static str),
    /// Field has the right kind but its value is outside the allowed set
    NotAllowed(String),
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::Missing => write!(f, "is missing"),
            ValidationReason::WrongKind(expected) => write!(f, "must be {expected}"),
            ValidationReason::NotAllowed(detail) => write!(f, "{detail}"),
        }
    }
}

/// Client error types
#[derive(Debug, Error)]
pub enum SpinError {
    /// Request shape violates its method's contract; raised before any I/O
    #[error("invalid request: `{field}` {reason}")]
    Validation {
        field: String,
        reason: ValidationReason,
    },

    /// Network or connection failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Response body is not JSON or lacks the expected envelope
    #[error("decode error: {0}")]
    Decode(String),

    /// Platform answered with a non-zero error code
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    /// Configuration could not be loaded
    #[error("config error: {0}")]
    Config(String),
}

impl SpinError {
    pub(crate) fn validation(field: impl Into<String>, reason: ValidationReason) -> Self {
        SpinError::Validation {
            field: field.into(),
            reason,
        }
    }

    pub(crate) fn api(code: i64, message: Option<String>) -> Self {
        SpinError::Api {
            code,
            message: message.unwrap_or_else(|| UNKNOWN_API_ERROR.to_string()),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SpinError::Validation { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, SpinError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, SpinError::Decode(_))
    }

    /// Server-supplied message when this is an API failure
    pub fn api_message(&self) -> Option<&str> {
        match self {
            SpinError::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SpinError {
    fn from(err: reqwest::Error) -> Self {
        SpinError::Transport(err.to_string())
    }
}

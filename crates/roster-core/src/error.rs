//! Unified error types for all layers of the application.

use crate::UserId;
use thiserror::Error;

/// Unified error type for all layers of Roster.
///
/// Request-level variants carry a fixed, client-facing message; the
/// `Display` text is exactly what ends up in the envelope's `error` field.
#[derive(Error, Debug)]
pub enum RosterError {
    // ============ Request Errors ============
    /// Path identifier is not an integer
    #[error("invalid user ID")]
    InvalidIdentifier(String),

    /// Request body is not valid JSON for the expected shape
    #[error("invalid JSON")]
    MalformedInput(String),

    /// Required field missing or empty
    #[error("name and email are required")]
    ValidationFailed(String),

    /// Required query parameter absent or empty
    #[error("{name} query parameter is required")]
    MissingParameter { name: &'static str },

    // ============ Lookup Errors ============
    /// No record matches the id requested by a read
    #[error("Not found")]
    LookupMiss(UserId),

    /// No record matches the id targeted by a mutation
    #[error("user not found")]
    NotFound(UserId),

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RosterError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidIdentifier(_)
            | Self::MalformedInput(_)
            | Self::ValidationFailed(_)
            | Self::MissingParameter { .. } => 400,
            Self::LookupMiss(_) | Self::NotFound(_) => 404,
            Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier(_) => "INVALID_IDENTIFIER",
            Self::MalformedInput(_) => "MALFORMED_INPUT",
            Self::ValidationFailed(_) => "VALIDATION_FAILED",
            Self::MissingParameter { .. } => "MISSING_PARAMETER",
            Self::LookupMiss(_) | Self::NotFound(_) => "NOT_FOUND",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates an invalid identifier error for the raw path segment.
    #[must_use]
    pub fn invalid_identifier<T: Into<String>>(raw: T) -> Self {
        Self::InvalidIdentifier(raw.into())
    }

    /// Creates a malformed input error with the decoder's diagnostic.
    #[must_use]
    pub fn malformed_input<T: ToString>(cause: T) -> Self {
        Self::MalformedInput(cause.to_string())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(detail: T) -> Self {
        Self::ValidationFailed(detail.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the diagnostic detail kept alongside the client-facing message.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InvalidIdentifier(raw) => Some(format!("cannot parse '{raw}' as an integer")),
            Self::MalformedInput(cause) | Self::ValidationFailed(cause) => Some(cause.clone()),
            Self::LookupMiss(id) | Self::NotFound(id) => Some(format!("no user with id {id}")),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}

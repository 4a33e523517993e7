//! Shared Error Types
//!
//! Errors raised while checking request payloads, before any business logic
//! runs. The backend turns them into `422 Unprocessable Entity` responses that
//! name the offending field.
//!
//! # Usage
//!
//! ```rust
//! use snake_arena::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "must be 3-20 characters");
//! ```
use thiserror::Error;

/// Shared error types for payload handling
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A game mode string that is neither `pass-through` nor `walls`
    #[error("Unknown game mode: {value}")]
    UnknownMode {
        /// The rejected value
        value: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new unknown-mode error
    pub fn unknown_mode(value: impl Into<String>) -> Self {
        Self::UnknownMode {
            value: value.into(),
        }
    }

    /// Name of the field this error refers to
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
            Self::UnknownMode { .. } => "mode",
        }
    }
}

/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 * Each variant maps to one HTTP status and one client-facing message.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `Validation` - a payload or query field broke a rule (422)
 * - `Duplicate` - email or username already in use (400)
 * - `Unauthorized` - missing, invalid, expired or revoked token (401)
 * - `InvalidCredentials` - login failed; unknown email and wrong password look the same (401)
 * - `NotFound` - user, game or player does not exist (404)
 *
 * ## Server Errors
 *
 * - `Storage` - the store failed; detail is logged, never returned
 * - `Internal` - hashing or token signing failed
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::{DuplicateField, StoreError};
use crate::shared::SharedError;

/// Body text for every 401 raised by the auth pipeline
pub const UNAUTHORIZED_MESSAGE: &str = "Authentication required";

/// Body text for a failed login
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use snake_arena::backend::error::BackendError;
///
/// let err = BackendError::not_found("User not found");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// A request field failed validation
    #[error("Validation error in field '{field}': {message}")]
    Validation {
        /// The offending field
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Email or username collision
    #[error("{message}")]
    Duplicate {
        /// Human-readable error message
        message: String,
    },

    /// Authentication failed for any reason
    #[error("Authentication required")]
    Unauthorized,

    /// Login with an unknown email or a wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The requested resource does not exist
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Store failure
    #[error("Storage error: {0}")]
    Storage(StoreError),

    /// Any other server-side failure
    #[error("Internal error: {message}")]
    Internal {
        /// Detail for the logs
        message: String,
    },
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 422 Unprocessable Entity
    /// - `Duplicate` - 400 Bad Request
    /// - `Unauthorized`, `InvalidCredentials` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Storage`, `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Duplicate { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Server errors collapse to a generic message; their detail only
    /// reaches the logs.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Duplicate { message } => message.clone(),
            Self::Unauthorized => UNAUTHORIZED_MESSAGE.to_string(),
            Self::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            Self::NotFound { message } => message.clone(),
            Self::Storage(_) | Self::Internal { .. } => "Internal server error".to_string(),
        }
    }

    /// Field name for validation errors
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        let field = err.field().to_string();
        let message = match err {
            SharedError::ValidationError { message, .. } => message,
            SharedError::UnknownMode { value } => {
                format!("mode must be 'pass-through' or 'walls', got '{}'", value)
            }
        };
        Self::Validation { field, message }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(DuplicateField::Email) => Self::Duplicate {
                message: "Email already exists".to_string(),
            },
            StoreError::Duplicate(DuplicateField::Username) => Self::Duplicate {
                message: "Username already taken".to_string(),
            },
            StoreError::UnknownUser(_) => Self::not_found("User not found"),
            other => {
                tracing::error!("Store failure: {}", other);
                Self::Storage(other)
            }
        }
    }
}

impl From<bcrypt::BcryptError> for BackendError {
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!("Password hashing failed: {:?}", err);
        Self::internal(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for BackendError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        tracing::error!("Token signing failed: {:?}", err);
        Self::internal(err.to_string())
    }
}

//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by address book, codec and repository operations.
///
/// Every variant is recoverable; a failed operation leaves the address
/// book exactly as it was before the call.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field value violates its format rule
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A contact with the same name already exists
    #[error("Contact already exists: {0}")]
    Conflict(String),

    /// Lookup, edit or delete target does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Persisted document is malformed or fails validation
    #[error("Invalid address book document: {0}")]
    Format(String),

    /// Reading or writing the persisted document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for BookError {
    fn from(err: serde_json::Error) -> Self {
        BookError::Format(err.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

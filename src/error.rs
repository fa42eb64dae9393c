//! Error Types
//!
//! Storage, validation and filter errors. None of them are fatal to the app.

use thiserror::Error;

/// Result alias for key-value storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Failures of the persistence layer
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("failed to read key {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("malformed task data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Rejection of user-entered task text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a task.")]
    Empty,

    #[error("Please enter at least {min} characters.")]
    TooShort { min: usize },
}

/// Unknown `data-filter` value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown filter: {0}")]
pub struct FilterParseError(pub String);

//! Core error types for the goal tracker.
//!
//! This module defines storage-agnostic error types. Backend-specific
//! failures (filesystem, platform storage, notification runtime) are
//! converted to these types by the adapter crates.

use std::num::ParseFloatError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the goal tracker.
///
/// Store mutations never produce errors (unknown ids are silent no-ops);
/// everything here originates in builders, services, or external
/// collaborators.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Notification scheduler failed: {0}")]
    Scheduler(#[from] SchedulerError),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),
}

/// Backend-agnostic error type for key-value storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize stored value: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Errors reported by the external notification scheduler.
#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Notification permission denied")]
    PermissionDenied,

    #[error("Failed to schedule notification: {0}")]
    ScheduleFailed(String),

    #[error("Failed to cancel notification {0}")]
    CancelFailed(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(StorageError::Serialization(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(StorageError::Io(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

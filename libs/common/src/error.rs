//! Custom error types for the common library
//!
//! This module defines application-specific error types that can be used
//! throughout the client.

use thiserror::Error;

/// Custom error type for local storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Error occurred while reading or writing a storage file
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A key contained characters that are not safe as a file name
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Type alias for Result with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

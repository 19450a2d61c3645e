//! Custom error types for the StudySync client
//!
//! The `Display` text of every variant is the exact message shown to the
//! user: validation failures carry their inline message, API failures
//! surface the server's detail verbatim, and transport failures collapse
//! to a generic retry prompt.

use thiserror::Error;

/// Custom error type for client operations
#[derive(Error, Debug)]
pub enum ClientError {
    /// A client-side guard rejected the input before any network call
    #[error("{0}")]
    Validation(String),

    /// The API answered with a non-2xx status and a detail message
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// The request could not complete
    #[error("Network error. Please try again.")]
    Network(#[from] reqwest::Error),

    /// Session persistence failed
    #[error("Session storage error: {0}")]
    Storage(#[from] common::error::StorageError),
}

/// Type alias for client results
pub type ClientResult<T> = Result<T, ClientError>;

//! Error types for the OpenRegister settings service.

use thiserror::Error;

/// Result type alias using the settings service Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for settings operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Stored configuration could not be read or decoded.
    #[error("Failed to retrieve {domain} settings: {reason}")]
    ConfigRetrieval { domain: String, reason: String },

    /// Configuration could not be encoded or written to the store.
    #[error("Failed to update {domain} settings: {reason}")]
    ConfigUpdate { domain: String, reason: String },

    /// Requested search backend is not in the available set.
    #[error("Invalid search backend: {0}")]
    InvalidBackend(String),

    /// A dependent service (directory, statistics endpoint) is not
    /// injected or not reachable.
    #[error("Collaborator unavailable: {0}")]
    CollaboratorUnavailable(String),

    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a `ConfigRetrieval` error for a settings domain.
    pub fn retrieval(domain: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Error::ConfigRetrieval {
            domain: domain.into(),
            reason: source.to_string(),
        }
    }

    /// Build a `ConfigUpdate` error for a settings domain.
    pub fn update(domain: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Error::ConfigUpdate {
            domain: domain.into(),
            reason: source.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}

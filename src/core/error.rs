//! Error types for the test plugin.
//!
//! The lifecycle hooks themselves never fail; these errors cover descriptor
//! and logger configuration handling.

use thiserror::Error;

/// Result type alias for plugin operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the lifecycle hooks.
#[derive(Error, Debug)]
pub enum Error {
    // Descriptor errors
    #[error("Invalid plugin descriptor: {0}")]
    InvalidDescriptor(String),

    // Configuration errors
    #[error("Invalid logger configuration: {0}")]
    InvalidConfig(String),

    #[error("Tracing subscriber setup failed: {0}")]
    TracingInit(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

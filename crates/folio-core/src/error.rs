//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// The browser storage area could not be reached at all
    #[error("Storage unavailable")]
    StorageUnavailable,

    /// A read or write against an available storage area failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The email relay could not be reached or rejected the request body
    #[error("Relay error: {0}")]
    Relay(String),

    /// The email relay answered with a non-success HTTP status
    #[error("Relay responded with status {0}")]
    RelayStatus(u16),

    /// The email relay has not been configured for this build
    #[error("Relay not configured")]
    RelayNotConfigured,

    /// Site configuration could not be used
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A stored theme value was not one of the known preferences
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

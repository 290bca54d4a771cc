//! Error types for the blref-core library.
//!
//! Extraction itself never fails; these cover the configuration layer.

use thiserror::Error;

/// Main error type for the blref library.
#[derive(Error, Debug)]
pub enum BlrefError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to configuration values.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Key path does not exist in the configuration.
    #[error("configuration key not found: {0}")]
    KeyNotFound(String),

    /// Key path points through a non-object value.
    #[error("cannot set value at non-object path: {0}")]
    NotAnObject(String),

    /// A value failed validation.
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Result type for the blref library.
pub type Result<T> = std::result::Result<T, BlrefError>;

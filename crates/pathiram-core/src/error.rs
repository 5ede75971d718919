//! Error types for model loading, editing and persistence

use thiserror::Error;

/// Errors raised outside the composer. Composition itself never fails.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Error reading or writing files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Model file extension is neither .json nor .toml
    #[error("Unsupported model format: {0}")]
    UnsupportedFormat(String),

    /// An edit that cannot be applied to the current model
    #[error("Invalid edit: {0}")]
    InvalidEdit(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

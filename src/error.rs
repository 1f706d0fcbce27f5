//! # Error Types
//!
//! This module defines error types used throughout the hangar-docs library.

use thiserror::Error;

/// Main error type for hangar-docs operations
#[derive(Debug, Error)]
pub enum DocsError {
    /// A tag color outside the four airworthiness classifications
    #[error("Unknown tag color: {0:?}")]
    UnknownTagColor(String),

    /// QR embedding was requested but no base URL was supplied
    #[error("QR code requested without a base URL")]
    MissingBaseUrl,

    /// Base URL that cannot produce a scannable deep link
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// QR encoding service failure
    #[error("QR encoding error: {0}")]
    QrEncoding(String),

    /// Record payload that cannot be interpreted
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV export error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl DocsError {
    /// Whether the error stems from caller-supplied input or configuration
    /// rather than an internal failure.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownTagColor(_)
                | Self::MissingBaseUrl
                | Self::InvalidBaseUrl(_)
                | Self::InvalidRecord(_)
                | Self::Config(_)
                | Self::Json(_)
        )
    }
}

/// Result alias for hangar-docs operations
pub type Result<T> = std::result::Result<T, DocsError>;

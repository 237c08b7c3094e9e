//! Error types for the Bawa gateway client.

use thiserror::Error;

/// Result type for Bawa client operations.
pub type Result<T> = std::result::Result<T, BawaError>;

/// Bawa gateway client errors.
#[derive(Debug, Error)]
pub enum BawaError {
    /// Configuration error (missing token or instance id)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, DNS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Gateway returned a non-success status
    #[error("Gateway error {status}: {body}")]
    Api { status: u16, body: String },

    /// Parse error (success response was not valid JSON)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl BawaError {
    /// HTTP status code for `Api` errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            BawaError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

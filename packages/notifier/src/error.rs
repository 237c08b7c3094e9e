//! Typed errors for the notification engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so that the dispatch
//! loop can distinguish a bad recipient address from a gateway failure.

use thiserror::Error;

/// Errors that can occur while notifying recipients.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Recipient contact number is unusable
    #[error("invalid phone number: {reason}")]
    InvalidPhone { reason: String },

    /// Gateway call failed (transport error or non-success response)
    #[error("gateway error: {0}")]
    Gateway(#[from] bawa::BawaError),

    /// Dispatch was cancelled by the caller
    #[error("dispatch cancelled")]
    Cancelled,
}

/// Result type alias for notification operations.
pub type Result<T> = std::result::Result<T, NotifyError>;

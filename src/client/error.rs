//! Client error types.
//!
//! Provides error types for API client operations.

/// Client errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Request rejected locally before any network I/O.
    #[error("validation error: {0}")]
    Validation(String),

    /// API returned an error response.
    #[error("API error [{status}]: {reason}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-supplied failure reason.
        reason: String,
    },

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to deserialize response.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns the HTTP status code for API errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for errors raised before any request was sent.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidConfig(_))
    }
}

//! Error types for SoulMate backend calls.

use thiserror::Error;

/// Errors that can occur when talking to the SoulMate backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend returned a non-success status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Missing or expired session
    #[error("Authentication required")]
    Unauthorized,

    /// Account exists but has not been approved yet
    #[error("Your account is awaiting approval")]
    AccountPending,

    /// Account was rejected by an administrator
    #[error("Your account has been rejected. Please contact support.")]
    AccountRejected,

    /// Backend could not be reached at all
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),

    /// Invalid backend URL in configuration
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ApiError::ServerUnreachable(e.to_string())
        } else {
            ApiError::Request(e)
        }
    }

    #[allow(dead_code)]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

/// Result type for backend operations.
pub type Result<T> = std::result::Result<T, ApiError>;

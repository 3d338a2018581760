//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the admin backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// The `error` field of the response body, or the raw body.
        message: String,
    },

    /// The session cookie is missing, expired, or lacks the required role.
    #[error("unauthorized ({status})")]
    Unauthorized { status: u16 },

    /// Failed to parse a backend response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The configured base URL cannot be used to build requests.
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Message suitable for an error toast.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Unauthorized { .. } => "Your session has expired. Please sign in again.".into(),
            Self::Http(_) => "Network error. Please try again.".into(),
            Self::Parse(_) | Self::InvalidUrl(_) => "Unexpected response from the server.".into(),
        }
    }
}

//! Error handling for the L8 Events client

use std::fmt;
use thiserror::Error;

/// Unified error type for the L8 Events client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The backend rejected the bearer token (401/403); the stored
    /// session has been cleared and the call's result is void
    #[error("session expired")]
    SessionExpired,

    /// The backend rejected the request body (400) with a
    /// user-displayable message and, when present, the raw error
    /// payload for field-level mapping
    #[error("{message}")]
    Validation {
        /// Display message from the backend (`message` or `details`)
        message: String,
        /// Raw parsed error body, if the backend sent one
        details: Option<serde_json::Value>,
    },

    /// Any other non-success response (5xx and friends)
    #[error("Server error: {status} {status_text}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Canonical status text
        status_text: String,
    },

    /// General errors
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Create a new validation error without a structured payload
    pub fn validation<T: fmt::Display>(msg: T) -> Self {
        Error::Validation {
            message: msg.to_string(),
            details: None,
        }
    }

    /// Create a new general error
    pub fn general<T: fmt::Display>(msg: T) -> Self {
        Error::General(msg.to_string())
    }

    /// Whether this error is a network-flavored failure worth retrying.
    ///
    /// Only transport-level failures qualify; a response that reached us
    /// (validation, auth, server error) is never transient.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Http(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }
}

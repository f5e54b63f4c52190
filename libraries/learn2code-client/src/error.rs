//! Error types for the Learn2Code API client.

use thiserror::Error;

/// Errors that can occur when calling the Learn2Code backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Backend answered with a non-2xx status.
    ///
    /// `message` is the backend's `message` field when it sent one, otherwise
    /// a synthesized `Request failed (<status> <reason>)`.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// The request never produced an HTTP response (connection refused, DNS, ...)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// A caller-supplied header name or value is not valid HTTP
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// A request body could not be encoded as JSON
    #[error("Failed to encode request body: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A 2xx response body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Human-readable message to show the user
    pub fn message(&self) -> String {
        match self {
            ApiError::RequestFailed { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of a failed request, if the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the backend rejected the caller's identity
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

/// Result type for API client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

//! API error types

use thiserror::Error;
use vcloak_session::SessionError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-2xx response. `message` is the body's `error` field when present.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The response body was not JSON
    #[error("Invalid response body (status {status}): {source}")]
    InvalidBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid endpoint {endpoint}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Could not serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A login response carried a token but an unusable `user`
    #[error("Malformed login response: {0}")]
    MalformedLogin(#[source] serde_json::Error),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

impl ApiError {
    /// HTTP status, when a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } | ApiError::InvalidBody { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

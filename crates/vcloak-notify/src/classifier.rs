//! Error classification
//!
//! A known status (401, 403, 404, 500) decides directly. Anything else,
//! including transport failures, falls back to matching the message text the
//! way the web dashboards always did.

use serde::{Deserialize, Serialize};
use vcloak_api::ApiError;
use vcloak_navigation::Page;

pub const FALLBACK_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    AuthExpired,
    Forbidden,
    NotFound,
    ServerError,
    Unclassified,
}

impl ErrorKind {
    fn from_status(status: u16) -> Option<Self> {
        match status {
            401 => Some(ErrorKind::AuthExpired),
            403 => Some(ErrorKind::Forbidden),
            404 => Some(ErrorKind::NotFound),
            500 => Some(ErrorKind::ServerError),
            _ => None,
        }
    }

    fn from_message(message: &str) -> Self {
        if message.contains("401") || message.contains("Unauthorized") {
            ErrorKind::AuthExpired
        } else if message.contains("403") || message.contains("Forbidden") {
            ErrorKind::Forbidden
        } else if message.contains("404") {
            ErrorKind::NotFound
        } else if message.contains("500") {
            ErrorKind::ServerError
        } else {
            ErrorKind::Unclassified
        }
    }

    /// Fixed notice text; `None` means the raw message is shown
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            ErrorKind::AuthExpired => Some("Session expired. Please login again."),
            ErrorKind::Forbidden => Some("You do not have permission to access this resource."),
            ErrorKind::NotFound => Some("Resource not found."),
            ErrorKind::ServerError => Some("Server error. Please try again later."),
            ErrorKind::Unclassified => None,
        }
    }

    /// Page to send the user to once the notice has been shown
    pub fn redirect(&self) -> Option<Page> {
        match self {
            ErrorKind::AuthExpired => Some(Page::Login),
            _ => None,
        }
    }
}

/// User-facing interpretation of a failed call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    /// Text to show the user
    pub message: String,
}

pub fn classify(status: Option<u16>, message: &str) -> ClassifiedError {
    let kind = status
        .and_then(ErrorKind::from_status)
        .unwrap_or_else(|| ErrorKind::from_message(message));

    let message = match kind.notice() {
        Some(notice) => notice.to_string(),
        None if message.trim().is_empty() => FALLBACK_MESSAGE.to_string(),
        None => message.to_string(),
    };

    ClassifiedError {
        kind,
        status,
        message,
    }
}

impl From<&ApiError> for ClassifiedError {
    fn from(error: &ApiError) -> Self {
        classify(error.status(), &error.to_string())
    }
}

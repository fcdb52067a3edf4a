//! Error type shared by every REST call.
//!
//! ERROR HANDLING
//! ==============
//! No API failure is fatal. Pages convert an `ApiError` into a display string
//! with [`ApiError::user_message`], preferring the backend's own `message`
//! over the page's static fallback text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("server responded {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },
    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The backend answered 2xx but refused the operation.
    #[error("{0}")]
    Rejected(String),
    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl ApiError {
    /// The backend-provided message, if the backend sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => Some(message),
            Self::Rejected(message) if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Text to show the user: the backend message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }

    /// Build the error for a non-2xx response.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        Self::Status { status, message }
    }
}

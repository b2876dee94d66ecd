//! Error types for client operations

use thiserror::Error;

/// Errors raised by a [`SessionProvider`](crate::core::session::SessionProvider)
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No user is logged in")]
    NotLoggedIn,

    #[error("Token unavailable: {0}")]
    TokenUnavailable(String),
}

/// Error types that can occur while calling the backend
///
/// There is no HTTP status variant: a non-2xx response with a
/// JSON body resolves successfully with that body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] SessionError),

    #[error("Content-Type: application/json is required")]
    ContentType,

    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error("Failed to serialize request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Settings error: {0}")]
    Settings(String),
}

//! Shared error type for every backend gateway.
//!
//! All ports fail with [`ApiError`] so screens handle failure uniformly:
//! show a message, keep whatever was already on screen, let the user
//! retry by hand. Nothing auto-retries.

use serde::{Deserialize, Serialize};

/// Errors from backend gateway operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for categorization.
    pub code: ApiErrorCode,

    /// Internal message, for logs.
    pub message: String,

    /// Message supplied by the server, shown to the user verbatim
    /// when present.
    pub server_message: Option<String>,

    /// Whether a user-initiated retry is worth offering.
    pub retryable: bool,
}

impl ApiError {
    /// Create a new API error.
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            server_message: None,
            retryable: code.is_retryable(),
        }
    }

    /// Attach the server-supplied message.
    pub fn with_server_message(mut self, message: impl Into<String>) -> Self {
        self.server_message = Some(message.into());
        self
    }

    /// Create a network connectivity error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Network, message)
    }

    /// Create an authentication error. The session is no longer valid.
    pub fn unauthorized() -> Self {
        Self::new(ApiErrorCode::Unauthorized, "Session rejected by backend")
    }

    /// Create a not found error.
    pub fn not_found(resource: &str) -> Self {
        Self::new(ApiErrorCode::NotFound, format!("{} not found", resource))
    }

    /// Create a server error from an HTTP status.
    pub fn server(status: u16) -> Self {
        Self::new(
            ApiErrorCode::Server { status },
            format!("Backend returned status {}", status),
        )
    }

    /// Create a response decoding error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Decode, message)
    }

    /// True when the session must be re-established before retrying.
    pub fn requires_login(&self) -> bool {
        matches!(self.code, ApiErrorCode::Unauthorized)
    }

    /// The message a screen should surface.
    ///
    /// The server's own wording wins when it sent one; otherwise a
    /// generic per-category message.
    pub fn display_message(&self) -> String {
        if let Some(server_message) = &self.server_message {
            return server_message.clone();
        }
        match self.code {
            ApiErrorCode::Unauthorized => "Please log in again.".to_string(),
            ApiErrorCode::Network => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ApiErrorCode::NotFound => "The requested record was not found.".to_string(),
            ApiErrorCode::Server { .. } | ApiErrorCode::Decode => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    /// Bearer token missing, expired, or rejected.
    Unauthorized,

    /// Request never produced an HTTP response.
    Network,

    /// Resource missing on the backend.
    NotFound,

    /// Backend answered with a non-success status.
    Server { status: u16 },

    /// Response body did not match the expected shape.
    Decode,
}

impl ApiErrorCode {
    /// Check if this error type is typically worth a manual retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiErrorCode::Network | ApiErrorCode::Server { status: 500..=599 }
        )
    }
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiErrorCode::Unauthorized => write!(f, "unauthorized"),
            ApiErrorCode::Network => write!(f, "network"),
            ApiErrorCode::NotFound => write!(f, "not_found"),
            ApiErrorCode::Server { status } => write!(f, "server_{}", status),
            ApiErrorCode::Decode => write!(f, "decode"),
        }
    }
}

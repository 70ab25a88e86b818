//! Gateway error types

use thiserror::Error;

/// Gateway error type
///
/// Normalizes both transport-level failures and backend-reported
/// non-success responses into a single error surface, so callers never
/// have to inspect raw responses.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP request failed (connection, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded into the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Backend reported non-success with a message
    #[error("Backend error: {0}")]
    Backend(String),

    /// Authentication required or session rejected
    #[error("Authentication required")]
    Unauthorized,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Outbound record payload was not a JSON object
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl GatewayError {
    /// Message suitable for a user-visible error toast
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(_) => "Could not reach the server. Please try again.".to_string(),
            Self::Backend(msg) => msg.clone(),
            Self::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            Self::NotFound(what) => format!("{} not found", what),
            Self::InvalidResponse(_) | Self::Serialization(_) => {
                "Unexpected server response. Please try again.".to_string()
            }
            Self::InvalidPayload(_) => "Invalid data submitted.".to_string(),
        }
    }
}

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

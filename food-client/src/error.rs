//! Client error types

use http::StatusCode;
use shared::error::ErrorBody;
use shared::validation::ValidationError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response not covered by a more specific variant
    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        code: Option<u16>,
        message: String,
    },

    /// Authentication required or rejected
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found on the server
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server rejected the request body
    #[error("Validation error: {0}")]
    Validation(String),

    /// Local input check failed before any request was made
    #[error("{0}")]
    Input(#[from] ValidationError),

    /// No user matches the email/password pair
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The target of an operation is missing from the screen's local list
    #[error("Not in local state: {0}")]
    NotInLocalState(String),

    /// Operation not allowed in the screen's current state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Configuration could not be read
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Map a failed response to an error, preferring the backend's own message
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body).into_owned();
        let (code, message) = match serde_json::from_slice::<ErrorBody>(body) {
            Ok(err) => (Some(err.code), err.message),
            Err(_) => (None, text),
        };
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized(message),
            StatusCode::FORBIDDEN => Self::Forbidden(message),
            StatusCode::NOT_FOUND => Self::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::Validation(message),
            _ => Self::Api {
                status: status.as_u16(),
                code,
                message,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_message_is_used() {
        let body = br#"{"code":6101,"message":"category 9 not found"}"#;
        let err = ClientError::from_status(StatusCode::NOT_FOUND, body);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Not found: category 9 not found");
    }

    #[test]
    fn test_plain_text_body_falls_back() {
        let err = ClientError::from_status(StatusCode::BAD_GATEWAY, b"upstream down");
        match err {
            ClientError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 502);
                assert_eq!(code, None);
                assert_eq!(message, "upstream down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

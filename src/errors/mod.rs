//! Error handling module for the Skrymi client.
//!
//! Every backend interaction funnels its failures into [`ClientError`]. Callers in the
//! dispatcher log them and abandon the triggering action; nothing here is fatal.

use reqwest::StatusCode;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const HTTP_ERROR: &str = "HTTP_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const INVALID_INPUT: &str = "INVALID_INPUT";
}

/// Longest response body excerpt kept in a status error.
const BODY_SNIPPET_LEN: usize = 1024;

/// Client error type.
#[derive(Debug)]
pub enum ClientError {
    /// Network or connection failure
    Transport(String),
    /// The backend answered with a non-success status
    Status { status: StatusCode, message: String },
    /// The response body could not be decoded
    Decode(String),
    /// Invalid configuration
    Config(String),
    /// Rejected before any request was issued
    InvalidInput(String),
}

impl ClientError {
    /// Build a status error from a response status and its body text.
    pub fn status(status: StatusCode, body: &str) -> Self {
        let message: String = body.chars().take(BODY_SNIPPET_LEN).collect();
        ClientError::Status { status, message }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Transport(_) => codes::TRANSPORT_ERROR,
            ClientError::Status { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN =>
            {
                codes::UNAUTHORIZED
            }
            ClientError::Status { .. } => codes::HTTP_ERROR,
            ClientError::Decode(_) => codes::DECODE_ERROR,
            ClientError::Config(_) => codes::CONFIG_ERROR,
            ClientError::InvalidInput(_) => codes::INVALID_INPUT,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            ClientError::Transport(msg) => msg.clone(),
            ClientError::Status { status, message } => format!("{status} {message}"),
            ClientError::Decode(msg) => msg.clone(),
            ClientError::Config(msg) => msg.clone(),
            ClientError::InvalidInput(msg) => msg.clone(),
        }
    }

    /// Whether the backend refused the request for lack of an admin session.
    pub fn is_unauthorized(&self) -> bool {
        self.error_code() == codes::UNAUTHORIZED
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            tracing::warn!("Response decode error: {:?}", err);
            return ClientError::Decode(format!("Decode error: {}", err));
        }
        tracing::warn!("Transport error: {:?}", err);
        ClientError::Transport(format!("Transport error: {}", err))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        tracing::warn!("JSON error: {:?}", err);
        ClientError::Decode(format!("JSON error: {}", err))
    }
}

/// Result alias used across the client.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_codes() {
        let forbidden = ClientError::status(StatusCode::FORBIDDEN, "Unauthorized");
        assert_eq!(forbidden.error_code(), codes::UNAUTHORIZED);
        assert!(forbidden.is_unauthorized());

        let bad_password = ClientError::status(StatusCode::UNAUTHORIZED, "Bad password");
        assert!(bad_password.is_unauthorized());

        let bad_index = ClientError::status(StatusCode::BAD_REQUEST, "Index invalide");
        assert_eq!(bad_index.error_code(), codes::HTTP_ERROR);
        assert!(!bad_index.is_unauthorized());
    }

    #[test]
    fn test_status_body_is_truncated() {
        let body = "x".repeat(4096);
        match ClientError::status(StatusCode::INTERNAL_SERVER_ERROR, &body) {
            ClientError::Status { message, .. } => assert_eq!(message.len(), BODY_SNIPPET_LEN),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_display_includes_code() {
        let err = ClientError::InvalidInput("slot is required".to_string());
        assert_eq!(err.to_string(), "INVALID_INPUT: slot is required");
    }

    #[test]
    fn test_from_json_error_is_decode() {
        let err: ClientError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.error_code(), codes::DECODE_ERROR);
    }
}

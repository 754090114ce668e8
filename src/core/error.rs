//! Uniform failure type for backend calls.

use thiserror::Error;

pub const SERVER_ERROR_MESSAGE: &str = "Server error occurred";
pub const NO_RESPONSE_MESSAGE: &str = "No response from server. Please check your connection.";
pub const SETUP_ERROR_MESSAGE: &str = "Error setting up request";
pub const MALFORMED_MESSAGE: &str = "Unexpected response from server";

/// Every backend call fails with one of these. `Display` is the message shown
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A response arrived with a non-2xx status.
    #[error("{}", .detail.as_deref().unwrap_or(SERVER_ERROR_MESSAGE))]
    Server { status: u16, detail: Option<String> },

    /// The request went out but nothing came back.
    #[error("{}", NO_RESPONSE_MESSAGE)]
    NoResponse { reason: String },

    /// The request could not be built or sent.
    #[error("{}", SETUP_ERROR_MESSAGE)]
    Setup { reason: String },

    /// A 2xx response whose body does not have the expected shape.
    #[error("{}", MALFORMED_MESSAGE)]
    Malformed { reason: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_prefers_detail() {
        let err = ApiError::Server {
            status: 404,
            detail: Some("No price data found for symbol ZZZZ".to_string()),
        };
        assert_eq!(err.to_string(), "No price data found for symbol ZZZZ");
        assert_eq!(err.status(), Some(404));

        let err = ApiError::Server {
            status: 500,
            detail: None,
        };
        assert_eq!(err.to_string(), SERVER_ERROR_MESSAGE);
    }

    #[test]
    fn test_transport_messages_hide_reason() {
        let err = ApiError::NoResponse {
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), NO_RESPONSE_MESSAGE);
        assert_eq!(err.status(), None);

        let err = ApiError::Setup {
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(err.to_string(), SETUP_ERROR_MESSAGE);
    }
}

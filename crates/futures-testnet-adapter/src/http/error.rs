/*
[INPUT]:  Error sources (transport, exchange API, serialization, configuration)
[OUTPUT]: Structured error type for every adapter call
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Main error type for the futures adapter
#[derive(Error, Debug)]
pub enum FuturesError {
    /// Network or connectivity failure reaching the exchange
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Exchange rejected the request
    #[error("API error {status_code} (code {code}): {message}")]
    Api {
        status_code: u16,
        code: i64,
        message: String,
    },

    /// Signed endpoint called without credentials
    #[error("API credentials are required for this endpoint")]
    MissingCredentials,

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error payload returned by the exchange on rejected requests
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: i64,
    msg: String,
}

impl FuturesError {
    /// True when the exchange was never reached or the connection broke
    pub fn is_transport(&self) -> bool {
        matches!(self, FuturesError::Http(_))
    }

    /// True when the exchange answered with a rejection
    pub fn is_api_error(&self) -> bool {
        matches!(self, FuturesError::Api { .. })
    }

    /// HTTP status code, if one is known
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FuturesError::Api { status_code, .. } => Some(*status_code),
            FuturesError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Create an API error from status code, exchange code and message
    pub fn api_error(status: StatusCode, code: i64, message: impl Into<String>) -> Self {
        FuturesError::Api {
            status_code: status.as_u16(),
            code,
            message: message.into(),
        }
    }

    /// Build an API error from a non-success response body.
    ///
    /// Falls back to the raw body when it is not the exchange's `{code, msg}` shape.
    pub fn from_response_body(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => Self::api_error(status, parsed.code, parsed.msg),
            Err(_) => {
                let message = if body.trim().is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("empty response body")
                        .to_string()
                } else {
                    body.to_string()
                };
                Self::api_error(status, -1, message)
            }
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, FuturesError>;

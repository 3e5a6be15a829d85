//! Error types for the Mudrex SDK
//!
//! Every failed call surfaces exactly one [`MudrexError`]. Failures that
//! happen before an HTTP status is known (connection refused, timeout, body
//! read) are [`MudrexError::Http`]; responses the venue rejected with a
//! status >= 400 are [`MudrexError::Api`] carrying a classified [`ApiError`].

use crate::types::{api::Envelope, constants::error_codes};
use std::fmt;
use thiserror::Error;

/// Result type alias for Mudrex operations
pub type Result<T> = std::result::Result<T, MudrexError>;

/// Main error type for Mudrex SDK operations
#[derive(Error, Debug)]
pub enum MudrexError {
    /// Transport-level failure: the API could not be reached or the
    /// response could not be read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API rejected the call
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid parameter errors, raised before any request is sent
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A successful response did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl MudrexError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new invalid parameter error
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Create a new invalid response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// The classified API error, if the venue rejected the call
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// The kind of API error, if the venue rejected the call
    pub fn kind(&self) -> Option<ApiErrorKind> {
        self.api_error().map(|err| err.kind)
    }

    /// Whether the failure happened before any HTTP status was received
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Whether the transport gave up because the round trip timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(err) if err.is_timeout())
    }
}

/// Closed set of API error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 401: missing or invalid API secret
    Authentication,
    /// 429: the venue's request ceiling was hit
    RateLimit,
    /// 400 and other 4xx: the request was malformed or not allowed
    Validation,
    /// A validation error caused by insufficient funds
    InsufficientBalance,
    /// 404
    NotFound,
    /// 409
    Conflict,
    /// 5xx and anything unrecognized
    Server,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApiErrorKind::Authentication => "authentication",
            ApiErrorKind::RateLimit => "rate limit",
            ApiErrorKind::Validation => "validation",
            ApiErrorKind::InsufficientBalance => "insufficient balance",
            ApiErrorKind::NotFound => "not found",
            ApiErrorKind::Conflict => "conflict",
            ApiErrorKind::Server => "server",
        };
        f.write_str(name)
    }
}

/// An error response returned by the Mudrex API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Mudrex API {kind} error (code={code}, status={status}): {message}")]
pub struct ApiError {
    /// Classified kind
    pub kind: ApiErrorKind,
    /// Venue error code, the HTTP status when the venue sent none, or
    /// [`error_codes::UNKNOWN`] when the body was not an envelope
    pub code: i32,
    /// Human-readable message, or the raw body when it was not an envelope
    pub message: String,
    /// HTTP status of the response
    pub status: u16,
}

impl ApiError {
    /// Whether the response body could not be decoded as an envelope
    pub fn is_unparsed(&self) -> bool {
        self.code == error_codes::UNKNOWN
    }

    /// Whether the venue reported insufficient funds
    pub fn is_insufficient_balance(&self) -> bool {
        self.kind == ApiErrorKind::InsufficientBalance
    }
}

/// Classify a failed response from its HTTP status and raw body.
///
/// Only called for statuses >= 400; anything below that falls through to
/// [`ApiErrorKind::Server`] like any other unrecognized status.
pub fn classify(status: u16, body: &[u8]) -> ApiError {
    let (code, message) = match serde_json::from_slice::<Envelope>(body) {
        Ok(envelope) => match envelope.error {
            Some(detail) => (detail.code, detail.message),
            None => (i32::from(status), envelope.message),
        },
        Err(_) => (
            error_codes::UNKNOWN,
            String::from_utf8_lossy(body).into_owned(),
        ),
    };

    let kind = match status {
        401 => ApiErrorKind::Authentication,
        429 => ApiErrorKind::RateLimit,
        404 => ApiErrorKind::NotFound,
        409 => ApiErrorKind::Conflict,
        500 | 502 | 503 | 504 => ApiErrorKind::Server,
        400..=499 => client_error_kind(code, &message),
        _ => ApiErrorKind::Server,
    };

    ApiError {
        kind,
        code,
        message,
        status,
    }
}

// The venue has no dedicated status for this, so it is sniffed from the code
// and the message text.
fn client_error_kind(code: i32, message: &str) -> ApiErrorKind {
    if code == error_codes::INSUFFICIENT_BALANCE || message.contains("insufficient balance") {
        ApiErrorKind::InsufficientBalance
    } else {
        ApiErrorKind::Validation
    }
}

//! Gadfly error types

use std::time::Duration;

/// Gadfly error types
#[derive(Debug, thiserror::Error)]
pub enum GadflyError {
    /// Configured base URL failed to parse. Raised at client construction,
    /// never mid-call.
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),

    /// Response envelope malformed at the HTTP layer (a 200 with no body to
    /// even attempt decoding). Distinct from [`Parsing`](Self::Parsing),
    /// which covers bodies that exist but don't decode.
    #[error("invalid response from server")]
    InvalidResponse,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Parsing(#[from] serde_json::Error),

    #[error("rate limit exceeded, retry after {retry_after:?}")]
    RateLimitExceeded { retry_after: Option<Duration> },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("empty response from model")]
    EmptyResponse,
}

impl GadflyError {
    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// The client never retries on its own; this classification exists for
    /// callers that layer their own policy on top. Rate limiting, transport
    /// faults (timeouts included), server-side 5xx statuses, and empty
    /// completions are considered retryable; everything else is permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            GadflyError::RateLimitExceeded { .. }
            | GadflyError::Network(_)
            | GadflyError::EmptyResponse => true,
            GadflyError::Api { status, .. } => (500..=599).contains(status),
            _ => false,
        }
    }

    /// Server-provided retry hint, when one was given (HTTP 429 only).
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            GadflyError::RateLimitExceeded { retry_after } => *retry_after,
            _ => None,
        }
    }
}

/// Result type alias for gadfly operations
pub type Result<T> = std::result::Result<T, GadflyError>;

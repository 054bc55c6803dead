//! Error types for the trend fetcher
//!
//! This module defines the failure modes of the outbound trends request.

use thiserror::Error;

/// Errors that can occur while fetching trend data
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connection refused, DNS, TLS, ...)
    #[error("Network request failed: {0}")]
    Network(String),

    /// Endpoint answered with a non-2xx status
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// Same-origin-policy rejection
    #[error("Cross-origin request rejected: {0}")]
    CrossOrigin(String),

    /// Request timeout
    #[error("Request timeout")]
    Timeout,

    /// Maximum retry attempts exceeded
    #[error("Maximum retry attempts exceeded, last error: {0}")]
    MaxRetriesExceeded(Box<FetchError>),

    /// Body could not be decoded as JSON
    #[error("Decoding error: {0}")]
    Decode(String),

    /// Invalid endpoint URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Header value could not be encoded (API key, origin)
    #[error("Invalid header value for {0}")]
    InvalidHeader(&'static str),

    /// Body has none of the recognized item-collection keys
    #[error("Malformed response: no item collection under {0}")]
    MalformedResponse(String),
}

impl FetchError {
    /// Short label used for metrics and logs
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Status(_) => "status",
            Self::CrossOrigin(_) => "cross_origin",
            Self::Timeout => "timeout",
            Self::MaxRetriesExceeded(_) => "max_retries",
            Self::Decode(_) => "decode",
            Self::InvalidUrl(_) => "invalid_url",
            Self::InvalidHeader(_) => "invalid_header",
            Self::MalformedResponse(_) => "malformed",
        }
    }

    /// Whether another attempt could succeed
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout => true,
            Self::Status(code) => matches!(code, 429 | 500 | 502 | 503 | 504),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(FetchError::Timeout.kind(), "timeout");
        assert_eq!(FetchError::Status(404).kind(), "status");
        assert_eq!(
            FetchError::CrossOrigin("no header".to_string()).kind(),
            "cross_origin"
        );
    }

    #[test]
    fn test_transient_statuses() {
        assert!(FetchError::Status(503).is_transient());
        assert!(FetchError::Timeout.is_transient());
        assert!(!FetchError::Status(404).is_transient());
        assert!(!FetchError::CrossOrigin(String::new()).is_transient());
    }

    #[test]
    fn test_max_retries_message_keeps_cause() {
        let err = FetchError::MaxRetriesExceeded(Box::new(FetchError::Status(502)));
        assert!(err.to_string().contains("502"));
    }
}

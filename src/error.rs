//! Unified error handling for the trendscope crate
//!
//! Domain-specific errors are wrapped into a single [`Error`] enum so they can
//! cross module boundaries, while [`TrendscopeErrorTrait`] gives callers a
//! common way to classify them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use trendscope::error::{Error, TrendscopeErrorTrait};
//!
//! fn report(err: Error) {
//!     if err.is_recoverable() {
//!         println!("Try again: {}", err.user_message());
//!     } else {
//!         eprintln!("Fatal error: {err}");
//!     }
//! }
//! ```

use thiserror::Error;

pub use crate::server::ServerError;
pub use crate::utils::error::FetchError;

/// Common trait for all trendscope error types
pub trait TrendscopeErrorTrait: std::error::Error {
    /// Check if this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Message suitable for showing to a dashboard user
    fn user_message(&self) -> String;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (HTTP, timeout, cross-origin)
    Network,
    /// Response decoding errors
    Parsing,
    /// Configuration and validation errors
    Config,
    /// HTTP server errors
    Server,
}

impl ErrorCategory {
    /// Human readable label
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Parsing => "parsing",
            Self::Config => "config",
            Self::Server => "server",
        }
    }
}

impl TrendscopeErrorTrait for FetchError {
    fn is_recoverable(&self) -> bool {
        self.is_transient()
    }

    fn user_message(&self) -> String {
        match self {
            Self::CrossOrigin(_) => {
                "The trends API refused access from this origin. Showing sample data instead."
                    .to_string()
            }
            Self::Timeout => "The trends API took too long to respond.".to_string(),
            Self::Status(code) => format!("The trends API answered with status {code}."),
            Self::MalformedResponse(_) => {
                "The trends API returned data in an unexpected shape.".to_string()
            }
            other => format!("Could not reach the trends API: {other}"),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Decode(_) | Self::MalformedResponse(_) => ErrorCategory::Parsing,
            Self::InvalidUrl(_) | Self::InvalidHeader(_) => ErrorCategory::Config,
            _ => ErrorCategory::Network,
        }
    }
}

/// Unified error type for the trendscope crate
#[derive(Error, Debug)]
pub enum Error {
    /// Trend fetch errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Dashboard API server errors
    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrendscopeErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Fetch(e) => e.is_recoverable(),
            Self::Server(ServerError::BindError(_)) => true,
            Self::Server(_) | Self::Json(_) => false,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::Fetch(e) => e.user_message(),
            Self::Server(ServerError::ConfigError(msg)) => format!("Invalid configuration: {msg}"),
            other => other.to_string(),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Fetch(e) => e.category(),
            Self::Server(ServerError::ConfigError(_)) => ErrorCategory::Config,
            Self::Server(_) => ErrorCategory::Server,
            Self::Json(_) => ErrorCategory::Parsing,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;

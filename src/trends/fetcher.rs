//! HTTP fetcher for the third-party trends API
//!
//! This module provides the outbound request path with:
//! - JSON `Accept` header and optional `X-API-KEY`
//! - Rate limiting with governor
//! - Optional retry with exponential backoff on transient failures
//! - Same-origin checks emulating a browser when an origin is configured
//! - Cross-origin classification of generic fetch failures

use async_trait::async_trait;
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use regex::Regex;
use reqwest::{
    header::{HeaderMap, ACCESS_CONTROL_ALLOW_ORIGIN},
    Client, StatusCode,
};
use serde_json::Value;
use std::error::Error as _;
use std::num::NonZeroU32;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

use crate::config::ApiConfig;
use crate::utils::error::FetchError;

use super::headers::build_api_headers;

/// Anything that can produce a raw trends response body
#[async_trait]
pub trait TrendSource: Send + Sync {
    /// Fetch and decode one response body
    async fn fetch_raw(&self) -> Result<Value, FetchError>;
}

/// Whether a failure message carries the generic fetch-failure signature
///
/// Browsers and proxies report same-origin rejections as opaque network
/// errors; these phrases are what distinguishes them.
pub fn matches_cross_origin_signature(message: &str) -> bool {
    static SIGNATURE: OnceLock<Regex> = OnceLock::new();

    let re = SIGNATURE.get_or_init(|| {
        Regex::new(
            r"(?i)failed to fetch|networkerror when attempting to fetch|\bcors\b|cross-origin|access-control-allow-origin",
        )
        .expect("Invalid regex pattern")
    });

    re.is_match(message)
}

/// Trends API client
pub struct TrendFetcher {
    /// HTTP client with configured timeout and compression
    client: Client,

    /// Rate limiter to control request frequency
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,

    /// Trends endpoint
    endpoint: Url,

    /// Headers sent with every request
    headers: HeaderMap,

    /// Dashboard origin, when same-origin checks are enabled
    origin: Option<String>,

    /// Maximum number of retry attempts for transient failures
    max_retries: u32,

    /// Base delay in milliseconds for exponential backoff
    base_delay_ms: u64,
}

impl TrendFetcher {
    /// Create a fetcher from API configuration
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` for a bad endpoint,
    /// `FetchError::InvalidHeader` for an unencodable key or origin, and
    /// `FetchError::Network` if the HTTP client cannot be created
    pub fn from_config(config: &ApiConfig) -> Result<Self, FetchError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", config.endpoint)))?;

        let headers = build_api_headers(
            &config.user_agent,
            config.api_key.as_deref(),
            config.origin.as_deref(),
        )?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let rate = NonZeroU32::new(config.rate_limit).unwrap_or(NonZeroU32::MIN);
        let rate_limiter = RateLimiter::direct(Quota::per_second(rate));

        Ok(Self {
            client,
            rate_limiter,
            endpoint,
            headers,
            origin: config.origin.clone(),
            max_retries: config.max_retries,
            base_delay_ms: 500,
        })
    }

    /// Create a fetcher for an endpoint with default settings
    ///
    /// Mostly useful for tests against mock servers.
    pub fn with_endpoint(endpoint: &str) -> Result<Self, FetchError> {
        Self::from_config(&ApiConfig {
            endpoint: endpoint.to_string(),
            rate_limit: 100,
            ..ApiConfig::default()
        })
    }

    /// Override the base backoff delay
    #[must_use]
    pub fn with_base_delay(mut self, base_delay_ms: u64) -> Self {
        self.base_delay_ms = base_delay_ms;
        self
    }

    /// Endpoint this fetcher calls
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the trends body with rate limiting and retries
    ///
    /// # Errors
    ///
    /// Returns the failure of the single attempt when retries are disabled,
    /// `FetchError::MaxRetriesExceeded` when every retry failed, or the first
    /// non-transient failure immediately
    pub async fn fetch(&self) -> Result<Value, FetchError> {
        self.rate_limiter.until_ready().await;

        let mut attempt = 0;
        loop {
            if attempt > 0 {
                let delay = self.base_delay_ms * 2_u64.pow(attempt - 1);
                tracing::debug!(attempt, delay_ms = delay, "Retrying trends request after delay");
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }

            match self.fetch_once().await {
                Ok(body) => return Ok(body),
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    tracing::warn!(attempt, error = %e, "Trends request failed, will retry");
                    attempt += 1;
                }
                Err(e) if attempt > 0 && e.is_transient() => {
                    return Err(FetchError::MaxRetriesExceeded(Box::new(e)));
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Single request without retry
    async fn fetch_once(&self) -> Result<Value, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "Requesting trends");

        let response = self
            .client
            .get(self.endpoint.clone())
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(Self::classify_transport_error)?;

        let status = response.status();
        self.check_origin(response.headers())?;

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_status(status, &body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(Self::classify_transport_error)?;

        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Enforce the same-origin policy when an origin is configured
    ///
    /// The response must allow either any origin or exactly ours.
    fn check_origin(&self, headers: &HeaderMap) -> Result<(), FetchError> {
        let Some(origin) = &self.origin else {
            return Ok(());
        };

        let allowed = headers
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok());

        match allowed {
            Some("*") => Ok(()),
            Some(allowed) if allowed.trim_end_matches('/') == origin.trim_end_matches('/') => Ok(()),
            Some(allowed) => Err(FetchError::CrossOrigin(format!(
                "origin {origin} not allowed (server allows {allowed})"
            ))),
            None => Err(FetchError::CrossOrigin(format!(
                "no Access-Control-Allow-Origin header for origin {origin}"
            ))),
        }
    }

    /// Map a non-2xx status to an error
    ///
    /// A 403 whose body carries the cross-origin signature is reported as a
    /// cross-origin rejection rather than a plain status failure.
    fn classify_status(status: StatusCode, body: &str) -> FetchError {
        if status == StatusCode::FORBIDDEN && matches_cross_origin_signature(body) {
            FetchError::CrossOrigin(format!("status {}", status.as_u16()))
        } else {
            FetchError::Status(status.as_u16())
        }
    }

    /// Map a transport-level reqwest error to an error
    ///
    /// The request URL is stripped before matching so an endpoint path such
    /// as `/cors/` cannot make a plain network failure look cross-origin.
    fn classify_transport_error(err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            return FetchError::Timeout;
        }

        let err = err.without_url();
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }

        if matches_cross_origin_signature(&message) {
            FetchError::CrossOrigin(message)
        } else {
            FetchError::Network(message)
        }
    }
}

#[async_trait]
impl TrendSource for TrendFetcher {
    async fn fetch_raw(&self) -> Result<Value, FetchError> {
        self.fetch().await
    }
}

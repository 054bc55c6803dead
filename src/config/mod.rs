//! Configuration management for trendscope
//!
//! This module handles loading and validating configuration from environment
//! variables and TOML files. The trends API key is only ever read from
//! configuration and is redacted from debug output.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default number of trends shown on the dashboard
pub const DEFAULT_TREND_LIMIT: usize = 10;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Trends API configuration
    pub api: ApiConfig,

    /// Dashboard presentation settings
    pub dashboard: DashboardConfig,

    /// Dashboard API server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Third-party trends API configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Trends endpoint URL
    pub endpoint: String,

    /// Value for the `X-API-KEY` header (optional)
    pub api_key: Option<String>,

    /// Origin the dashboard is served from; enables same-origin checks
    pub origin: Option<String>,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Retries on transient failures (0 disables retrying)
    pub max_retries: u32,

    /// Rate limit (requests per second)
    pub rate_limit: u32,

    /// User agent string
    pub user_agent: String,
}

// Keeps the API key out of logs
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("origin", &self.origin)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("rate_limit", &self.rate_limit)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Dashboard presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Maximum number of unique trends returned
    pub trend_limit: usize,
}

/// Dashboard API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Allow any origin to call the API
    pub enable_cors: bool,

    /// Emit a tracing span per request
    pub enable_request_logging: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from("http://127.0.0.1:8787/v1/trends/hashtags"),
            api_key: None,
            origin: None,
            request_timeout_secs: 10,
            max_retries: 0,
            rate_limit: 2,
            user_agent: format!("trendscope/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            trend_limit: DEFAULT_TREND_LIMIT,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            enable_cors: true,
            enable_request_logging: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

/// Read and parse an environment variable, ignoring unparsable values
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

/// Read a non-empty environment variable
fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        config.apply_env();
        Ok(config)
    }

    /// Override fields from `TRENDSCOPE_*` environment variables
    fn apply_env(&mut self) {
        if let Some(endpoint) = env_string("TRENDSCOPE_API_URL") {
            self.api.endpoint = endpoint;
        }
        if let Some(key) = env_string("TRENDSCOPE_API_KEY") {
            self.api.api_key = Some(key);
        }
        if let Some(origin) = env_string("TRENDSCOPE_ORIGIN") {
            self.api.origin = Some(origin);
        }
        if let Some(timeout) = env_parse("TRENDSCOPE_REQUEST_TIMEOUT") {
            self.api.request_timeout_secs = timeout;
        }
        if let Some(retries) = env_parse("TRENDSCOPE_MAX_RETRIES") {
            self.api.max_retries = retries;
        }
        if let Some(rate) = env_parse("TRENDSCOPE_RATE_LIMIT") {
            self.api.rate_limit = rate;
        }
        if let Some(limit) = env_parse("TRENDSCOPE_TREND_LIMIT") {
            self.dashboard.trend_limit = limit;
        }
        if let Some(host) = env_string("TRENDSCOPE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_parse("TRENDSCOPE_PORT") {
            self.server.port = port;
        }
        if let Some(level) = env_string("TRENDSCOPE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = env_string("TRENDSCOPE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let endpoint = Url::parse(&self.api.endpoint)
            .with_context(|| format!("Invalid trends endpoint: {}", self.api.endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            anyhow::bail!("trends endpoint must use http or https");
        }

        if let Some(origin) = &self.api.origin {
            Url::parse(origin).with_context(|| format!("Invalid origin: {origin}"))?;
        }

        if self.api.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        if self.api.rate_limit == 0 {
            anyhow::bail!("rate_limit must be greater than 0");
        }

        if self.dashboard.trend_limit == 0 {
            anyhow::bail!("trend_limit must be greater than 0");
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            anyhow::bail!("log format must be text or json");
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.request_timeout_secs)
    }

    /// Server bind address as `host:port`
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.api.api_key.is_none());
    }

    #[test]
    fn test_invalid_endpoint() {
        let mut config = Config::default();
        config.api.endpoint = "not a url".to_string();
        assert!(config.validate().is_err());

        config.api.endpoint = "ftp://example.com/trends".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_limits_rejected() {
        let mut config = Config::default();
        config.dashboard.trend_limit = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.api.rate_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let mut config = Config::default();
        config.api.api_key = Some("super-secret".to_string());
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[dashboard]\ntrend_limit = 5\n").unwrap();
        assert_eq!(config.dashboard.trend_limit, 5);
        assert_eq!(config.server.port, 8080);
    }
}

//! Configuration loading tests (TOML files and environment overrides)

use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;
use trendscope::config::Config;

const ENV_KEYS: &[&str] = &[
    "TRENDSCOPE_API_URL",
    "TRENDSCOPE_API_KEY",
    "TRENDSCOPE_ORIGIN",
    "TRENDSCOPE_REQUEST_TIMEOUT",
    "TRENDSCOPE_MAX_RETRIES",
    "TRENDSCOPE_RATE_LIMIT",
    "TRENDSCOPE_TREND_LIMIT",
    "TRENDSCOPE_HOST",
    "TRENDSCOPE_PORT",
    "TRENDSCOPE_LOG_LEVEL",
    "TRENDSCOPE_LOG_FORMAT",
];

fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = Config::from_env().unwrap();

    assert!(config.api.api_key.is_none());
    assert_eq!(config.api.max_retries, 0);
    assert_eq!(config.dashboard.trend_limit, 10);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    std::env::set_var("TRENDSCOPE_API_URL", "https://trends.example/v1/hashtags");
    std::env::set_var("TRENDSCOPE_API_KEY", "secret");
    std::env::set_var("TRENDSCOPE_TREND_LIMIT", "5");
    std::env::set_var("TRENDSCOPE_PORT", "9090");

    let config = Config::from_env().unwrap();
    clear_env();

    assert_eq!(config.api.endpoint, "https://trends.example/v1/hashtags");
    assert_eq!(config.api.api_key.as_deref(), Some("secret"));
    assert_eq!(config.dashboard.trend_limit, 5);
    assert_eq!(config.bind_address(), "127.0.0.1:9090");
}

#[test]
#[serial]
fn test_unparsable_env_ignored() {
    clear_env();
    std::env::set_var("TRENDSCOPE_PORT", "not-a-port");
    std::env::set_var("TRENDSCOPE_API_KEY", "  ");

    let config = Config::from_env().unwrap();
    clear_env();

    assert_eq!(config.server.port, 8080);
    assert!(config.api.api_key.is_none());
}

#[test]
#[serial]
fn test_from_file() {
    clear_env();
    let file = write_config(
        r#"
[api]
endpoint = "https://trends.example/api"
origin = "https://dash.example"
max_retries = 2

[server]
port = 3000

[logging]
format = "json"
"#,
    );

    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.api.endpoint, "https://trends.example/api");
    assert_eq!(config.api.origin.as_deref(), Some("https://dash.example"));
    assert_eq!(config.api.max_retries, 2);
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.logging.format, "json");
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let file = write_config("[dashboard]\ntrend_limit = 3\n");
    std::env::set_var("TRENDSCOPE_TREND_LIMIT", "7");

    let config = Config::from_file(file.path()).unwrap();
    clear_env();

    assert_eq!(config.dashboard.trend_limit, 7);
}

#[test]
#[serial]
fn test_invalid_file() {
    clear_env();
    let file = write_config("[api\nendpoint = ");
    assert!(Config::from_file(file.path()).is_err());

    assert!(Config::from_file(std::path::Path::new("/nonexistent/trendscope.toml")).is_err());
}

#[test]
#[serial]
fn test_invalid_log_format_rejected() {
    clear_env();
    let file = write_config("[logging]\nformat = \"xml\"\n");
    let config = Config::from_file(file.path()).unwrap();
    assert!(config.validate().is_err());
}

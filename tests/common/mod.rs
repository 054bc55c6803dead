//! Common test utilities

use serde_json::{json, Value};
use trendscope::config::ApiConfig;

/// API config pointed at a mock server path, with retries off
#[allow(dead_code)]
pub fn api_config(base: &str, path: &str) -> ApiConfig {
    ApiConfig {
        endpoint: format!("{base}{path}"),
        rate_limit: 100,
        request_timeout_secs: 5,
        ..ApiConfig::default()
    }
}

/// A raw trend item in the primary field naming
#[allow(dead_code)]
pub fn raw_item(name: &str, views: u64, videos: u64, growth: f64) -> Value {
    json!({
        "name": name,
        "viewCount": views,
        "videoCount": videos,
        "growthRate": growth,
    })
}

/// Response body shaped like the trends API
#[allow(dead_code)]
pub fn trends_body(items: Vec<Value>) -> Value {
    json!({ "statusCode": 200, "hashtags": items })
}

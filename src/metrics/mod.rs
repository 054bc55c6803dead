//! Prometheus metrics for the trend dashboard
//!
//! This module tracks:
//! - Trend fetches by data source (live or sample fallback)
//! - Fetch failures by kind
//! - Texts scored by resulting sentiment
//! - Dashboard API requests
//!
//! # Usage
//!
//! Call `init_metrics()` at application startup to register all metrics.
//! If initialization fails, metrics operations become no-ops.

use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec, TextEncoder,
};
use std::sync::OnceLock;

use crate::models::{DataSource, Sentiment};

// ============================================================================
// Metrics Storage
// ============================================================================

/// Container for all dashboard metrics
struct DashboardMetrics {
    trend_fetches: CounterVec,
    fetch_failures: CounterVec,
    texts_scored: CounterVec,
    api_requests: CounterVec,
    api_duration: HistogramVec,
}

/// Global storage for dashboard metrics
static DASHBOARD_METRICS: OnceLock<DashboardMetrics> = OnceLock::new();

/// Flag to track if initialization was attempted
static METRICS_INIT_ATTEMPTED: OnceLock<bool> = OnceLock::new();

// ============================================================================
// Initialization
// ============================================================================

/// Initialize all Prometheus metrics
///
/// Safe to call more than once; only the first call registers anything.
///
/// # Example
///
/// ```ignore
/// if let Err(e) = trendscope::metrics::init_metrics() {
///     eprintln!("Warning: Metrics initialization failed: {}", e);
/// }
/// ```
pub fn init_metrics() -> Result<(), Box<dyn std::error::Error>> {
    if METRICS_INIT_ATTEMPTED.get().is_some() {
        return Ok(());
    }
    METRICS_INIT_ATTEMPTED.set(true).ok();

    let metrics = DashboardMetrics {
        trend_fetches: register_counter_vec!(
            "trendscope_trend_fetches_total",
            "Trend list requests by data source",
            &["source"]
        )?,
        fetch_failures: register_counter_vec!(
            "trendscope_fetch_failures_total",
            "Failed trend API requests by failure kind",
            &["kind"]
        )?,
        texts_scored: register_counter_vec!(
            "trendscope_texts_scored_total",
            "Texts scored by resulting sentiment",
            &["sentiment"]
        )?,
        api_requests: register_counter_vec!(
            "trendscope_api_requests_total",
            "Dashboard API requests by endpoint and status",
            &["endpoint", "status"]
        )?,
        api_duration: register_histogram_vec!(
            "trendscope_api_request_duration_seconds",
            "Dashboard API request duration in seconds",
            &["endpoint"],
            vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
        )?,
    };

    DASHBOARD_METRICS
        .set(metrics)
        .map_err(|_| "Dashboard metrics already initialized")?;

    tracing::info!("Prometheus metrics initialized successfully");
    Ok(())
}

/// Check if metrics have been initialized
pub fn metrics_initialized() -> bool {
    DASHBOARD_METRICS.get().is_some()
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Record a completed trend list request
pub fn record_trend_fetch(source: DataSource) {
    if let Some(m) = DASHBOARD_METRICS.get() {
        let label = match source {
            DataSource::Live => "live",
            DataSource::Sample => "sample",
        };
        m.trend_fetches.with_label_values(&[label]).inc();
    }
}

/// Record a failed trend API request
pub fn record_fetch_failure(kind: &str) {
    if let Some(m) = DASHBOARD_METRICS.get() {
        m.fetch_failures.with_label_values(&[kind]).inc();
    }
}

/// Record a scored text
pub fn record_text_scored(sentiment: Sentiment) {
    if let Some(m) = DASHBOARD_METRICS.get() {
        m.texts_scored.with_label_values(&[sentiment.as_str()]).inc();
    }
}

/// Record API request
pub fn record_api_request(endpoint: &str, status: u16, duration_secs: f64) {
    let Some(m) = DASHBOARD_METRICS.get() else {
        return;
    };

    let status_str = status.to_string();
    m.api_requests
        .with_label_values(&[endpoint, &status_str])
        .inc();
    m.api_duration
        .with_label_values(&[endpoint])
        .observe(duration_secs);
}

//! REST API handlers for the dashboard
//!
//! This module defines the API routes and handlers consumed by the dashboard
//! front-end.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, MatchedPath, Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::analytics::breakdown::sentiment_breakdown;
use crate::analytics::random::ThreadRandom;
use crate::metrics;
use crate::models::{
    DataSource, HashtagSentimentAnalysis, ProductRecommendation, SentimentResult, SentimentShare,
    TrendsOutcome,
};
use crate::products::recommend;
use crate::utils::ensure_hash_prefix;

use super::AppState;

// ============================================================================
// API Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Simple error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// Request body for text scoring
#[derive(Debug, Deserialize)]
pub struct ScoreTextRequest {
    pub text: String,
}

/// Sentiment breakdown plus the trend source it was computed from
#[derive(Debug, Serialize, Deserialize)]
pub struct BreakdownResponse {
    pub source: DataSource,
    pub shares: Vec<SentimentShare>,
}

/// Product suggestions plus the trend source they were matched against
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub source: DataSource,
    pub products: Vec<ProductRecommendation>,
}

/// Trend list, breakdown and products computed from one fetch
#[derive(Debug, Serialize)]
pub struct DashboardSnapshot {
    #[serde(flatten)]
    pub trends: TrendsOutcome,
    pub shares: Vec<SentimentShare>,
    pub products: Vec<ProductRecommendation>,
}

// ============================================================================
// Router
// ============================================================================

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/api/dashboard", get(dashboard_handler))
        .route("/api/trends", get(trends_handler))
        .route("/api/sentiment/breakdown", get(breakdown_handler))
        .route("/api/sentiment/text", post(score_text_handler))
        .route("/api/sentiment/hashtag/{tag}", get(hashtag_handler))
        .route("/api/products", get(products_handler))
        .route_layer(middleware::from_fn(track_requests))
        .with_state(state)
}

/// Record request count and latency per matched route
async fn track_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;

    metrics::record_api_request(
        &endpoint,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );
    response
}

// ============================================================================
// Handlers
// ============================================================================

/// Root handler - service description
async fn root_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "trendscope dashboard API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "dashboard": "GET /api/dashboard",
            "trends": "GET /api/trends",
            "breakdown": "GET /api/sentiment/breakdown",
            "products": "GET /api/products",
            "hashtag": "GET /api/sentiment/hashtag/{tag}",
            "text": "POST /api/sentiment/text",
            "metrics": "GET /metrics"
        }
    }))
}

/// Health check handler
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// Prometheus metrics handler
async fn metrics_handler() -> Response {
    match metrics::encode_metrics() {
        Ok(text) => text.into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(format!("Failed to encode metrics: {e}"))),
        )
            .into_response(),
    }
}

/// Everything the dashboard shows, derived from a single trend fetch
async fn dashboard_handler(State(state): State<AppState>) -> Json<ApiResponse<DashboardSnapshot>> {
    let trends = state
        .trends
        .fetch_trends_with_outcome(&mut ThreadRandom)
        .await;

    Json(ApiResponse::success(DashboardSnapshot {
        shares: sentiment_breakdown(&trends.records),
        products: recommend(&state.catalog, &trends.records),
        trends,
    }))
}

/// Trending hashtags, live or sample
///
/// Each call fetches afresh. Live trend sentiment is drawn per fetch, so use
/// `/api/dashboard` when the list and breakdown must agree.
async fn trends_handler(State(state): State<AppState>) -> Json<ApiResponse<TrendsOutcome>> {
    let outcome = state
        .trends
        .fetch_trends_with_outcome(&mut ThreadRandom)
        .await;
    Json(ApiResponse::success(outcome))
}

/// Share of trends per sentiment bucket
///
/// Computed from its own fetch; see `/api/dashboard` for a consistent view.
async fn breakdown_handler(State(state): State<AppState>) -> Json<ApiResponse<BreakdownResponse>> {
    let outcome = state
        .trends
        .fetch_trends_with_outcome(&mut ThreadRandom)
        .await;

    Json(ApiResponse::success(BreakdownResponse {
        source: outcome.source,
        shares: sentiment_breakdown(&outcome.records),
    }))
}

/// Affiliate products matched against current trends
///
/// Computed from its own fetch; see `/api/dashboard` for a consistent view.
async fn products_handler(State(state): State<AppState>) -> Json<ApiResponse<ProductsResponse>> {
    let outcome = state
        .trends
        .fetch_trends_with_outcome(&mut ThreadRandom)
        .await;

    Json(ApiResponse::success(ProductsResponse {
        source: outcome.source,
        products: recommend(&state.catalog, &outcome.records),
    }))
}

/// Hashtag sentiment; the leading `#` is optional in the path
async fn hashtag_handler(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Json<ApiResponse<HashtagSentimentAnalysis>> {
    let hashtag = ensure_hash_prefix(tag.trim());
    let analysis = state.scorer.score_hashtag(&hashtag, &mut ThreadRandom);
    Json(ApiResponse::success(analysis))
}

/// Score free text
async fn score_text_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScoreTextRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<SentimentResult>>, (StatusCode, Json<ErrorResponse>)> {
    let Json(request) = payload.map_err(|rejection| {
        (
            rejection.status(),
            Json(ErrorResponse::new(rejection.body_text())),
        )
    })?;

    if request.text.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Text cannot be empty")),
        ));
    }

    let result = state.scorer.score_text(&request.text, &mut ThreadRandom);
    Ok(Json(ApiResponse::success(result)))
}

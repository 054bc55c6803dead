//! Dashboard API server
//!
//! Serves trend, sentiment and product data as JSON for the dashboard
//! front-end.

pub mod api;

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::analytics::sentiment::SentimentScorer;
use crate::config::Config;
use crate::models::ProductRecommendation;
use crate::products::default_catalog;
use crate::trends::TrendService;

pub use api::create_router;

// ============================================================================
// App State
// ============================================================================

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Trend provider with sample fallback
    pub trends: Arc<TrendService>,

    /// Keyword sentiment scorer
    pub scorer: Arc<SentimentScorer>,

    /// Affiliate catalog
    pub catalog: Arc<Vec<ProductRecommendation>>,

    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    /// Build state around a trend service with the default scorer and catalog
    pub fn new(trends: TrendService) -> Self {
        Self {
            trends: Arc::new(trends),
            scorer: Arc::new(SentimentScorer::default()),
            catalog: Arc::new(default_catalog()),
            start_time: Instant::now(),
        }
    }
}

// ============================================================================
// Dashboard Server
// ============================================================================

/// HTTP server exposing the dashboard API
pub struct DashboardServer {
    config: Config,
    state: AppState,
}

impl DashboardServer {
    /// Create a server from configuration
    pub fn new(config: Config) -> Result<Self, ServerError> {
        config
            .validate()
            .map_err(|e| ServerError::ConfigError(e.to_string()))?;

        let trends =
            TrendService::from_config(&config).map_err(|e| ServerError::InitError(e.to_string()))?;

        Ok(Self {
            state: AppState::new(trends),
            config,
        })
    }

    /// Create a server with pre-built state
    pub fn with_state(config: Config, state: AppState) -> Self {
        Self { config, state }
    }

    /// Get the application state
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Build the router with all routes
    pub fn build_router(&self) -> Router {
        let mut router = create_router(self.state.clone());

        if self.config.server.enable_cors {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        if self.config.server.enable_request_logging {
            router = router.layer(TraceLayer::new_for_http());
        }

        router
    }

    /// Start the server and run until shutdown
    pub async fn start(&self) -> Result<(), ServerError> {
        let router = self.build_router();
        let addr = self.config.bind_address();

        tracing::info!("Starting dashboard API on {}", addr);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::BindError(format!("{addr}: {e}")))?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::ServeError(e.to_string()))?;

        tracing::info!("Dashboard API stopped");
        Ok(())
    }
}

/// Resolves on Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

// ============================================================================
// Errors
// ============================================================================

/// Server errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Initialization error: {0}")]
    InitError(String),

    #[error("Failed to bind: {0}")]
    BindError(String),

    #[error("Server error: {0}")]
    ServeError(String),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = DashboardServer::new(Config::default());
        assert!(server.is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.api.endpoint = "nope".to_string();
        assert!(matches!(
            DashboardServer::new(config),
            Err(ServerError::ConfigError(_))
        ));
    }
}

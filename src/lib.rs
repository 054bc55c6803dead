//! trendscope - social trend dashboard backend
//!
//! Fetches trending hashtags from a third-party API, scores sentiment with a
//! keyword heuristic, and serves both to a dashboard front-end.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and settings
//! - [`trends`] - Trend fetching, normalization and sample fallback
//! - [`analytics`] - Sentiment scoring and aggregate breakdowns
//! - [`products`] - Affiliate product suggestions
//! - [`server`] - Dashboard JSON API
//! - [`models`] - Core data structures and types
//! - [`metrics`] - Prometheus metrics
//! - [`utils`] - Formatting helpers and fetch errors
//!
//! # Example
//!
//! ```no_run
//! use trendscope::config::Config;
//! use trendscope::trends::TrendService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let service = TrendService::from_config(&config)?;
//!     for trend in service.fetch_trends().await {
//!         println!("{} {}", trend.hashtag, trend.growth);
//!     }
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod products;
pub mod server;
pub mod trends;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analytics::{score_hashtag, score_text, RandomSource, SentimentScorer};
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, Result, TrendscopeErrorTrait};
    pub use crate::models::{
        HashtagSentimentAnalysis, Sentiment, SentimentResult, TrendRecord, TrendsOutcome,
    };
    pub use crate::trends::{TrendFetcher, TrendService, TrendSource};
}

// Direct re-exports for convenience
pub use models::{HashtagSentimentAnalysis, Sentiment, SentimentResult, TrendRecord};

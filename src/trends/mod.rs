//! Trend acquisition with fallback to sample data
//!
//! This module implements the data path behind the trending-hashtags list:
//! fetch from the third-party API, normalize, and substitute the fixed sample
//! set whenever the live fetch fails. The failure reason is kept on the
//! returned [`TrendsOutcome`](crate::models::TrendsOutcome), logged, and
//! counted in metrics.

pub mod fetcher;
pub mod headers;
pub mod normalize;
pub mod resolver;
pub mod sample;

use std::sync::Arc;

use crate::analytics::random::{RandomSource, ThreadRandom};
use crate::config::Config;
use crate::error::TrendscopeErrorTrait;
use crate::metrics;
use crate::models::{TrendRecord, TrendsOutcome};
use crate::utils::error::FetchError;

pub use fetcher::{matches_cross_origin_signature, TrendFetcher, TrendSource};
pub use normalize::{locate_items, TrendNormalizer, ITEM_COLLECTION_KEYS};
pub use resolver::{FieldResolver, RawTrendItem, TrendFieldResolvers};
pub use sample::sample_trends;

/// Trend list provider used by the CLI and the dashboard API
pub struct TrendService {
    source: Arc<dyn TrendSource>,
    normalizer: TrendNormalizer,
}

impl TrendService {
    /// Create a service over any trend source
    pub fn new(source: Arc<dyn TrendSource>, limit: usize) -> Self {
        Self {
            source,
            normalizer: TrendNormalizer::new(limit),
        }
    }

    /// Create a service calling the configured trends API
    ///
    /// # Errors
    ///
    /// Returns an error if the fetcher cannot be built from `config.api`
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let fetcher = TrendFetcher::from_config(&config.api)?;
        Ok(Self::new(Arc::new(fetcher), config.dashboard.trend_limit))
    }

    /// Current trends; never fails
    ///
    /// Falls back to the sample set when the live fetch fails.
    pub async fn fetch_trends(&self) -> Vec<TrendRecord> {
        self.fetch_trends_with_outcome(&mut ThreadRandom).await.records
    }

    /// Current trends plus where they came from and why
    pub async fn fetch_trends_with_outcome(&self, rng: &mut dyn RandomSource) -> TrendsOutcome {
        let outcome = match self.fetch_live(rng).await {
            Ok(records) => {
                tracing::info!(count = records.len(), "Fetched live trends");
                TrendsOutcome::live(records)
            }
            Err(e) => {
                tracing::warn!(
                    kind = e.kind(),
                    error = %e,
                    "Trends API unavailable, using sample data"
                );
                metrics::record_fetch_failure(e.kind());

                let mut records = sample_trends();
                records.truncate(self.normalizer.limit());
                TrendsOutcome::sample(records, e.user_message())
            }
        };

        metrics::record_trend_fetch(outcome.source);
        outcome
    }

    /// Live trends only, without fallback
    ///
    /// A body without a recognized item collection is treated as an empty
    /// list, not as a failure.
    ///
    /// # Errors
    ///
    /// Returns the fetch failure as-is
    pub async fn fetch_live(
        &self,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<TrendRecord>, FetchError> {
        let body = self.source.fetch_raw().await?;

        match self.normalizer.normalize(&body, rng) {
            Ok(records) => Ok(records),
            Err(e @ FetchError::MalformedResponse(_)) => {
                tracing::warn!(error = %e, "Trends response has no item collection");
                metrics::record_fetch_failure(e.kind());
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}

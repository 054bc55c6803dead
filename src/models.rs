// Core data structures for the trend dashboard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse three-way text polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// All buckets in display order
    pub const ALL: [Sentiment; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One trending hashtag, ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRecord {
    pub id: u32,
    pub hashtag: String, // always starts with '#'
    pub growth: String,  // e.g. "+242%"
    pub views: String,   // e.g. "1.2M"
    pub videos: String,  // e.g. "5.4K"
    pub sentiment: Sentiment,
    pub is_new: bool,
}

/// Result of scoring a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// 0.0 (fully negative) to 1.0 (fully positive), 0.5 is neutral
    pub score: f64,
    pub confidence: f64,
}

/// A scored comment used as evidence for a hashtag verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentSample {
    pub text: String,
    pub sentiment: SentimentResult,
}

/// Hashtag-level sentiment verdict with the comments it was derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HashtagSentimentAnalysis {
    pub hashtag: String,
    pub overall_sentiment: SentimentResult,
    pub comment_samples: Vec<CommentSample>,
}

/// Share of trends falling into one sentiment bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentShare {
    pub sentiment: Sentiment,
    pub percentage: u8,
}

/// How strongly a product is tied to its trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Relevance {
    High,
    Medium,
    Low,
}

/// Affiliate product suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecommendation {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub trend: String,
    pub sentiment: Sentiment,
    pub relevance: Relevance,
    pub image: String,
}

/// Where a trend list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Normalized from a successful API response
    Live,
    /// Fixed sample set substituted after a failed fetch
    Sample,
}

/// Trend list plus the information needed to explain it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsOutcome {
    pub records: Vec<TrendRecord>,
    pub source: DataSource,
    /// Why the live fetch failed, when `source` is `Sample`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

impl TrendsOutcome {
    /// Outcome of a successful live fetch
    pub fn live(records: Vec<TrendRecord>) -> Self {
        Self {
            records,
            source: DataSource::Live,
            failure: None,
            fetched_at: Utc::now(),
        }
    }

    /// Outcome of a failed fetch that fell back to sample data
    pub fn sample(records: Vec<TrendRecord>, failure: impl Into<String>) -> Self {
        Self {
            records,
            source: DataSource::Sample,
            failure: Some(failure.into()),
            fetched_at: Utc::now(),
        }
    }

    /// True when the records are the fallback sample set
    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Sample
    }
}

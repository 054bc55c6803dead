//! Keyword-based sentiment scoring
//!
//! This module provides:
//! - Text scoring by counting distinct positive/negative keywords
//! - Hashtag verdicts by majority vote over synthetic comment samples
//! - The weighted random draw used for trend-list sentiment
//!
//! The confidence values produced here are cosmetic, not estimates.

use crate::analytics::random::RandomSource;
use crate::metrics;
use crate::models::{CommentSample, HashtagSentimentAnalysis, Sentiment, SentimentResult};

/// Keywords counted as positive evidence
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "love",
    "great",
    "amazing",
    "good",
    "best",
    "awesome",
    "recommend",
];

/// Keywords counted as negative evidence
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "hate",
    "bad",
    "terrible",
    "worst",
    "avoid",
    "disappointed",
];

/// Lower bound of the cosmetic per-text confidence
const CONFIDENCE_FLOOR: f64 = 0.7;

/// Width of the cosmetic per-text confidence range
const CONFIDENCE_SPAN: f64 = 0.25;

/// Confidence reported for hashtag-level verdicts
const HASHTAG_CONFIDENCE: f64 = 0.8;

/// Weights for (positive, neutral, negative) in the trend-list draw
const TREND_SENTIMENT_WEIGHTS: [(Sentiment, f64); 3] = [
    (Sentiment::Positive, 0.6),
    (Sentiment::Neutral, 0.3),
    (Sentiment::Negative, 0.1),
];

/// Keyword-count sentiment scorer
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::with_keywords(POSITIVE_KEYWORDS, NEGATIVE_KEYWORDS)
    }
}

impl SentimentScorer {
    /// Create a scorer with the built-in keyword sets
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer with custom keyword sets
    ///
    /// Keywords are matched case-insensitively.
    pub fn with_keywords<S: AsRef<str>>(positive: &[S], negative: &[S]) -> Self {
        let lower = |words: &[S]| {
            words
                .iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect::<Vec<_>>()
        };
        Self {
            positive: lower(positive),
            negative: lower(negative),
        }
    }

    /// Count distinct positive and negative keywords present in `text`
    ///
    /// Matching is by substring, so "loved" counts for "love". A keyword
    /// appearing several times still counts once.
    #[must_use]
    pub fn keyword_counts(&self, text: &str) -> (usize, usize) {
        let text = text.to_lowercase();
        let count = |words: &[String]| words.iter().filter(|w| text.contains(w.as_str())).count();
        (count(&self.positive), count(&self.negative))
    }

    /// Classify a piece of text
    ///
    /// Ties, including no matches at all, are neutral with score 0.5.
    pub fn score_text(&self, text: &str, rng: &mut dyn RandomSource) -> SentimentResult {
        let (positive, negative) = self.keyword_counts(text);
        let total = (positive + negative) as f64;

        let (sentiment, score) = if positive > negative {
            (Sentiment::Positive, 0.5 + (positive as f64 / total) * 0.5)
        } else if negative > positive {
            (Sentiment::Negative, 0.5 - (negative as f64 / total) * 0.5)
        } else {
            (Sentiment::Neutral, 0.5)
        };

        let confidence = CONFIDENCE_FLOOR + rng.next_f64() * CONFIDENCE_SPAN;

        tracing::trace!(positive, negative, %sentiment, score, "Scored text");
        metrics::record_text_scored(sentiment);

        SentimentResult {
            sentiment,
            score,
            confidence,
        }
    }

    /// Analyze a hashtag from synthetic comment samples
    pub fn score_hashtag(
        &self,
        hashtag: &str,
        rng: &mut dyn RandomSource,
    ) -> HashtagSentimentAnalysis {
        let comment_samples: Vec<CommentSample> = comment_templates(hashtag)
            .into_iter()
            .map(|text| {
                let sentiment = self.score_text(&text, rng);
                CommentSample { text, sentiment }
            })
            .collect();

        let sentiment = majority_vote(&comment_samples);
        let score = if comment_samples.is_empty() {
            0.5
        } else {
            comment_samples.iter().map(|c| c.sentiment.score).sum::<f64>()
                / comment_samples.len() as f64
        };

        tracing::debug!(
            hashtag = %hashtag,
            samples = comment_samples.len(),
            %sentiment,
            score,
            "Analyzed hashtag sentiment"
        );

        HashtagSentimentAnalysis {
            hashtag: hashtag.to_string(),
            overall_sentiment: SentimentResult {
                sentiment,
                score,
                confidence: HASHTAG_CONFIDENCE,
            },
            comment_samples,
        }
    }
}

/// Synthetic comments standing in for real platform comments
pub fn comment_templates(hashtag: &str) -> Vec<String> {
    let bare = hashtag.replacen('#', "", 1);
    vec![
        format!("{hashtag} is amazing for productivity!"),
        format!("This {bare} trend is helpful for work setup."),
        format!("Not sure if {hashtag} is worth the hype, but it looks cool."),
        format!("{hashtag} has really improved my home office experience."),
        format!("I tried {hashtag} but it wasn't what I expected."),
    ]
}

/// Majority vote over comment sentiments
///
/// Positive or negative wins only with a strict majority over both other
/// buckets; every other case is neutral.
pub fn majority_vote(samples: &[CommentSample]) -> Sentiment {
    let (mut positive, mut neutral, mut negative) = (0usize, 0usize, 0usize);
    for sample in samples {
        match sample.sentiment.sentiment {
            Sentiment::Positive => positive += 1,
            Sentiment::Neutral => neutral += 1,
            Sentiment::Negative => negative += 1,
        }
    }

    if positive > neutral && positive > negative {
        Sentiment::Positive
    } else if negative > neutral && negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Weighted draw: 60% positive, 30% neutral, 10% negative
///
/// Placeholder for trend-list sentiment until real analysis is wired in.
pub fn draw_weighted_sentiment(rng: &mut dyn RandomSource) -> Sentiment {
    let roll = rng.next_f64();
    let mut cumulative = 0.0;
    for (sentiment, weight) in TREND_SENTIMENT_WEIGHTS {
        cumulative += weight;
        if roll < cumulative {
            return sentiment;
        }
    }
    Sentiment::Neutral
}

/// Score text with the built-in keyword sets
pub fn score_text(text: &str, rng: &mut dyn RandomSource) -> SentimentResult {
    SentimentScorer::default().score_text(text, rng)
}

/// Analyze a hashtag with the built-in keyword sets
pub fn score_hashtag(hashtag: &str, rng: &mut dyn RandomSource) -> HashtagSentimentAnalysis {
    SentimentScorer::default().score_hashtag(hashtag, rng)
}

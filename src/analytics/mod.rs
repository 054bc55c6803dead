//! Analytics module for sentiment scoring and aggregate breakdowns

pub mod breakdown;
pub mod random;
pub mod sentiment;

pub use breakdown::sentiment_breakdown;
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
pub use sentiment::{
    comment_templates, draw_weighted_sentiment, majority_vote, score_hashtag, score_text,
    SentimentScorer, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS,
};

//! Normalization of trend API responses into display records
//!
//! Pipeline: locate the item collection, resolve aliases, deduplicate by
//! name (first occurrence wins), truncate, then format each item.

use serde_json::Value;
use std::collections::HashSet;

use crate::analytics::random::RandomSource;
use crate::analytics::sentiment::draw_weighted_sentiment;
use crate::config::DEFAULT_TREND_LIMIT;
use crate::models::{Sentiment, TrendRecord};
use crate::utils::error::FetchError;
use crate::utils::{ensure_hash_prefix, format_growth, format_number};

use super::resolver::{RawTrendItem, TrendFieldResolvers};

/// Top-level keys that may hold the item array, in lookup order
pub const ITEM_COLLECTION_KEYS: &[&str] = &["hashtags", "data", "itemList", "challengeList"];

/// Growth rate above which a trend is flagged as new
const NEW_TREND_GROWTH_THRESHOLD: f64 = 100.0;

/// Find the item array in a response body
///
/// Keys are tried in [`ITEM_COLLECTION_KEYS`] order; a key whose value is not
/// an array is skipped.
pub fn locate_items(body: &Value) -> Option<&Vec<Value>> {
    ITEM_COLLECTION_KEYS
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_array))
}

/// Drop items whose name was already seen, preserving order
pub fn dedupe_by_name(items: Vec<RawTrendItem>) -> Vec<RawTrendItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.name.clone()))
        .collect()
}

/// Build a display record from a resolved item
pub fn to_record(id: u32, item: &RawTrendItem, sentiment: Sentiment) -> TrendRecord {
    TrendRecord {
        id,
        hashtag: ensure_hash_prefix(&item.name),
        growth: format_growth(item.growth_rate),
        views: format_number(item.view_count),
        videos: format_number(item.video_count),
        sentiment,
        is_new: item.growth_rate > NEW_TREND_GROWTH_THRESHOLD,
    }
}

/// Turns raw API bodies into at most `limit` trend records
pub struct TrendNormalizer {
    resolvers: TrendFieldResolvers,
    limit: usize,
}

impl Default for TrendNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_TREND_LIMIT)
    }
}

impl TrendNormalizer {
    /// Create a normalizer keeping at most `limit` unique trends
    pub fn new(limit: usize) -> Self {
        Self {
            resolvers: TrendFieldResolvers::default(),
            limit,
        }
    }

    /// Maximum number of records produced
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Resolve, deduplicate and truncate raw items
    pub fn prepare(&self, items: &[Value]) -> Vec<RawTrendItem> {
        let resolved = items.iter().map(|item| self.resolvers.resolve(item)).collect();
        let mut unique = dedupe_by_name(resolved);
        unique.truncate(self.limit);
        unique
    }

    /// Normalize a full response body
    ///
    /// Trend sentiment is drawn from `rng`; it is not derived from content.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::MalformedResponse` when the body has no recognized
    /// item collection. Callers treat that as an empty list.
    pub fn normalize(
        &self,
        body: &Value,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<TrendRecord>, FetchError> {
        let items = locate_items(body)
            .ok_or_else(|| FetchError::MalformedResponse(ITEM_COLLECTION_KEYS.join(", ")))?;

        let records: Vec<TrendRecord> = self
            .prepare(items)
            .iter()
            .enumerate()
            .map(|(index, item)| to_record(index as u32 + 1, item, draw_weighted_sentiment(rng)))
            .collect();

        tracing::debug!(
            raw_items = items.len(),
            records = records.len(),
            "Normalized trend response"
        );

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::random::FixedRandom;
    use serde_json::json;

    #[test]
    fn test_locate_items_key_order() {
        let body = json!({"data": [1], "hashtags": [2]});
        assert_eq!(locate_items(&body).unwrap()[0], json!(2));

        let body = json!({"challengeList": [3]});
        assert_eq!(locate_items(&body).unwrap()[0], json!(3));
    }

    #[test]
    fn test_locate_items_skips_non_arrays() {
        let body = json!({"data": {"nested": true}, "itemList": [4]});
        assert_eq!(locate_items(&body).unwrap()[0], json!(4));

        assert!(locate_items(&json!({"statusCode": 200})).is_none());
        assert!(locate_items(&json!([1, 2, 3])).is_none());
    }

    #[test]
    fn test_to_record() {
        let item = RawTrendItem {
            name: "SmartGadgets".to_string(),
            view_count: 1_200_000,
            video_count: 5_400,
            growth_rate: 242.0,
        };
        let record = to_record(1, &item, Sentiment::Positive);
        assert_eq!(record.hashtag, "#SmartGadgets");
        assert_eq!(record.views, "1.2M");
        assert_eq!(record.videos, "5.4K");
        assert_eq!(record.growth, "+242%");
        assert!(record.is_new);

        let item = RawTrendItem {
            growth_rate: 100.0,
            ..item
        };
        assert!(!to_record(1, &item, Sentiment::Neutral).is_new);
    }

    #[test]
    fn test_normalize_dedupes_and_numbers_ids() {
        let body = json!({
            "hashtags": [
                {"name": "A", "viewCount": 1},
                {"name": "B", "viewCount": 2},
                {"hashtagName": "A", "viewCount": 3},
                {"name": "C", "viewCount": 4},
            ]
        });
        let records = TrendNormalizer::default()
            .normalize(&body, &mut FixedRandom(0.0))
            .unwrap();

        let tags: Vec<_> = records.iter().map(|r| r.hashtag.as_str()).collect();
        assert_eq!(tags, vec!["#A", "#B", "#C"]);
        assert_eq!(records[0].views, "1");
        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(records.iter().all(|r| r.sentiment == Sentiment::Positive));
    }

    #[test]
    fn test_normalize_truncates_after_dedupe() {
        let mut items = vec![json!({"name": "Dup"}); 5];
        items.extend((0..15).map(|i| json!({"name": format!("Tag{i}")})));
        let body = json!({ "itemList": items });

        let records = TrendNormalizer::new(10)
            .normalize(&body, &mut FixedRandom(0.0))
            .unwrap();
        assert_eq!(records.len(), 10);
        assert_eq!(records[0].hashtag, "#Dup");
        assert_eq!(records[9].hashtag, "#Tag8");
    }

    #[test]
    fn test_normalize_malformed() {
        let result = TrendNormalizer::default().normalize(&json!({"ok": true}), &mut FixedRandom(0.0));
        assert!(matches!(result, Err(FetchError::MalformedResponse(_))));
    }

    #[test]
    fn test_empty_collection_is_empty_list() {
        let records = TrendNormalizer::default()
            .normalize(&json!({"hashtags": []}), &mut FixedRandom(0.0))
            .unwrap();
        assert!(records.is_empty());
    }
}

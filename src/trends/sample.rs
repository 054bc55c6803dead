//! Fixed sample data shown when the trends API is unavailable

use crate::models::{Sentiment, TrendRecord};

use super::normalize::to_record;
use super::resolver::RawTrendItem;

/// (name, views, videos, growth rate, sentiment)
const SAMPLE_ITEMS: &[(&str, u64, u64, f64, Sentiment)] = &[
    ("SmartGadgets", 1_200_000, 5_400, 242.0, Sentiment::Positive),
    ("HomeOfficeSetup", 890_000, 3_200, 128.0, Sentiment::Positive),
    ("MinimalistDesign", 720_000, 2_900, 94.0, Sentiment::Neutral),
    ("TechReviews", 1_800_000, 6_700, 76.0, Sentiment::Positive),
    ("BudgetFinds", 450_000, 1_800, 65.0, Sentiment::Neutral),
    ("ProductivityHacks", 950_000, 4_100, 58.0, Sentiment::Positive),
    ("WirelessEarbuds", 620_000, 2_200, 41.0, Sentiment::Neutral),
    ("SustainableFashion", 380_000, 1_500, 33.0, Sentiment::Positive),
    ("CoffeeRecipes", 1_100_000, 4_800, 29.0, Sentiment::Positive),
    ("TravelHacks", 510_000, 2_100, 22.0, Sentiment::Negative),
];

/// The fixed sample trend set
///
/// Deterministic: sentiments are fixed rather than drawn.
pub fn sample_trends() -> Vec<TrendRecord> {
    SAMPLE_ITEMS
        .iter()
        .enumerate()
        .map(|(index, &(name, views, videos, growth, sentiment))| {
            let item = RawTrendItem {
                name: name.to_string(),
                view_count: views,
                video_count: videos,
                growth_rate: growth,
            };
            to_record(index as u32 + 1, &item, sentiment)
        })
        .collect()
}

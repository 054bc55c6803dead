//! Affiliate product suggestions tied to trending hashtags

use crate::models::{ProductRecommendation, Relevance, Sentiment, TrendRecord};

/// Built-in affiliate catalog
pub fn default_catalog() -> Vec<ProductRecommendation> {
    let product = |id, name: &str, category: &str, trend: &str, sentiment, relevance, image: &str| {
        ProductRecommendation {
            id,
            name: name.to_string(),
            category: category.to_string(),
            trend: trend.to_string(),
            sentiment,
            relevance,
            image: image.to_string(),
        }
    };

    vec![
        product(
            1,
            "Portable Monitor Stand",
            "Home Office",
            "#HomeOfficeSetup",
            Sentiment::Positive,
            Relevance::High,
            "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?w=200&h=200&fit=crop",
        ),
        product(
            2,
            "Ergonomic Desk Chair",
            "Home Office",
            "#HomeOfficeSetup",
            Sentiment::Positive,
            Relevance::High,
            "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?w=200&h=200&fit=crop",
        ),
        product(
            3,
            "Wireless Keyboard & Mouse",
            "Tech Accessories",
            "#MinimalistDesign",
            Sentiment::Neutral,
            Relevance::Medium,
            "https://images.unsplash.com/photo-1531297484001-80022131f5a1?w=200&h=200&fit=crop",
        ),
    ]
}

/// Products whose trend is currently trending
///
/// Each match takes the sentiment of its trend. Results are ordered by
/// relevance, keeping catalog order within a tier. When nothing matches the
/// catalog is returned unchanged as placeholder data.
pub fn recommend(
    catalog: &[ProductRecommendation],
    trends: &[TrendRecord],
) -> Vec<ProductRecommendation> {
    let mut matches: Vec<ProductRecommendation> = catalog
        .iter()
        .filter_map(|product| {
            trends
                .iter()
                .find(|trend| trend.hashtag.eq_ignore_ascii_case(&product.trend))
                .map(|trend| ProductRecommendation {
                    sentiment: trend.sentiment,
                    ..product.clone()
                })
        })
        .collect();

    if matches.is_empty() {
        tracing::debug!("No catalog product matches current trends, returning placeholder catalog");
        return catalog.to_vec();
    }

    matches.sort_by_key(|product| product.relevance);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend(hashtag: &str, sentiment: Sentiment) -> TrendRecord {
        TrendRecord {
            id: 1,
            hashtag: hashtag.to_string(),
            growth: "+10%".to_string(),
            views: "1.0K".to_string(),
            videos: "10".to_string(),
            sentiment,
            is_new: false,
        }
    }

    #[test]
    fn test_matches_take_trend_sentiment() {
        let catalog = default_catalog();
        let trends = vec![trend("#homeofficesetup", Sentiment::Negative)];

        let products = recommend(&catalog, &trends);
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.sentiment == Sentiment::Negative));
        assert_eq!(products[0].name, "Portable Monitor Stand");
    }

    #[test]
    fn test_ordered_by_relevance() {
        let mut catalog = default_catalog();
        catalog.reverse();
        let trends = vec![
            trend("#MinimalistDesign", Sentiment::Neutral),
            trend("#HomeOfficeSetup", Sentiment::Positive),
        ];

        let products = recommend(&catalog, &trends);
        let relevance: Vec<_> = products.iter().map(|p| p.relevance).collect();
        assert_eq!(relevance, vec![Relevance::High, Relevance::High, Relevance::Medium]);
        // stable within a tier
        assert_eq!(products[0].id, 2);
    }

    #[test]
    fn test_no_match_returns_catalog() {
        let catalog = default_catalog();
        let products = recommend(&catalog, &[trend("#Unrelated", Sentiment::Positive)]);
        assert_eq!(products, catalog);
    }
}

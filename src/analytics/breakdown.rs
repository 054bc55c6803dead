//! Aggregate sentiment breakdown across the current trend list

use crate::models::{Sentiment, SentimentShare, TrendRecord};

/// Percentage of trends in each sentiment bucket
///
/// Shares are returned in positive, neutral, negative order. Percentages use
/// largest-remainder rounding so a non-empty list always sums to 100; an empty
/// list yields zero for every bucket.
pub fn sentiment_breakdown(records: &[TrendRecord]) -> Vec<SentimentShare> {
    let total = records.len();
    if total == 0 {
        return Sentiment::ALL
            .iter()
            .map(|&sentiment| SentimentShare {
                sentiment,
                percentage: 0,
            })
            .collect();
    }

    let counts = Sentiment::ALL.map(|bucket| {
        records
            .iter()
            .filter(|record| record.sentiment == bucket)
            .count()
    });

    let mut floors = [0usize; 3];
    let mut remainders = [(0usize, 0usize); 3];
    for (i, count) in counts.iter().enumerate() {
        let scaled = count * 100;
        floors[i] = scaled / total;
        remainders[i] = (scaled % total, i);
    }

    // Hand out the missing points to the largest remainders, earlier bucket first on ties
    remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    let missing = 100 - floors.iter().sum::<usize>();
    for &(_, i) in remainders.iter().take(missing) {
        floors[i] += 1;
    }

    Sentiment::ALL
        .iter()
        .zip(floors)
        .map(|(&sentiment, percentage)| SentimentShare {
            sentiment,
            percentage: percentage as u8,
        })
        .collect()
}

use trendscope::analytics::{SentimentScorer, ThreadRandom};
use trendscope::error::Result;
use trendscope::utils::truncate_text;

pub fn sentiment(text: &str, json: bool) -> Result<()> {
    let result = SentimentScorer::default().score_text(text, &mut ThreadRandom);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} (score: {:.2}, confidence: {:.2})",
            result.sentiment, result.score, result.confidence
        );
    }

    Ok(())
}

pub fn hashtag(tag: &str, json: bool) -> Result<()> {
    let analysis = SentimentScorer::default().score_hashtag(tag, &mut ThreadRandom);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let overall = &analysis.overall_sentiment;
    println!("Sentiment for {}", analysis.hashtag);
    println!("================================");
    println!(
        "Overall: {} (score: {:.2}, confidence: {:.2})",
        overall.sentiment, overall.score, overall.confidence
    );
    println!();
    for sample in &analysis.comment_samples {
        println!(
            "  [{:<8}] {}",
            sample.sentiment.sentiment,
            truncate_text(&sample.text, 72)
        );
    }

    Ok(())
}

use trendscope::analytics::{sentiment_breakdown, ThreadRandom};
use trendscope::config::Config;
use trendscope::error::Result;
use trendscope::models::TrendsOutcome;
use trendscope::products::{default_catalog, recommend};
use trendscope::trends::TrendService;

async fn load_trends(config: &Config) -> Result<TrendsOutcome> {
    let service = TrendService::from_config(config)?;
    let outcome = service.fetch_trends_with_outcome(&mut ThreadRandom).await;

    if let Some(reason) = &outcome.failure {
        eprintln!("Warning: {reason}");
    }
    Ok(outcome)
}

pub async fn trends(config: &Config, json: bool) -> Result<()> {
    let outcome = load_trends(config).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!("Trending hashtags ({:?} data)", outcome.source);
    println!("================================");
    if outcome.records.is_empty() {
        println!("No trends returned.");
        return Ok(());
    }

    for trend in &outcome.records {
        let badge = if trend.is_new { " [NEW]" } else { "" };
        println!(
            "{:>2}. {:<24} {:>7}  views {:>7}  videos {:>7}  {}{badge}",
            trend.id, trend.hashtag, trend.growth, trend.views, trend.videos, trend.sentiment
        );
    }

    Ok(())
}

pub async fn breakdown(config: &Config, json: bool) -> Result<()> {
    let outcome = load_trends(config).await?;
    let shares = sentiment_breakdown(&outcome.records);

    if json {
        println!("{}", serde_json::to_string_pretty(&shares)?);
        return Ok(());
    }

    println!("Sentiment breakdown ({:?} data)", outcome.source);
    println!("================================");
    for share in &shares {
        let bar = "#".repeat(usize::from(share.percentage) / 2);
        println!("{:<9} {:>3}%  {bar}", share.sentiment, share.percentage);
    }

    Ok(())
}

pub async fn products(config: &Config, json: bool) -> Result<()> {
    let outcome = load_trends(config).await?;
    let products = recommend(&default_catalog(), &outcome.records);

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    println!("Recommended for affiliate marketing");
    println!("================================");
    for product in &products {
        println!(
            "{}. {} ({}) - {} | {:?} relevance | {}",
            product.id,
            product.name,
            product.category,
            product.trend,
            product.relevance,
            product.sentiment
        );
    }

    Ok(())
}

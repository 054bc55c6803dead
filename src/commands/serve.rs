use trendscope::config::Config;
use trendscope::error::Result;
use trendscope::metrics;
use trendscope::server::DashboardServer;

pub async fn serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    if let Err(e) = metrics::init_metrics() {
        tracing::warn!("Metrics initialization failed: {}", e);
    }

    println!("Starting dashboard API");
    println!("=========================");
    println!("  Address: http://{}", config.bind_address());
    println!("  Trends endpoint: {}", config.api.endpoint);
    println!("  API key: {}", if config.api.api_key.is_some() { "set" } else { "not set" });
    println!();
    println!("Endpoints:");
    println!("  GET  /api/dashboard              - Trends, breakdown and products from one fetch");
    println!("  GET  /api/trends                 - Trending hashtags");
    println!("  GET  /api/sentiment/breakdown    - Sentiment share of trends");
    println!("  GET  /api/products               - Affiliate suggestions");
    println!("  GET  /api/sentiment/hashtag/{{tag}} - Hashtag sentiment");
    println!("  POST /api/sentiment/text         - Score free text");
    println!("  GET  /metrics                    - Prometheus metrics");
    println!();

    let server = DashboardServer::new(config)?;
    server.start().await?;

    Ok(())
}

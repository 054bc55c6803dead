mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trendscope::config::Config;
use trendscope::error::TrendscopeErrorTrait;

#[derive(Parser)]
#[command(
    name = "trendscope",
    version,
    about = "Trending hashtags, sentiment scoring and affiliate suggestions for social dashboards",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// Configuration file (TOML); environment variables override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true, default_value = "false")]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show trending hashtags (falls back to sample data)
    Trends,

    /// Show the sentiment share across current trends
    Breakdown,

    /// Show affiliate product suggestions for current trends
    Products,

    /// Score the sentiment of a piece of text
    Sentiment {
        /// Text to score
        text: String,
    },

    /// Analyze sentiment for a hashtag
    Hashtag {
        /// Hashtag, e.g. "#HomeOfficeSetup"
        tag: String,
    },

    /// Run the dashboard JSON API
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    config.validate().context("Invalid configuration")?;

    let log_format = cli.log_format.as_deref().unwrap_or(&config.logging.format);
    setup_tracing(log_format, &config.logging.level, cli.verbose)?;

    tracing::debug!(config = ?config, "Loaded configuration");

    let result = match cli.command {
        Commands::Trends => {
            tracing::info!("Starting trends command");
            commands::trends(&config, cli.json).await
        }

        Commands::Breakdown => {
            tracing::info!("Starting breakdown command");
            commands::breakdown(&config, cli.json).await
        }

        Commands::Products => {
            tracing::info!("Starting products command");
            commands::products(&config, cli.json).await
        }

        Commands::Sentiment { text } => {
            tracing::info!(chars = text.chars().count(), "Starting sentiment command");
            commands::sentiment(&text, cli.json)
        }

        Commands::Hashtag { tag } => {
            tracing::info!(tag = %tag, "Starting hashtag command");
            commands::hashtag(&tag, cli.json)
        }

        Commands::Serve { host, port } => {
            tracing::info!(host = ?host, port = ?port, "Starting serve command");
            commands::serve(config, host, port).await
        }
    };

    if let Err(e) = result {
        tracing::error!(
            category = e.category().as_str(),
            recoverable = e.is_recoverable(),
            error = %e,
            "Command failed"
        );
        anyhow::bail!(e.user_message());
    }

    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("trendscope=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("trendscope={level},warn")))
    };

    // Logs go to stderr so --json output stays parseable
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}

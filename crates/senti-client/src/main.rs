use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use senti_client::{ClientError, MOVIES, SentimentClient, find_movie};
use senti_types::SentimentLabel;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "senti", version, about = "Analyze movie reviews with the sentiment service")]
struct Cli {
    /// Base URL of the sentiment service
    #[arg(long, env = "SENTI_URL", default_value = "http://localhost:8000")]
    url: String,

    #[arg(long, env = "API_PREFIX", default_value = "/api/v1")]
    api_prefix: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a review
    Predict {
        /// Movie the review is about
        #[arg(long)]
        movie: Option<String>,

        text: String,
    },
    /// Show service health
    Health,
    /// List the movies available for review
    Movies,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = SentimentClient::new(&cli.url, Duration::from_secs(cli.timeout))
        .context("failed to build HTTP client")?
        .with_api_prefix(&cli.api_prefix);

    match cli.command {
        Command::Predict { movie, text } => predict(&client, movie.as_deref(), &text).await,
        Command::Health => health(&client, &cli.url).await,
        Command::Movies => {
            for movie in MOVIES {
                println!("{movie}");
            }
            Ok(())
        }
    }
}

async fn predict(client: &SentimentClient, movie: Option<&str>, text: &str) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        bail!("Please enter some text to analyze.");
    }

    if let Some(name) = movie {
        let Some(title) = find_movie(name) else {
            bail!("Unknown movie {name:?}; run `senti movies` for the list");
        };
        println!("Review of {title}");
    }

    let result = match client.predict(text).await {
        Ok(result) => result,
        Err(e @ ClientError::Connect(_)) => {
            return Err(e).context("is the backend running? check --url");
        }
        Err(e) => return Err(e.into()),
    };

    let heading = match result.sentiment {
        SentimentLabel::Positive => "Positive sentiment",
        SentimentLabel::Negative => "Negative sentiment",
    };
    println!("{heading}");
    println!("  Confidence:  {:.2}%", result.confidence * 100.0);
    println!("  Probability: {:.2}%", result.probability * 100.0);
    println!("  Processed:   {}", result.processed_text);
    Ok(())
}

async fn health(client: &SentimentClient, url: &str) -> anyhow::Result<()> {
    let health = client
        .health()
        .await
        .with_context(|| format!("health check against {url} failed"))?;

    println!("Status:      {}", health.status);
    println!("Model:       {}", loaded(health.model_loaded));
    println!("Tokenizer:   {}", loaded(health.tokenizer_loaded));
    println!("Environment: {}", health.environment);
    Ok(())
}

fn loaded(flag: bool) -> &'static str {
    if flag { "loaded" } else { "not loaded" }
}

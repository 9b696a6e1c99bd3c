use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use senti_app::{AppState, ServerController, logging, shutdown_signal};
use senti_config::Config;

#[derive(Parser)]
#[command(name = "senti-app", version, about = "Sentiment analysis HTTP service")]
struct Args {
    /// Env file loaded before reading configuration (default: ./.env)
    #[arg(long)]
    env_file: Option<PathBuf>,

    #[arg(long)]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,

    /// Predict endpoint of the served model
    #[arg(long)]
    model_url: Option<String>,

    #[arg(long)]
    tokenizer_path: Option<String>,

    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = self.model_url {
            config.model.url = Some(url);
        }
        if let Some(path) = self.tokenizer_path {
            config.model.tokenizer_path = path;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Environment is settled before the runtime starts any threads
    match &args.env_file {
        Some(path) => {
            dotenvy::from_path_override(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv_override().ok();
        }
    }

    let mut config = Config::new();
    args.apply(&mut config);

    logging::init_logging(&config.logging)?;
    config.warn_invalid();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    runtime.block_on(run(config))
}

async fn run(config: Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState::initialize(config));
    let controller = ServerController::new(state);

    let cancel = controller.cancel_token();
    tokio::spawn(async move {
        shutdown_signal().await;
        cancel.cancel();
    });

    controller.run().await
}

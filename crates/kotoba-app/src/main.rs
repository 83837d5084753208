use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use kotoba_config::log::LogConfig;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod events;
pub mod io;
pub mod profile;
pub mod state;


use self::events::{AppEvent, event_loop};
use self::state::{AppState, OutputOptions};

/// Look up every word of a Japanese sentence in the configured dictionaries
#[derive(Debug, Parser)]
#[command(name = "kotoba", version)]
struct Args {
    /// JSON config file; defaults apply when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Trim and NFKC-normalize input before lookup
    #[arg(long)]
    normalize: bool,

    /// Pretty-print JSON responses
    #[arg(long)]
    pretty: bool,

    /// Sentences to look up; stdin is read line by line when none are given
    sentences: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = profile::load_config(args.config.as_deref())?;
    init_tracing(&config.log);

    let output = OutputOptions {
        normalize: args.normalize,
        pretty: args.pretty,
    };
    let state = Arc::new(AppState::new(config, output));
    let startup = state.processor.start_tokenizer(state.config.tokenizer.clone());

    if !args.sentences.is_empty() {
        if let Err(e) = startup.await {
            tracing::error!("Tokenizer startup task panicked: {e}");
        }
        for sentence in &args.sentences {
            let response = events::text_input::respond(&state, sentence.clone()).await?;
            println!("{response}");
        }
        return Ok(());
    }

    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    run(state, shutdown).await;
    Ok(())
}

/// Serve stdin until it closes or shutdown is requested
pub async fn run(state: Arc<AppState>, shutdown: impl Future<Output = ()>) {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(64);

    let reader = tokio::spawn(async move {
        if let Err(e) = io::stdin_reader(tx).await {
            tracing::error!("stdin reader exited: {e}");
        }
    });

    let server = tokio::spawn(async move {
        if let Err(e) = event_loop(state, rx, std::io::stdout()).await {
            tracing::error!("event_loop exited: {e}");
        }
    });

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        result = server => {
            if let Err(e) = result {
                tracing::error!("server task panicked: {e}");
            }
        }
    }

    reader.abort();
}

fn init_tracing(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };
    if !installed {
        tracing::debug!("Tracing subscriber already installed");
    }
}

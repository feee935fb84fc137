//! gadfly — motivational heckling from the command line.
//!
//! One-shot: `gadfly 4200` prints a single sentence for that step count.
//! Watch mode: `gadfly --watch` reads step counts line-by-line from stdin
//! (a stand-in for a live step-count observer) and prints a sentence per
//! update, suppressing failures like any display surface.

use std::sync::Arc;

use clap::Parser;
use tokio::io::AsyncBufReadExt;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;

use gadfly::{ClientConfig, GadflyClient, heckle_stream};

/// Motivational heckling for daily step counts.
#[derive(Parser)]
#[command(name = "gadfly")]
#[command(version)]
#[command(about = "Turn a step count into one playfully insulting sentence")]
struct Args {
    /// Step count to react to.
    #[arg(required_unless_present = "watch")]
    steps: Option<u32>,

    /// Read step counts line-by-line from stdin, one sentence per update.
    #[arg(long)]
    watch: bool,

    /// Model identifier.
    #[arg(long, env = "GADFLY_MODEL")]
    model: Option<String>,

    /// Chat-completions endpoint URL.
    #[arg(long, env = "GADFLY_BASE_URL")]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = ClientConfig::from_env();
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(url) = args.base_url {
        config.base_url = url;
    }
    if config.api_key.is_empty() {
        eprintln!("error: GADFLY_API_KEY is not set");
        std::process::exit(2);
    }

    let client = Arc::new(GadflyClient::new(config)?);

    if args.watch {
        let lines = LinesStream::new(tokio::io::BufReader::new(tokio::io::stdin()).lines());
        let steps = lines.filter_map(|line| line.ok().and_then(|s| s.trim().parse::<u32>().ok()));

        let mut sentences = heckle_stream(client, steps);
        while let Some(sentence) = sentences.next().await {
            println!("{sentence}");
        }
    } else if let Some(steps) = args.steps {
        let sentence = client.heckle(steps).await?;
        println!("{sentence}");
    }

    Ok(())
}

//! Command-line front end for the Instagram post extractor.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cmd;

#[derive(Parser)]
#[command(name = "instagram")]
#[command(about = "Extract Instagram post data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a post and print the normalized record as JSON
    Extract {
        /// Post shortcode, e.g. DKHRsO_tx_o
        shortcode: String,

        /// JSON file with replacement protocol tokens
        #[arg(long, value_name = "FILE")]
        fingerprint: Option<PathBuf>,
    },

    /// Fetch posts and save the raw API responses as fixture files
    Capture {
        /// Post shortcodes to capture
        #[arg(value_name = "SHORTCODE", required = true)]
        shortcodes: Vec<String>,

        /// Directory the raw responses are written to
        #[arg(long, default_value = "fixtures")]
        dir: PathBuf,

        /// Extract only; do not write fixture files
        #[arg(long)]
        skip_fixture: bool,
    },

    /// Run the extractor over a few known posts
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,instagram_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            shortcode,
            fingerprint,
        } => cmd::extract::run(&shortcode, fingerprint.as_deref()).await,
        Commands::Capture {
            shortcodes,
            dir,
            skip_fixture,
        } => cmd::capture::run(&shortcodes, &dir, skip_fixture).await,
        Commands::Demo => cmd::demo::run().await,
    }
}

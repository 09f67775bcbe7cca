//! Main entry point for the Vaani Translator service

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vaani_translator::server;

/// Vaani Translator - English to Hindi translation service
#[derive(Parser, Debug)]
#[command(name = "vaani-translator", version, about, long_about = None)]
struct Args {
    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Listen port
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Inference API token (optional, defaults to HF_API_TOKEN env var)
    #[arg(long)]
    api_token: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("vaani_translator={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Some(api_token) = args.api_token {
        std::env::set_var("HF_API_TOKEN", api_token);
    }

    server::run_server(args.host, args.port).await
}

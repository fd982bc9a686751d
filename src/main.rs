//! CLI entry point for the puzzlefetch tool.

use anyhow::Result;
use clap::Parser;
use puzzlefetch::fetch::DEFAULT_CONNECT_TIMEOUT_SECS;
use puzzlefetch::{ExtractConfig, HttpClient, fetch_and_render, read_urls};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let urls = read_urls(&args.logfile, &ExtractConfig::default())?;

    match args.todir {
        Some(dest_dir) => {
            let client =
                HttpClient::with_timeouts(DEFAULT_CONNECT_TIMEOUT_SECS, args.timeout_secs);
            fetch_and_render(&urls, &dest_dir, &client).await?;
            info!(
                images = urls.len(),
                dir = %dest_dir.display(),
                "puzzle downloaded"
            );
        }
        None => {
            // Presentation is the caller's job; extraction itself prints nothing.
            for url in &urls {
                println!("{url}");
            }
        }
    }

    Ok(())
}

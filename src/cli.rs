//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use puzzlefetch::fetch::DEFAULT_REQUEST_TIMEOUT_SECS;

/// Extract puzzle image URLs from an Apache access log.
///
/// Without --todir the sorted URL list is printed to stdout; with it the
/// images are downloaded into the directory and an index.html is written.
#[derive(Parser, Debug)]
#[command(name = "puzzlefetch")]
#[command(author, version, about)]
pub struct Args {
    /// Apache access log to extract puzzle URLs from
    pub logfile: PathBuf,

    /// Destination directory for downloaded images (print URLs when absent)
    #[arg(short = 'd', long)]
    pub todir: Option<PathBuf>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Total per-request timeout in seconds (1-600)
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=600))]
    pub timeout_secs: u64,
}

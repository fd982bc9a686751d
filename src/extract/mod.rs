//! URL extraction from Apache access logs.
//!
//! This module turns a log file into a deduplicated, deterministically
//! ordered list of puzzle image URLs. The server hostname comes from the
//! log *filename*, the resource paths come from matching log lines, and
//! the final order comes from [`PuzzleUrl::ordering_key`].
//!
//! Extraction is pure with respect to presentation: nothing is printed
//! here. Callers decide whether the list is shown or downloaded.
//!
//! # Example
//!
//! ```no_run
//! use puzzlefetch::extract::{ExtractConfig, read_urls};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), puzzlefetch::ExtractError> {
//! let urls = read_urls(Path::new("animal_code.google.com"), &ExtractConfig::default())?;
//! for url in &urls {
//!     println!("{url}");
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod hostname;
mod line;
mod puzzle_url;

pub use config::ExtractConfig;
pub use error::ExtractError;
pub use puzzle_url::PuzzleUrl;

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

/// Reads a log file and returns its puzzle URLs, deduplicated and sorted.
///
/// # Arguments
///
/// * `log_path` - Path to the Apache access log. Its filename must encode
///   the server hostname per `config.host_delimiter`.
/// * `config` - Hostname convention and path grammar to apply.
///
/// # Returns
///
/// The unique puzzle URLs in assembly order. A log with no matching lines
/// yields an empty list, not an error.
///
/// # Errors
///
/// - [`ExtractError::Configuration`] if the filename encodes no hostname.
/// - [`ExtractError::FileAccess`] if the log file cannot be read.
/// - [`ExtractError::MalformedUrl`] if an assembled URL is invalid (only
///   possible with a non-default grammar).
#[tracing::instrument(skip(config), fields(log = %log_path.display()))]
pub fn read_urls(log_path: &Path, config: &ExtractConfig) -> Result<Vec<PuzzleUrl>, ExtractError> {
    let host = hostname::host_from_filename(log_path, config.host_delimiter)?;
    debug!(host = %host, "derived server hostname");

    let content = std::fs::read_to_string(log_path)
        .map_err(|e| ExtractError::file_access(log_path, e))?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut urls: Vec<PuzzleUrl> = Vec::new();
    let mut lines = 0usize;
    let mut matched = 0usize;
    let mut duplicates = 0usize;

    for raw_line in content.lines() {
        lines += 1;
        let Some(path) = line::extract_path(raw_line, config) else {
            continue;
        };
        matched += 1;

        let url = PuzzleUrl::assemble(&config.scheme, &host, &path)?;
        if seen.insert(url.as_str().to_string()) {
            urls.push(url);
        } else {
            duplicates += 1;
        }
    }

    urls.sort();

    info!(
        lines,
        matched,
        duplicates,
        unique = urls.len(),
        "extraction complete"
    );

    Ok(urls)
}

//! Sequential download of puzzle pieces and index rendering.
//!
//! Given the ordered URL list from [`crate::extract`], this module
//! downloads each piece into a destination directory under its positional
//! name (`img0`, `img1`, ...) and writes an `index.html` that shows the
//! pieces in order.
//!
//! Downloads are strictly sequential: one URL is awaited at a time, and
//! the first failure aborts the run. Pieces written before the failure
//! stay on disk.

mod client;
mod error;
mod index;

pub use client::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, HttpClient};
pub use error::FetchError;
pub use index::{INDEX_FILENAME, render_index};

use std::path::Path;

use tracing::{debug, info};

use crate::extract::PuzzleUrl;

/// Downloads every URL into `dest_dir` and writes the HTML index.
///
/// The directory (including intermediate segments) is created if absent.
/// Each URL at 0-based position `i` is fetched and persisted as
/// `dest_dir/img{i}`, then `dest_dir/index.html` is written referencing
/// the pieces in input order. Re-running with the same inputs overwrites
/// all files; the operation is not incremental.
///
/// # Errors
///
/// - [`FetchError::Filesystem`] if the directory cannot be created.
/// - [`FetchError::Network`], [`FetchError::Timeout`] or
///   [`FetchError::HttpStatus`] on the first failing fetch, identifying
///   the offending URL and index. Earlier pieces remain on disk.
/// - [`FetchError::Io`] if a piece or the index cannot be written.
#[tracing::instrument(skip(urls, client), fields(count = urls.len(), dir = %dest_dir.display()))]
pub async fn fetch_and_render(
    urls: &[PuzzleUrl],
    dest_dir: &Path,
    client: &HttpClient,
) -> Result<(), FetchError> {
    tokio::fs::create_dir_all(dest_dir)
        .await
        .map_err(|e| FetchError::filesystem(dest_dir, e))?;

    for (index, url) in urls.iter().enumerate() {
        let dest = dest_dir.join(format!("img{index}"));
        let bytes = client.fetch_to_file(url.as_str(), index, &dest).await?;
        debug!(index, bytes, url = %url, "piece downloaded");
    }

    index::write_index(dest_dir, urls.len()).await?;

    info!(images = urls.len(), "fetch complete");
    Ok(())
}

//! HTTP client wrapper for fetching puzzle pieces.
//!
//! One `reqwest::Client` is built per run and reused for every piece, so
//! connections to the puzzle server are pooled. Response bodies are
//! streamed to disk rather than buffered.

use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, instrument};

use super::error::FetchError;

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default total per-request timeout in seconds.
///
/// The original tool had no bound at all; a hung server froze the whole
/// run. A total-request timeout is the deliberate robustness addition.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Identifying User-Agent sent with every request.
fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("puzzlefetch/{version}")
}

/// HTTP client for fetching puzzle pieces to disk.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Creates a client with the default timeouts.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeouts(DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS)
    }

    /// Creates a client with explicit connect and total-request timeouts.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails with the supplied
    /// configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_timeouts(connect_timeout_secs: u64, request_timeout_secs: u64) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .timeout(Duration::from_secs(request_timeout_secs))
            .gzip(true)
            .user_agent(default_user_agent())
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Fetches `url` (the piece at position `index`) and writes the body
    /// to `dest`, overwriting any existing file.
    ///
    /// # Returns
    ///
    /// The number of body bytes written.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Timeout`] if the request exceeds the timeout.
    /// - [`FetchError::Network`] for any other transport failure.
    /// - [`FetchError::HttpStatus`] for a non-2xx response.
    /// - [`FetchError::Io`] if writing `dest` fails.
    #[instrument(skip(self), fields(url = %url, index))]
    pub async fn fetch_to_file(
        &self,
        url: &str,
        index: usize,
        dest: &Path,
    ) -> Result<u64, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::timeout(url, index)
            } else {
                FetchError::network(url, index, e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::http_status(url, index, status.as_u16()));
        }

        let file = File::create(dest)
            .await
            .map_err(|e| FetchError::io(dest, e))?;
        let mut writer = BufWriter::new(file);
        let mut stream = response.bytes_stream();
        let mut bytes_written: u64 = 0;

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| {
                if e.is_timeout() {
                    FetchError::timeout(url, index)
                } else {
                    FetchError::network(url, index, e)
                }
            })?;
            writer
                .write_all(&chunk)
                .await
                .map_err(|e| FetchError::io(dest, e))?;
            bytes_written += chunk.len() as u64;
        }

        writer.flush().await.map_err(|e| FetchError::io(dest, e))?;

        debug!(bytes = bytes_written, path = %dest.display(), "piece written");
        Ok(bytes_written)
    }
}

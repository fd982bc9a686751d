//! Error types for the fetch module.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while downloading pieces and writing the index.
///
/// All variants abort the run. There are no partial-success semantics:
/// files written before the failing step stay on disk, nothing is rolled
/// back, and nothing after the failure is attempted.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The destination directory could not be created.
    #[error("cannot create destination directory {path}: {source}")]
    Filesystem {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Network-level error (DNS resolution, connection refused, TLS, etc.)
    #[error("network error fetching {url} (image {index}): {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// 0-based position of the URL in the input sequence.
        index: usize,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// The fetch exceeded the configured timeout.
    #[error("timeout fetching {url} (image {index})")]
    Timeout {
        /// The URL that timed out.
        url: String,
        /// 0-based position of the URL in the input sequence.
        index: usize,
    },

    /// The server answered with a non-2xx status.
    #[error("HTTP {status} fetching {url} (image {index})")]
    HttpStatus {
        /// The URL that returned the error status.
        url: String,
        /// 0-based position of the URL in the input sequence.
        index: usize,
        /// The HTTP status code.
        status: u16,
    },

    /// File system error while persisting a response body or the index.
    #[error("IO error writing {path}: {source}")]
    Io {
        /// The file path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Creates a `Filesystem` error.
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Creates a network error for the URL at `index`.
    pub fn network(url: impl Into<String>, index: usize, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            index,
            source,
        }
    }

    /// Creates a timeout error for the URL at `index`.
    pub fn timeout(url: impl Into<String>, index: usize) -> Self {
        Self::Timeout {
            url: url.into(),
            index,
        }
    }

    /// Creates an HTTP status error for the URL at `index`.
    pub fn http_status(url: impl Into<String>, index: usize, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            index,
            status,
        }
    }

    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// No `From<reqwest::Error>` / `From<std::io::Error>` impls: every variant
// needs context (url + index, or path) that the source errors don't carry.
// The constructor helpers are the conversion points.

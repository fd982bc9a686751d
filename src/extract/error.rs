//! Error types for log extraction operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while extracting puzzle URLs from a log file.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The log file could not be opened or read.
    #[error("cannot read log file {path}: {source}")]
    FileAccess {
        /// The log file path that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The log filename does not encode a usable server hostname.
    ///
    /// The hostname convention is part of the extractor configuration
    /// (see [`ExtractConfig`](super::ExtractConfig)); a filename that does
    /// not satisfy it fails the whole run rather than producing malformed
    /// URLs silently.
    #[error("cannot derive a hostname from log filename '{filename}': {reason}")]
    Configuration {
        /// The offending filename (final path component).
        filename: String,
        /// Why no hostname could be derived.
        reason: String,
    },

    /// An assembled URL did not parse as a valid HTTP(S) URL.
    ///
    /// Only reachable with a host or path grammar that emits invalid
    /// components; the default configuration never triggers it.
    #[error("assembled URL '{url}' is invalid: {reason}")]
    MalformedUrl {
        /// The URL string that failed validation.
        url: String,
        /// The parse failure reported by the `url` crate.
        reason: String,
    },
}

impl ExtractError {
    /// Creates a `FileAccess` error.
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Creates a `Configuration` error for an unusable log filename.
    pub fn configuration(filename: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            filename: filename.into(),
            reason: reason.into(),
        }
    }

    /// Creates a `MalformedUrl` error.
    pub fn malformed_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

// No blanket `From<std::io::Error>` impl: the FileAccess variant needs the
// path for a useful message, which the source error does not carry. The
// constructor helpers are the intended conversion points.

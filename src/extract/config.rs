//! Extractor configuration: hostname convention and path grammar.
//!
//! The hostname-from-filename convention and the path-extraction grammar
//! are configuration values rather than hard-coded literals, so the
//! extractor can be exercised against synthetic log conventions in tests.

use std::sync::LazyLock;

use regex::Regex;

/// Default path grammar for puzzle resource tokens.
///
/// Matches a non-whitespace run that starts at a path separator and
/// contains the literal `puzzle`, e.g. `/~foo/puzzle-bar-aaab.jpg` inside
/// a `"GET /~foo/puzzle-bar-aaab.jpg HTTP/1.0"` request segment. The
/// grammar captures the extension from the log line itself, so URL
/// assembly never appends one.
#[allow(clippy::expect_used)]
static DEFAULT_PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(/\S*puzzle\S*)").expect("default path pattern is valid") // Static pattern, safe to panic
});

/// Configuration for the URL extractor.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Delimiter splitting the log filename into a prefix and the server
    /// hostname (`animal_code.google.com` -> `code.google.com`).
    pub host_delimiter: char,
    /// URL scheme prepended to every assembled URL.
    pub scheme: String,
    /// Path grammar. Capture group 1 (or the whole match when there is no
    /// group) is taken as the resource path token.
    pub path_pattern: Regex,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            host_delimiter: '_',
            scheme: "https".to_string(),
            path_pattern: DEFAULT_PATH_PATTERN.clone(),
        }
    }
}

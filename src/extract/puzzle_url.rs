//! The `PuzzleUrl` type and its ordering key.

use std::cmp::Ordering;
use std::fmt;

use url::Url;

use super::error::ExtractError;

/// A fully qualified URL pointing at one piece of the scrambled puzzle.
///
/// Identity is the full URL string; two `PuzzleUrl`s are equal exactly
/// when their strings are equal, which is also the deduplication key.
///
/// # Ordering
///
/// `Ord` sorts by [`ordering_key`](Self::ordering_key), with the full URL
/// string breaking ties, so any set of puzzle URLs has one deterministic
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleUrl(String);

impl PuzzleUrl {
    /// Assembles and validates a puzzle URL from its components.
    ///
    /// The stored string is exactly `{scheme}://{host}{path}`; validation
    /// via the `url` crate only guards against component combinations that
    /// do not form a real URL (possible with a non-default grammar).
    ///
    /// `Url::parse` alone is not enough: it accepts `https:///p.jpg`, and
    /// a host containing path separators gets silently re-split between
    /// authority and path. So after parsing, the authority must be
    /// non-empty and must round-trip to the supplied `host` (host names
    /// compare case-insensitively; a default port may normalize away).
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::MalformedUrl`] if the assembled string does
    /// not parse as a URL, or if its authority does not match `host`.
    pub fn assemble(scheme: &str, host: &str, path: &str) -> Result<Self, ExtractError> {
        let assembled = format!("{scheme}://{host}{path}");
        let parsed = Url::parse(&assembled)
            .map_err(|e| ExtractError::malformed_url(&assembled, e.to_string()))?;

        let host_str = parsed.host_str().unwrap_or("");
        if host_str.is_empty() {
            return Err(ExtractError::malformed_url(&assembled, "URL has no host"));
        }

        let authority = match parsed.port() {
            Some(port) => format!("{host_str}:{port}"),
            None => host_str.to_string(),
        };
        let host_round_trips = authority.eq_ignore_ascii_case(host)
            || parsed
                .port_or_known_default()
                .is_some_and(|port| format!("{host_str}:{port}").eq_ignore_ascii_case(host));
        if !host_round_trips {
            return Err(ExtractError::malformed_url(
                &assembled,
                format!("host parsed as '{authority}', expected '{host}'"),
            ));
        }

        Ok(Self(assembled))
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the key this URL sorts by.
    ///
    /// Puzzle piece filenames encode their assembly position in a
    /// scrambled form: the stem of the final path segment is a run of
    /// hyphen-separated words, and the *last* word carries the real
    /// position (`puzzle-bar-baab.jpg` sorts by `baab`). When the stem has
    /// fewer than two words there is nothing scrambled to undo and the
    /// full URL is the key, which degrades to plain lexicographic order.
    ///
    /// This is the single place the filename-encoding convention lives;
    /// sorting anywhere else must go through it.
    #[must_use]
    pub fn ordering_key(&self) -> &str {
        let segment = self.0.rsplit('/').next().unwrap_or(&self.0);
        let stem = segment.split('.').next().unwrap_or(segment);
        let mut words = stem.rsplit('-');
        match (words.next(), words.next()) {
            (Some(last), Some(_)) => last,
            _ => self.0.as_str(),
        }
    }
}

impl fmt::Display for PuzzleUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for PuzzleUrl {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordering_key()
            .cmp(other.ordering_key())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for PuzzleUrl {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn url(path: &str) -> PuzzleUrl {
        PuzzleUrl::assemble("https", "code.google.com", path).unwrap()
    }

    #[test]
    fn test_assemble_produces_exact_string() {
        let u = url("/p/puzzle-a-b.jpg");
        assert_eq!(u.as_str(), "https://code.google.com/p/puzzle-a-b.jpg");
        assert_eq!(u.to_string(), u.as_str());
    }

    #[test]
    fn test_assemble_rejects_invalid_components() {
        // Parses as `https:///p.jpg`, a URL with an empty host.
        let err = PuzzleUrl::assemble("https", "", "/p.jpg").unwrap_err();
        assert!(matches!(err, ExtractError::MalformedUrl { .. }));
    }

    #[test]
    fn test_assemble_rejects_host_bleeding_into_path() {
        // `a/b` would re-split into host `a` + path `/b/p.jpg`.
        let err = PuzzleUrl::assemble("https", "a/b", "/p.jpg").unwrap_err();
        assert!(matches!(err, ExtractError::MalformedUrl { .. }));
    }

    #[test]
    fn test_assemble_accepts_mixed_case_host() {
        let u = PuzzleUrl::assemble("https", "Code.Google.COM", "/p.jpg").unwrap();
        assert_eq!(u.as_str(), "https://Code.Google.COM/p.jpg");
    }

    #[test]
    fn test_assemble_accepts_host_with_port() {
        let explicit = PuzzleUrl::assemble("http", "127.0.0.1:8080", "/p.jpg").unwrap();
        assert_eq!(explicit.as_str(), "http://127.0.0.1:8080/p.jpg");

        // A scheme-default port normalizes away during parsing but is
        // still the same authority.
        let default = PuzzleUrl::assemble("https", "example.com:443", "/p.jpg").unwrap();
        assert_eq!(default.as_str(), "https://example.com:443/p.jpg");
    }

    #[test]
    fn test_ordering_key_is_last_word_of_stem() {
        assert_eq!(url("/p/puzzle-bar-baab.jpg").ordering_key(), "baab");
        assert_eq!(url("/p/a-c-b.jpg").ordering_key(), "b");
    }

    #[test]
    fn test_ordering_key_two_word_stem() {
        assert_eq!(url("/p/puzzle-aaab.jpg").ordering_key(), "aaab");
    }

    #[test]
    fn test_ordering_key_single_word_stem_falls_back_to_full_url() {
        let u = url("/p/piece.jpg");
        assert_eq!(u.ordering_key(), u.as_str());
    }

    #[test]
    fn test_ord_sorts_scrambled_names_into_assembly_order() {
        let mut urls = vec![url("/a-c-b.jpg"), url("/a-a-a.jpg"), url("/a-b-a.jpg")];
        urls.sort();
        let order: Vec<_> = urls.iter().map(PuzzleUrl::as_str).collect();
        // Keys: a, a, b; the two 'a' keys tie-break on the full URL.
        assert_eq!(
            order,
            vec![
                "https://code.google.com/a-a-a.jpg",
                "https://code.google.com/a-b-a.jpg",
                "https://code.google.com/a-c-b.jpg",
            ]
        );
    }

    #[test]
    fn test_ord_is_deterministic_under_tie() {
        let a = url("/x/p-one-zz.jpg");
        let b = url("/y/p-two-zz.jpg");
        // Same key, different URLs: full-string tie-break, stable both ways.
        assert_eq!(a.ordering_key(), b.ordering_key());
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&a), Ordering::Greater);
    }

    #[test]
    fn test_equality_is_exact_string_equality() {
        assert_eq!(url("/p/a-b.jpg"), url("/p/a-b.jpg"));
        assert_ne!(url("/p/a-b.jpg"), url("/p/a-b.JPG"));
    }
}

//! Per-line path token extraction.

use tracing::trace;

use super::config::ExtractConfig;

/// Extracts the puzzle resource path from one log line, if it carries one.
///
/// The configured path grammar is applied to the whole line; capture group
/// 1 (or the whole match for group-less grammars) is taken as the path
/// token. Trailing quote and sentence punctuation that a `\S` run can pick
/// up from a malformed request segment is trimmed. Lines without a match
/// yield `None` with no side effect.
pub(crate) fn extract_path(line: &str, config: &ExtractConfig) -> Option<String> {
    let caps = config.path_pattern.captures(line)?;
    let token = caps.get(1).or_else(|| caps.get(0))?.as_str();
    let cleaned = trim_token(token);
    if cleaned.is_empty() {
        return None;
    }
    trace!(path = %cleaned, "found puzzle path token");
    Some(cleaned.to_string())
}

/// Trims trailing characters that are request-line syntax, not path.
fn trim_token(token: &str) -> &str {
    token.trim_end_matches(['"', '\'', ',', ';'])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> ExtractConfig {
        ExtractConfig::default()
    }

    #[test]
    fn test_extract_path_from_apache_line() {
        let line = r#"10.254.254.28 - - [06/Aug/2007:00:13:48 -0700] "GET /~foo/puzzle-bar-aaab.jpg HTTP/1.0" 302 528"#;
        assert_eq!(
            extract_path(line, &config()).unwrap(),
            "/~foo/puzzle-bar-aaab.jpg"
        );
    }

    #[test]
    fn test_extract_path_non_matching_line_is_inert() {
        let line = r#"10.254.254.28 - - [...] "GET /index.html HTTP/1.0" 200 1024"#;
        assert!(extract_path(line, &config()).is_none());
    }

    #[test]
    fn test_extract_path_empty_line() {
        assert!(extract_path("", &config()).is_none());
    }

    #[test]
    fn test_extract_path_trims_trailing_quote() {
        // Malformed request segment missing the " HTTP/1.0" tail.
        let line = r#""GET /puzzle/a-b.jpg""#;
        assert_eq!(extract_path(line, &config()).unwrap(), "/puzzle/a-b.jpg");
    }

    #[test]
    fn test_extract_path_keeps_extension() {
        let line = r#""GET /p/puzzle-x.jpg HTTP/1.0""#;
        assert!(extract_path(line, &config()).unwrap().ends_with(".jpg"));
    }

    #[test]
    fn test_trim_token_preserves_clean_paths() {
        assert_eq!(trim_token("/puzzle/a-b.jpg"), "/puzzle/a-b.jpg");
        assert_eq!(trim_token("/puzzle/a-b.jpg\";"), "/puzzle/a-b.jpg");
    }
}

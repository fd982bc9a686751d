//! Hostname derivation from the log filename.

use std::path::Path;

use super::error::ExtractError;

/// Derives the server hostname from the log file's name.
///
/// The final path component is split on `delimiter`; everything after the
/// first occurrence is the host (`animal_code.google.com` ->
/// `code.google.com`). A filename with no delimiter, or with nothing after
/// it, is a configuration error: the run fails fast instead of assembling
/// malformed URLs.
pub(crate) fn host_from_filename(log_path: &Path, delimiter: char) -> Result<String, ExtractError> {
    let filename = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            ExtractError::configuration(log_path.display().to_string(), "path has no filename")
        })?;

    let Some((_, host)) = filename.split_once(delimiter) else {
        return Err(ExtractError::configuration(
            filename,
            format!("no '{delimiter}' delimiter in filename"),
        ));
    };

    if host.is_empty() {
        return Err(ExtractError::configuration(
            filename,
            format!("nothing follows the '{delimiter}' delimiter"),
        ));
    }

    Ok(host.to_string())
}

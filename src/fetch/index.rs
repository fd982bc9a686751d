//! HTML index rendering for downloaded pieces.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::FetchError;

/// Filename of the generated index document.
pub const INDEX_FILENAME: &str = "index.html";

/// Renders the index document for `count` downloaded pieces.
///
/// One `<img>` per piece, referencing the local relative names `img0` ..
/// `img{count-1}` in order. The tags sit on one line so the pieces render
/// side by side and the reassembled image is visible in a browser.
#[must_use]
pub fn render_index(count: usize) -> String {
    let mut body = String::new();
    for i in 0..count {
        // Infallible for String; the Write import is for write!.
        let _ = write!(body, r#"<img src="img{i}">"#);
    }
    format!("<html>\n<body>\n{body}\n</body>\n</html>\n")
}

/// Writes the index document into `dest_dir`, overwriting any existing one.
///
/// # Errors
///
/// Returns [`FetchError::Io`] if the file cannot be written.
pub async fn write_index(dest_dir: &Path, count: usize) -> Result<PathBuf, FetchError> {
    let path = dest_dir.join(INDEX_FILENAME);
    tokio::fs::write(&path, render_index(count))
        .await
        .map_err(|e| FetchError::io(&path, e))?;
    debug!(path = %path.display(), images = count, "index written");
    Ok(path)
}

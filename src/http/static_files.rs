//! Static file responder.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::http::mime::content_type_for_path;
use crate::http::response::{error_page, format_response};

/// Reads `file` and wraps it in a `200 OK` response of `content_type`.
///
/// Any read failure, including a missing file, yields a 404 page naming
/// `requested`. Nothing is retried.
pub async fn serve_file(content_type: &str, file: &Path, requested: &str) -> Vec<u8> {
    match tokio::fs::read(file).await {
        Ok(contents) => {
            debug!(file = %file.display(), bytes = contents.len(), "Serving static file");
            format_response("200 OK", content_type, None, &contents)
        }
        Err(e) => {
            debug!(file = %file.display(), error = %e, "Static file unavailable");
            error_page(404, requested)
        }
    }
}

/// Serves `relative` from `root`, reporting errors against `requested`.
///
/// Without a root, static serving is disabled and the answer is a 403 page.
/// Paths with a `..` segment are refused the same way.
pub async fn respond(root: Option<&Path>, relative: &str, requested: &str) -> Vec<u8> {
    let Some(root) = root else {
        debug!(path = requested, "Static serving disabled");
        return error_page(403, requested);
    };

    if relative.split(['/', '\\']).any(|segment| segment == "..") {
        warn!(path = relative, "Refusing static path outside the root");
        return error_page(403, requested);
    }

    let file = resolve(root, relative);
    serve_file(content_type_for_path(relative), &file, requested).await
}

/// Joins by concatenation; `relative` normally starts with `/`.
pub fn resolve(root: &Path, relative: &str) -> PathBuf {
    let mut joined = root.as_os_str().to_owned();
    joined.push(relative);
    PathBuf::from(joined)
}

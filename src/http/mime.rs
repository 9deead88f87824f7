//! Content types for static files.

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Maps a file extension (without the dot) to its content type.
///
/// Matching is exact and case-sensitive; anything unknown is served as
/// `application/octet-stream`.
pub fn content_type(ext: &str) -> &'static str {
    match ext {
        "html" | "htm" => "text/html",
        "js" => "text/javascript",
        "css" => "text/css",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "txt" => "text/plain",
        _ => DEFAULT_CONTENT_TYPE,
    }
}

/// Returns the extension of the final segment of `path`, if it has one.
///
/// Only the last segment is inspected, so `/v1.2/users` has no extension.
pub fn extension(path: &str) -> Option<&str> {
    let last = path.rsplit('/').next().unwrap_or(path);
    last.rfind('.').map(|dot| &last[dot + 1..])
}

/// Content type for a path, falling back to the default when it has no
/// extension.
pub fn content_type_for_path(path: &str) -> &'static str {
    extension(path).map(content_type).unwrap_or(DEFAULT_CONTENT_TYPE)
}

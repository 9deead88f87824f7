use webkernel::http::mime::{content_type, content_type_for_path, extension};
use webkernel::http::route::{matches, path_segment};

#[test]
fn test_matches_wildcard_segment() {
    assert!(matches("/a/*/c", "/a/b/c"));
    assert!(!matches("/a/*/c", "/a/b/d"));
    assert!(matches("/*", "/anything"));
}

#[test]
fn test_matches_literal_paths() {
    assert!(matches("/users", "/users"));
    assert!(!matches("/users", "/posts"));
    assert!(matches("/", "/"));
}

#[test]
fn test_matches_ignores_unconsumed_path_suffix() {
    assert!(matches("/api", "/api/v1/users"));
    assert!(matches("/a/*", "/a/b/c/d"));
}

#[test]
fn test_matches_wildcard_consumes_exactly_one_segment() {
    assert!(!matches("/a/*/d", "/a/b/c/d"));
    assert!(matches("/a/*/*/d", "/a/b/c/d"));
}

#[test]
fn test_matches_wildcard_at_end_of_path() {
    // The scan stops at the end of the path instead of running past it.
    assert!(!matches("/a/*/c", "/a/b"));
    assert!(!matches("/x/*/y", "/x"));
}

#[test]
fn test_matches_path_shorter_than_pattern() {
    assert!(!matches("/users/list", "/users"));
}

#[test]
fn test_path_segment() {
    assert_eq!(path_segment("/users/42/posts", 0), "users");
    assert_eq!(path_segment("/users/42/posts", 1), "42");
    assert_eq!(path_segment("/users/42/posts", 2), "posts");
    assert_eq!(path_segment("/users/42/posts", 3), "");
}

#[test]
fn test_path_segment_trailing_separator() {
    assert_eq!(path_segment("/a/", 0), "a");
    assert_eq!(path_segment("/a/", 1), "");
}

#[test]
fn test_content_type_table() {
    assert_eq!(content_type("html"), "text/html");
    assert_eq!(content_type("htm"), "text/html");
    assert_eq!(content_type("js"), "text/javascript");
    assert_eq!(content_type("css"), "text/css");
    assert_eq!(content_type("jpg"), "image/jpeg");
    assert_eq!(content_type("jpeg"), "image/jpeg");
    assert_eq!(content_type("png"), "image/png");
    assert_eq!(content_type("gif"), "image/gif");
    assert_eq!(content_type("txt"), "text/plain");
    assert_eq!(content_type("pdf"), "application/octet-stream");
    assert_eq!(content_type("CSS"), "application/octet-stream");
}

#[test]
fn test_extension_uses_last_segment() {
    assert_eq!(extension("/app.js"), Some("js"));
    assert_eq!(extension("/assets/site.min.css"), Some("css"));
    assert_eq!(extension("/v1.2/users"), None);
    assert_eq!(extension("/users"), None);
    assert_eq!(content_type_for_path("/files/report.pdf"), "application/octet-stream");
    assert_eq!(content_type_for_path("/noext"), "application/octet-stream");
}

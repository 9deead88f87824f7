use std::path::Path;

use webkernel::http::static_files::{resolve, respond, serve_file};

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[test]
fn test_resolve_concatenates_root_and_path() {
    let file = resolve(Path::new("/srv/www"), "/css/site.css");

    assert_eq!(file, Path::new("/srv/www/css/site.css"));
}

#[tokio::test]
async fn test_serve_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("site.css"), "body{}").unwrap();

    let bytes = respond(Some(dir.path()), "/site.css", "/site.css").await;
    let out = text(&bytes);

    assert!(out.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(out.contains("Content-Type: text/css; charset=utf-8\r\n"));
    assert!(out.contains("Content-Length: 6\r\n"));
    assert!(out.ends_with("\r\n\r\nbody{}"));
}

#[tokio::test]
async fn test_serve_binary_file_intact() {
    let dir = tempfile::tempdir().unwrap();
    let contents = vec![0x89, b'P', b'N', b'G', 0, 0, 1, 0];
    std::fs::write(dir.path().join("logo.png"), &contents).unwrap();

    let bytes = serve_file("image/png", &dir.path().join("logo.png"), "/logo.png").await;

    assert!(text(&bytes).contains("Content-Length: 8\r\n"));
    assert!(bytes.ends_with(&contents));
}

#[tokio::test]
async fn test_missing_file_names_requested_path() {
    let dir = tempfile::tempdir().unwrap();

    let bytes = respond(Some(dir.path()), "/files/report.pdf", "/submit").await;
    let out = text(&bytes);

    assert!(out.starts_with("HTTP/1.1 404 Not Found\r\n"));
    assert!(out.contains("<p>/submit</p>"));
}

#[tokio::test]
async fn test_no_static_root_is_forbidden() {
    let bytes = respond(None, "/app.js", "/app.js").await;
    let out = text(&bytes);

    assert!(out.starts_with("HTTP/1.1 403 Forbidden\r\n"));
    assert!(out.contains("<p>/app.js</p>"));
}

#[tokio::test]
async fn test_parent_segments_are_forbidden() {
    let dir = tempfile::tempdir().unwrap();

    let bytes = respond(Some(dir.path()), "/../secret.txt", "/../secret.txt").await;

    assert!(text(&bytes).starts_with("HTTP/1.1 403 Forbidden\r\n"));
}

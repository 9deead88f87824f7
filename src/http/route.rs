//! Helpers for handlers that route on the request path.
//!
//! Patterns are plain paths where a `*` stands for exactly one path segment:
//!
//! ```
//! # use webkernel::http::route::{matches, path_segment};
//! assert!(matches("/users/*/posts", "/users/42/posts"));
//! assert_eq!(path_segment("/users/42/posts", 1), "42");
//! ```

/// Returns whether `path` matches the route `pattern`.
///
/// Both strings are expected to start with `/`. They are compared byte by
/// byte; a `*` in the pattern consumes the path up to its next `/` (or its
/// end). Matching succeeds once the pattern is exhausted, even if the path
/// has more segments. There is no backtracking: one `*` never spans two
/// segments.
pub fn matches(pattern: &str, path: &str) -> bool {
    let pattern = pattern.as_bytes();
    let path = path.as_bytes();

    // Skip the leading separators.
    let mut p = 1.min(pattern.len());
    let mut q = 1.min(path.len());

    loop {
        let Some(&c) = pattern.get(p) else {
            return true;
        };

        if c == b'*' {
            p += 1;
            if p == pattern.len() {
                return true;
            }
            while q < path.len() && path[q] != b'/' {
                q += 1;
            }
            continue;
        }

        if path.get(q) != Some(&c) {
            return false;
        }
        p += 1;
        q += 1;
    }
}

/// Returns the `index`-th segment of `path` (0-based, counted after the
/// leading `/`).
///
/// The segment ends at the next `/` or the end of the string. Returns `""`
/// when the path has fewer segments.
pub fn path_segment(path: &str, index: usize) -> &str {
    path.split('/').nth(index + 1).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_without_trailing_separator() {
        assert!(!matches("/a/*/c", "/a/b"));
        assert!(matches("/a/*", "/a/b"));
    }
}

use std::fmt;

use crate::http::buffer::{HEADER_TERMINATOR, find_header_end};
use crate::http::request::{Method, Request};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The blank line ending the head has not arrived yet
    Incomplete,
    /// The request does not start with GET or POST
    UnsupportedMethod,
    /// Missing path or a head that is not valid UTF-8
    Malformed,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Incomplete => f.write_str("request head incomplete"),
            ParseError::UnsupportedMethod => f.write_str("unsupported request method"),
            ParseError::Malformed => f.write_str("malformed request line"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a request out of the bytes received so far.
///
/// Returns [`ParseError::Incomplete`] until `\r\n\r\n` is present. The path
/// runs from the first non-space byte after the method to the next space (or
/// line break); whatever follows becomes the header text. For GET the path is
/// split at the first `?` into path and query. For POST the path is kept whole
/// and every byte after the blank line is the payload, with no Content-Length
/// check.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let headers_end = find_header_end(buf).ok_or(ParseError::Incomplete)?;
    let head = &buf[..headers_end];
    let payload = &buf[headers_end + HEADER_TERMINATOR.len()..];

    let method = Method::from_prefix(head).ok_or(ParseError::UnsupportedMethod)?;

    let head = std::str::from_utf8(head).map_err(|_| ParseError::Malformed)?;
    let rest = head[method.as_str().len()..].trim_start();

    let path_end = rest.find([' ', '\r', '\n']).unwrap_or(rest.len());
    let target = &rest[..path_end];
    if target.is_empty() {
        return Err(ParseError::Malformed);
    }

    let after = &rest[path_end..];
    let header = after.strip_prefix(' ').unwrap_or(after);

    let (path, query) = match method {
        Method::GET => match target.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (target, None),
        },
        Method::POST => (target, None),
    };

    Ok(Request {
        method,
        path: path.to_string(),
        query,
        header: header.to_string(),
        payload: payload.to_vec(),
    })
}

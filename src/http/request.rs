use std::fmt;

/// HTTP request methods understood by the kernel.
///
/// Any other method closes the connection without a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - path with an optional query string
    GET,
    /// POST - path with the bytes after the head as payload
    POST,
}

impl Method {
    /// Recognizes the method from the first bytes of a request head.
    ///
    /// Only the prefix is compared, matching how the head is scanned.
    ///
    /// # Example
    ///
    /// ```
    /// # use webkernel::http::request::Method;
    /// assert_eq!(Method::from_prefix(b"GET / HTTP/1.1"), Some(Method::GET));
    /// assert_eq!(Method::from_prefix(b"PUT / HTTP/1.1"), None);
    /// ```
    pub fn from_prefix(head: &[u8]) -> Option<Self> {
        if head.starts_with(b"GET") {
            Some(Method::GET)
        } else if head.starts_with(b"POST") {
            Some(Method::POST)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed request, owning copies of everything taken from the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// Request path without the query string (e.g. "/index.html")
    pub path: String,
    /// Query string for GET requests, without the leading `?`
    pub query: Option<String>,
    /// Raw header text following the path, up to the blank line
    pub header: String,
    /// Bytes received after the blank line
    pub payload: Vec<u8>,
}

impl Request {
    /// Looks up a header value in the raw header text.
    ///
    /// See [`header_value`] for the matching rules.
    pub fn header_value(&self, key: &str) -> &str {
        header_value(&self.header, key)
    }

    /// The query string (GET) or the payload (POST) handed to handlers.
    ///
    /// A GET without a query yields no bytes; the payload is passed through
    /// untouched.
    pub fn data(&self) -> &[u8] {
        match self.method {
            Method::GET => self.query.as_deref().unwrap_or_default().as_bytes(),
            Method::POST => &self.payload,
        }
    }
}

/// Extracts the value following the first occurrence of `key` in `header`.
///
/// Spaces and tabs after the key are skipped and the value runs up to the next
/// carriage return (or the end of the text). Returns `""` when `key` does not
/// occur. The key is matched literally, so include the colon to avoid matching
/// inside other header names.
///
/// # Example
///
/// ```
/// # use webkernel::http::request::header_value;
/// let header = "Cookie: sid=5\r\nHost: x\r\n";
/// assert_eq!(header_value(header, "Cookie:"), "sid=5");
/// assert_eq!(header_value(header, "Missing:"), "");
/// ```
pub fn header_value<'a>(header: &'a str, key: &str) -> &'a str {
    if key.is_empty() {
        return "";
    }
    let Some(start) = header.find(key) else {
        return "";
    };
    let rest = header[start + key.len()..].trim_start_matches([' ', '\t']);
    match rest.find('\r') {
        Some(end) => &rest[..end],
        None => rest,
    }
}

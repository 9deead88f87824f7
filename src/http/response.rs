use std::io::Write;

use crate::http::status::status_text;

/// Version token carried by the `Server` header and the error page banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Formats a complete HTTP/1.1 response.
///
/// The head carries exactly `Server`, `Content-Type`, `Content-Length` and,
/// when a cookie is supplied, `Set-Cookie`. `Content-Length` is the length of
/// `body` and the body bytes are appended as they are, so binary content with
/// embedded NUL bytes is framed correctly.
///
/// # Example
///
/// ```
/// # use webkernel::http::response::format_response;
/// let bytes = format_response("200 OK", "text/html", None, b"hi");
/// let text = String::from_utf8(bytes).unwrap();
/// assert!(text.contains("Content-Length: 2\r\n"));
/// assert!(text.ends_with("\r\n\r\nhi"));
/// ```
pub fn format_response(
    status: &str,
    content_type: &str,
    cookie: Option<&str>,
    body: &[u8],
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(status.len() + content_type.len() + body.len() + 128);

    // Writes into a Vec cannot fail.
    let _ = write!(
        buf,
        "HTTP/1.1 {}\r\nServer: version/{}\r\nContent-Type: {}; charset=utf-8\r\nContent-Length: {}\r\n",
        status,
        VERSION,
        content_type,
        body.len()
    );
    if let Some(cookie) = cookie {
        let _ = write!(buf, "Set-Cookie: {}\r\n", cookie);
    }
    buf.extend_from_slice(b"\r\n");
    buf.extend_from_slice(body);

    buf
}

/// Formats a response for a numeric status code.
///
/// Codes missing from the status table are sent as `200 OK`.
pub fn response(
    code: u16,
    content_type: &str,
    cookie: Option<&str>,
    body: impl AsRef<[u8]>,
) -> Vec<u8> {
    format_response(status_text(code), content_type, cookie, body.as_ref())
}

/// Builds a minimal HTML error page and formats it as a `text/html` response.
///
/// `detail` is embedded verbatim. It is not HTML-escaped, so callers must not
/// pass untrusted markup.
pub fn error_page(code: u16, detail: &str) -> Vec<u8> {
    let status = status_text(code);
    let page = format!(
        "<html><head><title>{status}</title></head><body bgcolor='white'>\
         <center><h1>{status}</h1></center><hr><center>webkernel/{VERSION}</center>\
         <p>{detail}</p></body></html>"
    );
    format_response(status, "text/html", None, page.as_bytes())
}

/// A response assembled field by field and serialized with [`format_response`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status text, e.g. `"404 Not Found"`
    pub status: String,
    /// Content type without the charset suffix
    pub content_type: String,
    /// Optional `Set-Cookie` value
    pub cookie: Option<String>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing responses in a fluent style.
///
/// # Example
///
/// ```
/// # use webkernel::http::response::ResponseBuilder;
/// let response = ResponseBuilder::new(201)
///     .content_type("application/json")
///     .cookie("sid=5")
///     .body(b"{}".to_vec())
///     .build();
/// assert_eq!(response.status, "201 Created");
/// ```
pub struct ResponseBuilder {
    status: String,
    content_type: String,
    cookie: Option<String>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a builder for `code`, defaulting to an empty `text/html` body.
    pub fn new(code: u16) -> Self {
        Self {
            status: status_text(code).to_string(),
            content_type: "text/html".to_string(),
            cookie: None,
            body: Vec::new(),
        }
    }

    /// Overrides the status text, for codes outside the status table.
    pub fn status_text(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = Some(cookie.into());
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            content_type: self.content_type,
            cookie: self.cookie,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a 200 OK `text/html` response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(200).body(body).build()
    }

    /// Serializes the response into wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        format_response(
            &self.status,
            &self.content_type,
            self.cookie.as_deref(),
            &self.body,
        )
    }
}

impl From<Response> for Vec<u8> {
    fn from(response: Response) -> Self {
        response.to_bytes()
    }
}

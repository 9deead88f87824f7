/// What a handler wants written back for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A fully framed HTTP response, written to the socket as is
    Inline(Vec<u8>),
    /// Serve this path (relative to the static root) instead
    StaticFile(String),
}

impl Reply {
    /// Interprets a byte-string handler result.
    ///
    /// A leading space marks the rest as a static file path; anything else
    /// is an inline response.
    ///
    /// # Example
    ///
    /// ```
    /// # use webkernel::http::handler::Reply;
    /// assert_eq!(
    ///     Reply::from_bytes(b" /files/report.pdf".to_vec()),
    ///     Reply::StaticFile("/files/report.pdf".to_string())
    /// );
    /// ```
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match bytes.split_first() {
            Some((b' ', rest)) => Reply::StaticFile(String::from_utf8_lossy(rest).into_owned()),
            _ => Reply::Inline(bytes),
        }
    }
}

impl From<Vec<u8>> for Reply {
    fn from(bytes: Vec<u8>) -> Self {
        Reply::Inline(bytes)
    }
}

/// Produces a reply from the header text, the path and the raw bytes of the
/// query string (GET) or payload (POST).
pub trait Handler: Send + Sync {
    fn call(&self, header: &str, path: &str, data: &[u8]) -> Reply;
}

impl<F> Handler for F
where
    F: Fn(&str, &str, &[u8]) -> Reply + Send + Sync,
{
    fn call(&self, header: &str, path: &str, data: &[u8]) -> Reply {
        self(header, path, data)
    }
}

//! HTTP status lines.

/// Status line used for codes outside the known table.
pub const FALLBACK_STATUS: &str = "200 OK";

/// Returns the status text (`"<code> <reason>"`) written after `HTTP/1.1`.
///
/// Unknown codes fall back to `"200 OK"`.
pub fn status_text(code: u16) -> &'static str {
    lookup(code).unwrap_or(FALLBACK_STATUS)
}

/// Returns the standard reason phrase for a known status code.
///
/// # Example
///
/// ```
/// # use webkernel::http::status::reason_phrase;
/// assert_eq!(reason_phrase(404), Some("Not Found"));
/// assert_eq!(reason_phrase(299), None);
/// ```
pub fn reason_phrase(code: u16) -> Option<&'static str> {
    lookup(code).map(|line| &line[4..])
}

fn lookup(code: u16) -> Option<&'static str> {
    let line = match code {
        100 => "100 Continue",
        101 => "101 Switching Protocols",
        200 => "200 OK",
        201 => "201 Created",
        202 => "202 Accepted",
        203 => "203 Non-authoritative Information",
        204 => "204 No Content",
        205 => "205 Reset Content",
        206 => "206 Partial Content",
        300 => "300 Multiple Choices",
        301 => "301 Moved Permanently",
        302 => "302 Found",
        303 => "303 See Other",
        304 => "304 Not Modified",
        305 => "305 Use Proxy",
        306 => "306 Unused",
        307 => "307 Temporary Redirect",
        400 => "400 Bad Request",
        401 => "401 Unauthorized",
        402 => "402 Payment Required",
        403 => "403 Forbidden",
        404 => "404 Not Found",
        405 => "405 Method Not Allowed",
        406 => "406 Not Acceptable",
        407 => "407 Proxy Authentication Required",
        408 => "408 Request Timeout",
        409 => "409 Conflict",
        410 => "410 Gone",
        411 => "411 Length Required",
        412 => "412 Precondition Failed",
        413 => "413 Request Entity Too Large",
        414 => "414 Request-url Too Long",
        415 => "415 Unsupported Media Type",
        416 => "416 Requested Range Not Satisfiable",
        417 => "417 Expectation Failed",
        500 => "500 Internal Server Error",
        501 => "501 Not Implemented",
        502 => "502 Bad Gateway",
        503 => "503 Service Unavailable",
        504 => "504 Gateway Timeout",
        505 => "505 HTTP Version Not Supported",
        _ => return None,
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_text_agrees_with_reason_phrase() {
        for code in 100..600 {
            if let Some(reason) = reason_phrase(code) {
                assert_eq!(status_text(code), format!("{} {}", code, reason));
            } else {
                assert_eq!(status_text(code), FALLBACK_STATUS);
            }
        }
    }
}

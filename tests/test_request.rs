use webkernel::http::request::{Method, Request, header_value};

#[test]
fn test_header_value_found() {
    let header = "Cookie: sid=5\r\nHost: x\r\n";

    assert_eq!(header_value(header, "Cookie:"), "sid=5");
    assert_eq!(header_value(header, "Host:"), "x");
}

#[test]
fn test_header_value_missing() {
    let header = "Cookie: sid=5\r\nHost: x\r\n";

    assert_eq!(header_value(header, "Missing:"), "");
}

#[test]
fn test_header_value_last_line_without_carriage_return() {
    let header = "HTTP/1.1\r\nHost: example.com";

    assert_eq!(header_value(header, "Host:"), "example.com");
}

#[test]
fn test_header_value_empty_value_stays_on_its_line() {
    let header = "X-Empty:\r\nHost: x";

    assert_eq!(header_value(header, "X-Empty:"), "");
}

#[test]
fn test_header_value_returns_first_occurrence() {
    let header = "Accept: a\r\nAccept: b\r\n";

    assert_eq!(header_value(header, "Accept:"), "a");
}

#[test]
fn test_method_from_prefix() {
    assert_eq!(Method::from_prefix(b"GET /"), Some(Method::GET));
    assert_eq!(Method::from_prefix(b"POST /"), Some(Method::POST));
    assert_eq!(Method::from_prefix(b"PATCH /"), None);
    assert_eq!(Method::from_prefix(b""), None);
}

#[test]
fn test_method_display() {
    assert_eq!(Method::GET.to_string(), "GET");
    assert_eq!(Method::POST.to_string(), "POST");
}

#[test]
fn test_request_data_for_post_is_payload() {
    let request = Request {
        method: Method::POST,
        path: "/submit".to_string(),
        query: None,
        header: "Host: x".to_string(),
        payload: b"a=1&b=2".to_vec(),
    };

    assert_eq!(request.data(), b"a=1&b=2");
    assert_eq!(request.header_value("Host:"), "x");
}

use wicket::http::request::{Method, Protocol};

#[test]
fn test_protocol_from_text() {
    assert_eq!(Protocol::from_text("HTTP/1.0"), Some(Protocol::Http10));
    assert_eq!(Protocol::from_text("HTTP/1.1"), Some(Protocol::Http11));
    assert_eq!(Protocol::from_text("HTTP/2"), Some(Protocol::Http2));
}

#[test]
fn test_protocol_from_text_rejects_unknown() {
    assert_eq!(Protocol::from_text("HTTP/1.2"), None);
    assert_eq!(Protocol::from_text("http/1.1"), None); // case-sensitive
    assert_eq!(Protocol::from_text("HTTP/1.1 "), None); // trailing space
    assert_eq!(Protocol::from_text(""), None);
}

#[test]
fn test_protocol_round_trips_through_text() {
    for text in ["HTTP/1.0", "HTTP/1.1", "HTTP/2"] {
        let protocol = Protocol::from_text(text).unwrap();
        assert_eq!(protocol.to_string(), text);
        assert_eq!(protocol.as_str(), text);
    }
}

#[test]
fn test_method_from_text() {
    assert_eq!(Method::from_text("GET"), Some(Method::GET));
    assert_eq!(Method::from_text("POST"), Some(Method::POST));
    assert_eq!(Method::from_text("PUT"), Some(Method::PUT));
    assert_eq!(Method::from_text("DELETE"), Some(Method::DELETE));
    assert_eq!(Method::from_text("HEAD"), Some(Method::HEAD));
}

#[test]
fn test_method_from_text_rejects_unknown() {
    assert_eq!(Method::from_text("get"), None); // case-sensitive
    assert_eq!(Method::from_text("PATCH"), None);
    assert_eq!(Method::from_text("OPTIONS"), None);
    assert_eq!(Method::from_text("GET "), None);
    assert_eq!(Method::from_text(""), None);
}

#[test]
fn test_method_equality() {
    assert_eq!(Method::GET, Method::GET);
    assert_ne!(Method::GET, Method::POST);
}

use std::collections::HashMap;
use std::fmt;

/// HTTP protocol versions recognized on the request line.
///
/// Parsing is exact-match over the wire literals; anything else,
/// including case variants, is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http10,
    Http11,
    Http2,
}

impl Protocol {
    /// Parses a protocol version from its exact wire form.
    ///
    /// Returns `None` for any unrecognized token.
    pub fn from_text(s: &str) -> Option<Self> {
        match s {
            "HTTP/1.0" => Some(Protocol::Http10),
            "HTTP/1.1" => Some(Protocol::Http11),
            "HTTP/2" => Some(Protocol::Http2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http10 => "HTTP/1.0",
            Protocol::Http11 => "HTTP/1.1",
            Protocol::Http2 => "HTTP/2",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP request methods.
///
/// Only GET reaches the static file fallback; the others are parsed so
/// custom handlers can be registered for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
}

impl Method {
    /// Parses an HTTP method from its exact wire form (uppercase).
    ///
    /// Returns `None` for any unrecognized token.
    pub fn from_text(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            _ => None,
        }
    }
}

/// One parsed inbound request.
///
/// `target` is the literal path token from the request line, before any
/// route aliasing. Headers and body are not parsed by this server and
/// stay empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub protocol: Protocol,
    pub target: String,
    pub method: Method,
    pub headers: HashMap<String, String>,
    pub body: String,
}

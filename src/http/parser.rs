use crate::http::request::{Method, Protocol, Request};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    InvalidEncoding,
    MalformedRequestLine,
    InvalidMethod,
    InvalidProtocol,
}

/// Parses one request from the raw bytes of a connection read.
///
/// Only the first CRLF-separated line is interpreted. It must split on
/// single spaces into exactly three tokens: method, target, protocol.
/// The target is taken verbatim, with no percent-decoding, no path
/// canonicalization and no query-string separation.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let text = std::str::from_utf8(buf).map_err(|_| ParseError::InvalidEncoding)?;

    let request_line = text.split("\r\n").next().unwrap_or_default();

    let mut tokens = request_line.split(' ');
    let (method_str, target, protocol_str) =
        match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(m), Some(t), Some(p), None) => (m, t, p),
            _ => return Err(ParseError::MalformedRequestLine),
        };

    let method = Method::from_text(method_str).ok_or(ParseError::InvalidMethod)?;
    let protocol = Protocol::from_text(protocol_str).ok_or(ParseError::InvalidProtocol)?;

    // Headers and body are deliberately left empty: this server only
    // acts on the request line.
    Ok(Request {
        protocol,
        target: target.to_string(),
        method,
        headers: HashMap::new(),
        body: String::new(),
    })
}

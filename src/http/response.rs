use crate::http::request::Protocol;

/// HTTP status codes supported by the server.
///
/// The dispatcher itself only produces `Ok`, `Forbidden`, `NotFound`
/// and `MethodNotAllowed`; the rest are vocabulary for custom handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 202 Accepted
    Accepted,
    /// 204 No Content
    NoContent,
    /// 301 Moved Permanently
    MovedPermanently,
    /// 302 Found
    Found,
    /// 303 See Other
    SeeOther,
    /// 304 Not Modified
    NotModified,
    /// 400 Bad Request
    BadRequest,
    /// 401 Unauthorized
    Unauthorized,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::Accepted => 202,
            StatusCode::NoContent => 204,
            StatusCode::MovedPermanently => 301,
            StatusCode::Found => 302,
            StatusCode::SeeOther => 303,
            StatusCode::NotModified => 304,
            StatusCode::BadRequest => 400,
            StatusCode::Unauthorized => 401,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::Accepted => "Accepted",
            StatusCode::NoContent => "No Content",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::Found => "Found",
            StatusCode::SeeOther => "See Other",
            StatusCode::NotModified => "Not Modified",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

/// One outbound response, ready for serialization.
///
/// Headers are kept as an ordered list so they serialize in insertion
/// order.
#[derive(Debug, Clone)]
pub struct Response {
    pub protocol: Protocol,
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a response with the given status, no headers and an
    /// empty body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            protocol: Protocol::Http11,
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Appends a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the response body.
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Serializes to wire bytes.
    ///
    /// Status line, each header as `Name: Value`, a blank line, then
    /// the raw body, every element joined by CRLF. No automatic
    /// Content-Length, no trailing CRLF after the body.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut parts: Vec<Vec<u8>> = Vec::with_capacity(self.headers.len() + 3);

        parts.push(
            format!(
                "{} {} {}",
                self.protocol,
                self.status.as_u16(),
                self.status.reason_phrase()
            )
            .into_bytes(),
        );

        for (name, value) in &self.headers {
            parts.push(format!("{name}: {value}").into_bytes());
        }

        parts.push(Vec::new());
        parts.push(self.body.clone());

        parts.join(&b"\r\n"[..])
    }
}

//! HTTP wire model.
//!
//! Only the request line is interpreted: the server reads one bounded
//! buffer per connection, parses `METHOD SP TARGET SP VERSION`, and
//! answers with a serialized [`response::Response`]. Inbound headers
//! and bodies are carried as empty defaults.
//!
//! - **`request`**: typed `Protocol`/`Method` enums and the `Request` model
//! - **`response`**: the `Response` model and its CRLF wire serialization
//! - **`parser`**: request-line parsing from raw bytes
//! - **`mime`**: extension to Content-Type mapping
//! - **`writer`**: writes a serialized response to the client
//! - **`connection`**: the one-request-per-connection handler

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

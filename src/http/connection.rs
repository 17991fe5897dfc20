use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::{info, warn};

use crate::http::parser::parse_request;
use crate::http::writer::write_response;
use crate::server::router::Router;
use crate::server::store::FileStore;

/// Capacity of the single request read. The server never loops to read
/// more: a request whose line exceeds this is truncated and fails to
/// parse. Known boundary condition.
const READ_LIMIT: usize = 1024;

pub struct Connection {
    stream: TcpStream,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Self {
        Self { stream }
    }

    /// Serves exactly one request: read, parse, dispatch, write, close.
    ///
    /// A malformed request closes the connection without a response.
    pub async fn serve(&mut self, router: &Router, store: &FileStore) -> anyhow::Result<()> {
        let mut buffer = BytesMut::with_capacity(READ_LIMIT);
        let n = self.stream.read_buf(&mut buffer).await?;

        if n == 0 {
            // Peer closed before sending anything
            return Ok(());
        }

        let request = match parse_request(&buffer) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = ?e, "Malformed request, closing connection");
                return Ok(());
            }
        };

        info!(method = ?request.method, target = %request.target, "Request");

        let response = router.dispatch(&request, store).await?;

        write_response(&mut self.stream, &response).await?;

        Ok(())
    }
}

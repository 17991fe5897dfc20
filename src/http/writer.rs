use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

/// Serializes the response and writes it to the client in full.
pub async fn write_response(stream: &mut TcpStream, response: &Response) -> anyhow::Result<()> {
    stream.write_all(&response.to_bytes()).await?;
    stream.flush().await?;
    Ok(())
}

use std::net::SocketAddr;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::server::router::Router;
use crate::server::store::FileStore;

pub async fn run(cfg: &Config, router: Router, store: FileStore) -> anyhow::Result<()> {
    let listener = bind(&cfg.listen_addr(), cfg.server.backlog)?;
    info!("Listening on {}", cfg.listen_addr());

    serve(listener, router, store).await
}

/// Accepts and serves connections strictly one at a time: the next
/// accept waits until the current request is fully answered.
pub async fn serve(listener: TcpListener, router: Router, store: FileStore) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket);
        if let Err(e) = conn.serve(&router, &store).await {
            error!("Connection error from {}: {}", peer, e);
        }
    }
}

/// Binds a listening socket with an explicit backlog, which the plain
/// tokio API does not expose.
pub fn bind(addr: &str, backlog: u32) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = addr.parse()?;

    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.listen(backlog as i32)?;
    socket.set_nonblocking(true)?;

    Ok(TcpListener::from_std(socket.into())?)
}

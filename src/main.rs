use wicket::config::Config;
use wicket::server::listener;
use wicket::server::router::Router;
use wicket::server::store::FileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();
    let router = Router::from_config(&cfg);
    let store = FileStore::new(&cfg.server.root);

    tokio::select! {
        res = listener::run(&cfg, router, store) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}

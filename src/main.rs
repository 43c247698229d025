use sprig::error::ServerError;
use sprig::registry::Registry;
use sprig::{config::Config, server, services};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sprig=info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let registry = Registry::from_routes(services::routes())?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(
        %addr,
        routes = registry.len(),
        static_dir = %config.static_dir.display(),
        "sprig server running"
    );

    server::serve(listener, registry, config.static_dir).await?;

    info!("server shutdown complete");
    Ok(())
}

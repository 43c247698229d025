//! Connection acceptance and the per-connection request lifecycle.
//!
//! Exactly one request is served per accepted connection: a single bounded
//! read, parse, dispatch, one response, close. There is no keep-alive.

use crate::dispatch;
use crate::registry::Registry;
use crate::request::{self, MAX_REQUEST_BYTES};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// A connection that cannot finish its one request inside this window is
/// dropped without a response.
const CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Accept loop: one spawned task per connection. The registry is read-only
/// from here on and shared without locking. Returns on an accept-level
/// failure, which is fatal, or once the shutdown signal fires.
pub async fn serve(
    listener: TcpListener,
    registry: Registry,
    static_root: PathBuf,
) -> std::io::Result<()> {
    let registry = Arc::new(registry);
    let static_root = Arc::new(static_root);

    loop {
        tokio::select! {
            accepted = listener.accept() => {
                let (stream, peer) = accepted?;
                let _ = stream.set_nodelay(true);
                debug!(%peer, "connection accepted");
                let registry = Arc::clone(&registry);
                let static_root = Arc::clone(&static_root);
                tokio::spawn(async move {
                    handle_connection(stream, &registry, &static_root).await;
                });
            }
            _ = shutdown_signal() => {
                info!("shutdown signal received, stopping server");
                break;
            }
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Drive one connection under the deadline. A stalled peer never completed a
/// readable request line, so it is dropped without a response; everything
/// else is answered before the socket closes.
async fn handle_connection(stream: TcpStream, registry: &Registry, static_root: &Path) {
    let peer = stream.peer_addr().ok();
    match timeout(
        Duration::from_secs(CONNECTION_TIMEOUT_SECS),
        handle_request(stream, registry, static_root),
    )
    .await
    {
        Ok(Ok(())) => {}
        Ok(Err(err)) => warn!(?peer, %err, "connection ended with an error"),
        Err(_) => warn!(?peer, "connection timed out"),
    }
}

async fn handle_request(
    mut stream: TcpStream,
    registry: &Registry,
    static_root: &Path,
) -> std::io::Result<()> {
    let mut buf = [0u8; MAX_REQUEST_BYTES];
    let n = stream.read(&mut buf).await?;

    let parsed = request::parse_request(&buf[..n]);
    debug!(
        method = %parsed.method,
        path = %parsed.path,
        params = parsed.query_params.len(),
        "request"
    );

    let response = dispatch::dispatch(&parsed, registry, static_root).await;
    stream.write_all(&response.into_bytes()).await?;
    stream.flush().await?;
    stream.shutdown().await?;
    Ok(())
}

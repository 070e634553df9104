//! Listener setup and graceful shutdown.

use crate::{
    api::{AppState, router},
    errors::Result,
};
use std::net::SocketAddr;
use tokio::{net::TcpListener, signal};
use tracing::{error, info, instrument};

/// Binds `0.0.0.0:port` and serves the application until Ctrl+C or SIGTERM.
///
/// # Errors
/// Returns an I/O error if the port cannot be bound or the server fails.
#[instrument(skip(state))]
pub async fn run_server(state: AppState, port: u16) -> Result<()> {
    let app = router(state);

    let address = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(address).await?;
    info!("Starting backend on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

//! Offers HTTP server host utilities.

use std::net::SocketAddr;

use anyhow::{Result, anyhow};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::DEFAULT_BIND_ADDRESS;
use crate::routes::router;
use crate::state::AppState;

/// Host configuration for an offers introspection server instance.
#[derive(Clone)]
pub struct OffersHttpServer {
    bind_address: SocketAddr,
    state: AppState,
}

impl OffersHttpServer {
    /// Creates a server bound to the provided address, serving `state`.
    pub fn new(bind_address: SocketAddr, state: AppState) -> Self {
        Self {
            bind_address,
            state,
        }
    }

    /// Starts the server and returns a handle for inspection and shutdown.
    pub async fn start(self) -> Result<RunningOffersHttpServer> {
        let cancellation_token = CancellationToken::new();
        let router = router(self.state);
        let listener = tokio::net::TcpListener::bind(self.bind_address).await?;
        let bound_address = listener.local_addr()?;

        let server_handle = tokio::spawn({
            let shutdown = cancellation_token.child_token();
            async move {
                let _ = axum::serve(listener, router)
                    .with_graceful_shutdown(async move {
                        shutdown.cancelled().await;
                    })
                    .await;
            }
        });

        info!(address = %bound_address, "offers endpoint listening");
        Ok(RunningOffersHttpServer {
            bind_address: bound_address,
            cancellation_token,
            server_handle,
        })
    }
}

/// Runtime handle for a running offers server.
#[derive(Debug)]
pub struct RunningOffersHttpServer {
    bind_address: SocketAddr,
    cancellation_token: CancellationToken,
    server_handle: JoinHandle<()>,
}

impl RunningOffersHttpServer {
    /// Returns the bound socket address for the running server.
    pub fn bound_address(&self) -> SocketAddr {
        self.bind_address
    }

    /// Stops the server and waits for the serve task to finish.
    pub async fn stop(self) -> Result<()> {
        self.cancellation_token.cancel();
        self.server_handle
            .await
            .map_err(|error| anyhow!("offers server task failed: {error}"))?;
        Ok(())
    }
}

/// Resolves the bind address from an optional override.
pub fn resolve_bind_address(bind_address: Option<&str>) -> Result<SocketAddr> {
    let address = bind_address.unwrap_or(DEFAULT_BIND_ADDRESS);
    address
        .parse()
        .map_err(|error| anyhow!("invalid bind address '{address}': {error}"))
}

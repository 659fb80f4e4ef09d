//! Main Quire Server implementation
//!
//! This module contains the QuireServer implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use quire_core::WorkflowConfigResolver;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};

/// Main server implementation
pub struct QuireServer {
    /// Configuration
    pub config: ServerConfig,

    /// Resolver shared by all handlers
    resolver: Arc<WorkflowConfigResolver>,
}

/// Manual Debug implementation that doesn't try to debug the resolver's catalog
impl std::fmt::Debug for QuireServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuireServer")
            .field("config", &self.config)
            .field(
                "default_workflow",
                &self.resolver.configuration().default_workflow(),
            )
            .finish()
    }
}

impl QuireServer {
    /// Create a new QuireServer
    pub fn new(config: ServerConfig, resolver: Arc<WorkflowConfigResolver>) -> Self {
        Self { config, resolver }
    }

    /// The resolver answering workflow queries
    pub fn resolver(&self) -> &WorkflowConfigResolver {
        &self.resolver
    }

    /// Run the server until interrupted
    pub async fn run(self) -> ServerResult<()> {
        info!("Starting Quire Server");

        let addr: SocketAddr = format!("{}:{}", self.config.bind_address, self.config.port)
            .parse()
            .map_err(|err| {
                ServerError::ConfigError(format!(
                    "Invalid bind address {}:{}: {}",
                    self.config.bind_address, self.config.port, err
                ))
            })?;

        let listener = TcpListener::bind(addr).await?;
        let app = crate::api::build_router(Arc::new(self));

        info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Quire Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            warn!(?err, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}

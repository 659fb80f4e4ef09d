//!
//! Quire Server - Read-only HTTP API over the workflow configuration
//!
//! This module exports all the components of the Quire Server.

#![forbid(unsafe_code)]

use std::sync::Arc;

use quire_config::{load_configuration_file, LoadOptions};
use quire_core::WorkflowConfigResolver;
use tracing::info;

/// API module
pub mod api;

/// Configuration module
pub mod config;

/// Request context module
pub mod context;

/// Error module
pub mod error;

/// Pagination module
pub mod paging;

/// Server module
pub mod server;

// Re-export key types
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::QuireServer;

/// Run function
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    // Initialize logging
    init_logging(&config);

    let resolver = load_resolver(&config).await?;
    let server = QuireServer::new(config, Arc::new(resolver));

    server.run().await
}

/// Load the workflow configuration named by the server config and build the resolver
pub async fn load_resolver(config: &ServerConfig) -> ServerResult<WorkflowConfigResolver> {
    let options = LoadOptions {
        strict: config.strict_config,
    };
    let loaded = load_configuration_file(&config.workflow_config_path, &options).await?;

    if !loaded.warnings.is_empty() {
        info!(
            warnings = loaded.warnings.len(),
            "Workflow configuration loaded with integrity warnings"
        );
    }

    Ok(WorkflowConfigResolver::new(
        Arc::new(loaded.configuration),
        Arc::new(loaded.catalog),
    ))
}

/// Initialize logging
pub fn init_logging(config: &ServerConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    // Create filter based on config
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // Initialize subscriber; a second call (e.g. from tests) is ignored
    let result = if config.json_logs {
        fmt().with_env_filter(filter).with_target(true).json().try_init()
    } else {
        fmt().with_env_filter(filter).with_target(true).try_init()
    };

    if result.is_err() {
        tracing::debug!("Logging already initialized");
    }
}

//! Configuration for the Quire Server
//!
//! Settings come from an optional `quire.toml` (or the file named by
//! `QUIRE_CONFIG_FILE`) overlaid with `QUIRE_*` environment variables.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::info;

use crate::error::ServerResult;

/// Settings file read when `QUIRE_CONFIG_FILE` is not set
pub const DEFAULT_SETTINGS_FILE: &str = "quire";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host to bind to
    #[serde(default = "default_host")]
    pub bind_address: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON
    #[serde(default)]
    pub json_logs: bool,

    /// Path of the YAML workflow configuration document
    #[serde(default = "default_workflow_config_path")]
    pub workflow_config_path: String,

    /// Refuse to start when the workflow configuration has dangling references
    #[serde(default)]
    pub strict_config: bool,
}

fn default_port() -> u16 {
    8080
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_workflow_config_path() -> String {
    "config/workflows.yaml".to_string()
}

impl ServerConfig {
    /// Load configuration from environment variables and optional config file
    pub fn load() -> ServerResult<Self> {
        match env::var("QUIRE_CONFIG_FILE") {
            Ok(path) => Self::load_from(Some(Path::new(&path))),
            Err(_) => Self::load_from(None),
        }
    }

    /// Load configuration from the given settings file (or the default one)
    /// overlaid with `QUIRE_*` environment variables
    pub fn load_from(path: Option<&Path>) -> ServerResult<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        let config: ServerConfig = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix("QUIRE").try_parsing(true))
            .build()?
            .try_deserialize()?;

        info!(
            bind_address = %config.bind_address,
            port = config.port,
            workflow_config_path = %config.workflow_config_path,
            strict_config = config.strict_config,
            "Loaded server configuration"
        );
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_host(),
            log_level: default_log_level(),
            json_logs: false,
            workflow_config_path: default_workflow_config_path(),
            strict_config: false,
        }
    }
}

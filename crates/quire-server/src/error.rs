//! Error types for the Quire Server
//!
//! This module contains the error types used throughout the server.

use quire_core::CoreError;
use thiserror::Error;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    /// Resource not found
    #[error("{message}")]
    NotFound {
        /// Kind of resource (workflow, collection, step, action)
        resource: String,
        /// Message returned to the client
        message: String,
    },

    /// Validation error in request parameters
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Server settings could not be loaded
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The workflow configuration document could not be loaded
    #[error("Workflow configuration error: {0}")]
    WorkflowConfigError(#[from] quire_config::ConfigError),

    /// Collection catalog failure
    #[error("Collection catalog error: {0}")]
    CatalogError(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// Not found error for a resource
    pub fn not_found(resource: impl Into<String>, message: impl Into<String>) -> Self {
        ServerError::NotFound {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Check if the error is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServerError::NotFound { .. })
    }
}

// Implement conversions from other error types
impl From<CoreError> for ServerError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownWorkflow(name) | CoreError::UnresolvableDefinition { name, .. } => {
                ServerError::not_found(
                    "workflow",
                    format!("No workflow with name {} is configured", name),
                )
            }
            CoreError::CollectionNotFound(id) => {
                ServerError::not_found("collection", format!("No collection with id {} exists", id))
            }
            CoreError::StepNotFound(id) => ServerError::not_found(
                "step",
                format!("No workflow step with id {} is configured", id),
            ),
            CoreError::ActionNotFound(id) => ServerError::not_found(
                "action",
                format!("No workflow action with id {} is configured", id),
            ),
            CoreError::CatalogError(msg) => ServerError::CatalogError(msg),
        }
    }
}

impl From<config::ConfigError> for ServerError {
    fn from(err: config::ConfigError) -> Self {
        ServerError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::InternalError(format!("IO error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_and_unresolvable_share_message() {
        let unknown: ServerError = CoreError::UnknownWorkflow("nonexistent".to_string()).into();
        let unresolvable: ServerError = CoreError::UnresolvableDefinition {
            name: "mappedOnly".to_string(),
            reason: "no workflow definition is declared".to_string(),
        }
        .into();

        assert_eq!(unknown.to_string(), "No workflow with name nonexistent is configured");
        assert_eq!(unresolvable.to_string(), "No workflow with name mappedOnly is configured");
        assert!(unknown.is_not_found() && unresolvable.is_not_found());
    }

    #[test]
    fn test_catalog_error_is_not_a_not_found() {
        let err: ServerError = CoreError::CatalogError("timeout".to_string()).into();
        assert!(!err.is_not_found());
        assert!(matches!(err, ServerError::CatalogError(msg) if msg == "timeout"));
    }
}

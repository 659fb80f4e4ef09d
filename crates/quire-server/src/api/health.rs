//! Health check endpoint for the Quire Server
//!
//! This module contains the health check handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::server::QuireServer;

/// Health check handler
///
/// Reports the service version and what the loaded configuration contains.
pub async fn health_check(State(server): State<Arc<QuireServer>>) -> impl IntoResponse {
    debug!("Health check requested");

    let configuration = server.resolver().configuration();

    let response = json!({
        "status": "UP",
        "version": env!("CARGO_PKG_VERSION"),
        "configuration": {
            "defaultWorkflow": configuration.default_workflow(),
            "workflows": configuration.workflows().count(),
            "collectionMappings": configuration.mappings().count(),
        },
    });

    (StatusCode::OK, Json(response))
}

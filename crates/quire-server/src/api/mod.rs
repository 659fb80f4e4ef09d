//! API module for the Quire Server
//!
//! This module contains the API routes and handlers for the Quire Server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

pub mod errors;
pub mod extract;
pub mod health;
pub mod resources;
pub mod workflow_definitions;
pub mod workflow_steps;

use crate::error::{ServerError, ServerResult};
use crate::server::QuireServer;

/// Build the router for API endpoints
pub fn build_router(server: Arc<QuireServer>) -> Router {
    Router::new()
        // Workflow definitions
        .route(
            "/api/config/workflowdefinitions",
            get(workflow_definitions::list_workflow_definitions_handler),
        )
        .route(
            "/api/config/workflowdefinitions/search/findByCollection",
            get(workflow_definitions::find_by_collection_handler),
        )
        .route(
            "/api/config/workflowdefinitions/:name",
            get(workflow_definitions::get_workflow_definition_handler),
        )
        .route(
            "/api/config/workflowdefinitions/:name/collections",
            get(workflow_definitions::list_workflow_collections_handler),
        )
        .route(
            "/api/config/workflowdefinitions/:name/steps",
            get(workflow_definitions::list_workflow_steps_handler),
        )
        // Steps and actions
        .route(
            "/api/config/workflowsteps/:step_id",
            get(workflow_steps::get_workflow_step_handler),
        )
        .route(
            "/api/config/workflowactions/:action_id",
            get(workflow_steps::get_workflow_action_handler),
        )
        // Health check
        .route("/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
        // Shared state
        .with_state(server)
}

/// Turn a handler result into a JSON response
pub(crate) fn respond(result: ServerResult<serde_json::Value>, operation: &str) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => {
            if err.is_not_found() {
                debug!(%err, operation, "Resource not found");
            } else {
                error!(?err, operation, "Request failed");
            }
            errors::api_error_response(&err)
        }
    }
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> ServerResult<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|err| ServerError::InternalError(format!("JSON error: {}", err)))
}

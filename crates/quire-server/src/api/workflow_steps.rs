//! Workflow step and action endpoints

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::resources::{ActionResource, StepResource};
use crate::api::{respond, to_json};
use crate::error::{ServerError, ServerResult};
use crate::server::QuireServer;

/// Handler for getting a workflow step, with its actions embedded
pub async fn get_workflow_step_handler(
    State(server): State<Arc<QuireServer>>,
    Path(step_id): Path<String>,
) -> impl IntoResponse {
    info!(%step_id, "Getting workflow step");
    respond(step_with_actions(&server, &step_id), "get workflow step")
}

/// Handler for getting a workflow action
pub async fn get_workflow_action_handler(
    State(server): State<Arc<QuireServer>>,
    Path(action_id): Path<String>,
) -> impl IntoResponse {
    info!(%action_id, "Getting workflow action");

    let result = server
        .resolver()
        .find_action(&action_id)
        .map_err(ServerError::from)
        .and_then(|action| to_json(&ActionResource::from(action)));
    respond(result, "get workflow action")
}

fn step_with_actions(server: &QuireServer, step_id: &str) -> ServerResult<serde_json::Value> {
    let resolver = server.resolver();
    let step = resolver.find_step(step_id)?;

    let actions = step
        .actions
        .iter()
        .map(|action_id| resolver.find_action(action_id).map(ActionResource::from))
        .collect::<Result<Vec<_>, _>>()?;

    let mut body = to_json(&StepResource::from(step))?;
    body["_embedded"] = json!({ "workflowactions": actions });
    Ok(body)
}

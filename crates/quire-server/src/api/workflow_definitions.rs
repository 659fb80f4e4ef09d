//! Workflow definition endpoints
//!
//! Read-only views over the configured workflows: the definitions
//! themselves, the collections each one applies to, and their steps.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::api::extract::ApiQuery;
use crate::api::resources::{CollectionResource, StepResource, WorkflowDefinitionResource};
use crate::api::{respond, to_json};
use crate::context::RequestContext;
use crate::error::ServerError;
use crate::paging::{paginate, PageRequest};
use crate::server::QuireServer;

/// Query parameters for the find-by-collection search
#[derive(Debug, Serialize, Deserialize)]
pub struct FindByCollectionQuery {
    /// Collection id
    pub uuid: Uuid,
}

/// Handler for listing workflow definitions
pub async fn list_workflow_definitions_handler(
    State(server): State<Arc<QuireServer>>,
    ApiQuery(paging): ApiQuery<PageRequest>,
) -> impl IntoResponse {
    info!(?paging, "Listing workflow definitions");

    let definitions: Vec<WorkflowDefinitionResource> = server
        .resolver()
        .list_workflows()
        .into_iter()
        .map(Into::into)
        .collect();

    let result = paginate(definitions, paging).and_then(|page| page.to_body("workflowdefinitions"));
    respond(result, "list workflow definitions")
}

/// Handler for getting a workflow definition by name
pub async fn get_workflow_definition_handler(
    State(server): State<Arc<QuireServer>>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    info!(workflow = %name, "Getting workflow definition");

    let result = server
        .resolver()
        .find_workflow(&name)
        .map_err(ServerError::from)
        .and_then(|summary| to_json(&WorkflowDefinitionResource::from(summary)));
    respond(result, "get workflow definition")
}

/// Handler for finding the workflow that applies to a collection
pub async fn find_by_collection_handler(
    State(server): State<Arc<QuireServer>>,
    RequestContext(ctx): RequestContext,
    ApiQuery(query): ApiQuery<FindByCollectionQuery>,
) -> impl IntoResponse {
    info!(collection = %query.uuid, correlation_id = %ctx.correlation_id, "Finding workflow for collection");

    let result = server
        .resolver()
        .workflow_for_collection(&ctx, &query.uuid)
        .await
        .map_err(ServerError::from)
        .and_then(|summary| to_json(&WorkflowDefinitionResource::from(summary)));
    respond(result, "find workflow by collection")
}

/// Handler for listing the collections a workflow applies to
pub async fn list_workflow_collections_handler(
    State(server): State<Arc<QuireServer>>,
    RequestContext(ctx): RequestContext,
    Path(name): Path<String>,
    ApiQuery(paging): ApiQuery<PageRequest>,
) -> impl IntoResponse {
    info!(workflow = %name, correlation_id = %ctx.correlation_id, ?paging, "Listing workflow collections");

    let result = server
        .resolver()
        .list_collections_for_workflow(&ctx, &name)
        .await
        .map_err(ServerError::from)
        .and_then(|collections| {
            let collections: Vec<CollectionResource> =
                collections.into_iter().map(Into::into).collect();
            paginate(collections, paging)
        })
        .and_then(|page| page.to_body("collections"));
    respond(result, "list workflow collections")
}

/// Handler for listing the steps of a workflow
pub async fn list_workflow_steps_handler(
    State(server): State<Arc<QuireServer>>,
    Path(name): Path<String>,
    ApiQuery(paging): ApiQuery<PageRequest>,
) -> impl IntoResponse {
    info!(workflow = %name, ?paging, "Listing workflow steps");

    let result = server
        .resolver()
        .list_steps_for_workflow(&name)
        .map_err(ServerError::from)
        .and_then(|steps| {
            let steps: Vec<StepResource> = steps.into_iter().map(Into::into).collect();
            paginate(steps, paging)
        })
        .and_then(|page| page.to_body("steps"));
    respond(result, "list workflow steps")
}

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use quire_config::{load_configuration, LoadOptions};
use quire_core::{CollectionCatalog, WorkflowConfigResolver, WorkflowConfiguration};
use quire_server::{QuireServer, ServerConfig};
use serde_json::Value;
use tower::ServiceExt;

/// Collection A is mapped to reviewflow; B and C fall back to the default
pub const REPOSITORY_CONFIG: &str = r#"
config_version: "1.0"
default_workflow: defaultWorkflow
workflows:
  - name: defaultWorkflow
    steps: [reviewstep, editstep, finaleditstep]
  - name: reviewflow
    steps: [reviewstep]
steps:
  - id: reviewstep
    role: Reviewer
    actions: [claimaction, reviewaction]
  - id: editstep
    role: Editor
    actions: [claimaction, editaction]
  - id: finaleditstep
    role: Final Editor
    actions: [claimaction, finaleditaction]
    config:
      notifyOnComplete: true
actions:
  - id: claimaction
    options: [claim]
  - id: reviewaction
    options: [approve, reject]
  - id: editaction
    options: [approve, reject, edit_metadata]
  - id: finaleditaction
    options: [approve, edit_metadata]
collections:
  - id: 11111111-1111-4111-8111-111111111111
    handle: "123456789/1"
    name: Collection A
  - id: 22222222-2222-4222-8222-222222222222
    handle: "123456789/2"
    name: Collection B
  - id: 33333333-3333-4333-8333-333333333333
    handle: "123456789/3"
    name: Collection C
collection_mappings:
  "123456789/1": reviewflow
"#;

/// Build a router over a configuration document
pub fn router_for(yaml: &str) -> Router {
    let loaded = load_configuration(yaml, &LoadOptions::default()).expect("fixture should load");
    router_with(Arc::new(loaded.configuration), Arc::new(loaded.catalog))
}

/// Build a router over an explicit configuration and catalog
pub fn router_with(
    configuration: Arc<WorkflowConfiguration>,
    catalog: Arc<dyn CollectionCatalog>,
) -> Router {
    let resolver = WorkflowConfigResolver::new(configuration, catalog);
    let server = QuireServer::new(ServerConfig::default(), Arc::new(resolver));
    quire_server::api::build_router(Arc::new(server))
}

/// Send a GET request and return status plus parsed JSON body
pub async fn get_json(app: Router, path: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(path)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();

    let status = response.status();
    let body = body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

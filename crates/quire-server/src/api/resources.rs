//! JSON representations returned by the API

use quire_core::{ActionDefinition, Collection, StepDefinition, WorkflowSummary};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A workflow definition as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDefinitionResource {
    /// Workflow name, also its id
    pub name: String,
    /// Whether this is the default workflow
    pub is_default: bool,
    /// Number of steps
    pub step_count: usize,
    /// Resource type
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<WorkflowSummary> for WorkflowDefinitionResource {
    fn from(summary: WorkflowSummary) -> Self {
        Self {
            name: summary.name,
            is_default: summary.is_default,
            step_count: summary.step_count,
            kind: "workflowdefinition".to_string(),
        }
    }
}

/// A collection as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionResource {
    /// Collection id
    pub id: Uuid,
    /// Persistent handle
    pub handle: String,
    /// Display name
    pub name: String,
    /// Resource type
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Collection> for CollectionResource {
    fn from(collection: Collection) -> Self {
        Self {
            id: collection.id,
            handle: collection.handle,
            name: collection.name,
            kind: "collection".to_string(),
        }
    }
}

/// A workflow step as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResource {
    /// Step id
    pub id: String,
    /// Role responsible for the step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ids of the actions available in the step
    pub actions: Vec<String>,
    /// Opaque step configuration
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub config: serde_json::Value,
    /// Resource type
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<StepDefinition> for StepResource {
    fn from(step: StepDefinition) -> Self {
        Self {
            id: step.id,
            role: step.role,
            actions: step.actions,
            config: step.config,
            kind: "workflowstep".to_string(),
        }
    }
}

/// A workflow action as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResource {
    /// Action id
    pub id: String,
    /// Options offered to the user performing the action
    pub options: Vec<String>,
    /// Resource type
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<ActionDefinition> for ActionResource {
    fn from(action: ActionDefinition) -> Self {
        Self {
            id: action.id,
            options: action.options,
            kind: "workflowaction".to_string(),
        }
    }
}

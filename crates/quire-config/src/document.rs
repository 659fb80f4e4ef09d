use quire_core::{ActionDefinition, Collection, StepDefinition};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The complete workflow configuration document.
/// This is the top-level structure read from the YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// The document format version (e.g., "1.0")
    pub config_version: String,

    /// Name of the workflow applied to collections without an explicit mapping
    pub default_workflow: String,

    /// Declared workflows
    #[serde(default)]
    pub workflows: Vec<WorkflowEntry>,

    /// Step definitions, shared by all workflows
    #[serde(default)]
    pub steps: Vec<StepDefinition>,

    /// Action definitions, referenced from steps
    #[serde(default)]
    pub actions: Vec<ActionDefinition>,

    /// Known collections
    #[serde(default)]
    pub collections: Vec<Collection>,

    /// Collection handle -> workflow name
    #[serde(default)]
    pub collection_mappings: BTreeMap<String, String>,
}

/// A workflow entry: its name and the ids of its steps in order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowEntry {
    /// Unique name of the workflow
    pub name: String,

    /// Step ids, in execution order
    #[serde(default)]
    pub steps: Vec<String>,
}

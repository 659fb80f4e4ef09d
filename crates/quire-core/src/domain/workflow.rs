use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A workflow as declared in configuration: a name and the ordered ids of its steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowDeclaration {
    /// Name of the workflow (case-sensitive)
    pub name: String,

    /// Ids of the steps, in execution order
    pub steps: Vec<String>,
}

/// One stage of a workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Id of the step
    pub id: String,

    /// Group responsible for the step, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Ids of the actions available in this step, in order
    #[serde(default)]
    pub actions: Vec<String>,

    /// Step-specific configuration, not interpreted here
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub config: serde_json::Value,
}

impl StepDefinition {
    /// Create a step with no role, actions or configuration
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: None,
            actions: Vec::new(),
            config: serde_json::Value::Null,
        }
    }

    /// Set the responsible role
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Append an action reference
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.actions.push(action.into());
        self
    }
}

/// An operation offered inside a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDefinition {
    /// Id of the action
    pub id: String,

    /// Options the action presents, in order (e.g. "approve", "reject")
    #[serde(default)]
    pub options: Vec<String>,
}

/// Summary of a workflow as served to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSummary {
    /// Name of the workflow
    pub name: String,

    /// Whether this is the default workflow
    pub is_default: bool,

    /// Number of configured steps
    pub step_count: usize,
}

/// A workflow with all of its steps looked up
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedWorkflow {
    /// Name of the workflow
    pub name: String,

    /// Whether this is the default workflow
    pub is_default: bool,

    /// Steps in configured order
    pub steps: Vec<StepDefinition>,
}

impl ResolvedWorkflow {
    /// Summarize the resolved workflow
    pub fn summary(&self) -> WorkflowSummary {
        WorkflowSummary {
            name: self.name.clone(),
            is_default: self.is_default,
            step_count: self.steps.len(),
        }
    }
}

/// Immutable, process-wide workflow configuration.
///
/// Built once (normally by `quire-config`) and shared behind an `Arc`.
/// There is exactly one default workflow by construction.
#[derive(Debug, Clone)]
pub struct WorkflowConfiguration {
    default_workflow: String,
    workflows: BTreeMap<String, WorkflowDeclaration>,
    steps: HashMap<String, StepDefinition>,
    actions: HashMap<String, ActionDefinition>,
    /// collection handle -> workflow name
    mappings: BTreeMap<String, String>,
}

impl WorkflowConfiguration {
    /// Start building a configuration around the given default workflow name
    pub fn builder(default_workflow: impl Into<String>) -> WorkflowConfigurationBuilder {
        WorkflowConfigurationBuilder {
            config: WorkflowConfiguration {
                default_workflow: default_workflow.into(),
                workflows: BTreeMap::new(),
                steps: HashMap::new(),
                actions: HashMap::new(),
                mappings: BTreeMap::new(),
            },
        }
    }

    /// Name of the default workflow
    pub fn default_workflow(&self) -> &str {
        &self.default_workflow
    }

    /// Whether the name refers to a workflow: declared, the default, or the
    /// target of a collection mapping
    pub fn contains_workflow(&self, name: &str) -> bool {
        self.workflows.contains_key(name)
            || self.default_workflow == name
            || self.mappings.values().any(|workflow| workflow == name)
    }

    /// Whether the name is the default workflow
    pub fn is_default(&self, name: &str) -> bool {
        self.default_workflow == name
    }

    /// Declared workflows, ordered by name
    pub fn workflows(&self) -> impl Iterator<Item = &WorkflowDeclaration> {
        self.workflows.values()
    }

    /// Get a declared workflow by name
    pub fn workflow(&self, name: &str) -> Option<&WorkflowDeclaration> {
        self.workflows.get(name)
    }

    /// Get a step definition by id
    pub fn step(&self, id: &str) -> Option<&StepDefinition> {
        self.steps.get(id)
    }

    /// Get an action definition by id
    pub fn action(&self, id: &str) -> Option<&ActionDefinition> {
        self.actions.get(id)
    }

    /// Workflow explicitly mapped to a collection handle, if any
    pub fn mapping_for(&self, handle: &str) -> Option<&str> {
        self.mappings.get(handle).map(String::as_str)
    }

    /// All explicit mappings as (collection handle, workflow name), ordered by handle
    pub fn mappings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.mappings
            .iter()
            .map(|(handle, workflow)| (handle.as_str(), workflow.as_str()))
    }

    /// Assemble the full definition of a workflow.
    ///
    /// Fails with `UnknownWorkflow` when the name refers to nothing, and with
    /// `UnresolvableDefinition` when the name is known but either has no
    /// declaration or references a step that is not defined.
    pub fn resolve(&self, name: &str) -> Result<ResolvedWorkflow, CoreError> {
        if !self.contains_workflow(name) {
            return Err(CoreError::UnknownWorkflow(name.to_string()));
        }

        let declaration =
            self.workflows
                .get(name)
                .ok_or_else(|| CoreError::UnresolvableDefinition {
                    name: name.to_string(),
                    reason: "no workflow definition is declared".to_string(),
                })?;

        let steps = declaration
            .steps
            .iter()
            .map(|step_id| {
                self.steps
                    .get(step_id)
                    .cloned()
                    .ok_or_else(|| CoreError::UnresolvableDefinition {
                        name: name.to_string(),
                        reason: format!("step '{}' is not defined", step_id),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ResolvedWorkflow {
            name: declaration.name.clone(),
            is_default: self.is_default(name),
            steps,
        })
    }
}

/// Builder for [`WorkflowConfiguration`].
///
/// Performs no validation; later entries with the same key replace earlier ones.
#[derive(Debug)]
pub struct WorkflowConfigurationBuilder {
    config: WorkflowConfiguration,
}

impl WorkflowConfigurationBuilder {
    /// Declare a workflow with its ordered step ids
    pub fn workflow<I, S>(mut self, name: impl Into<String>, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let declaration = WorkflowDeclaration {
            name: name.clone(),
            steps: steps.into_iter().map(Into::into).collect(),
        };
        self.config.workflows.insert(name, declaration);
        self
    }

    /// Define a step
    pub fn step(mut self, step: StepDefinition) -> Self {
        self.config.steps.insert(step.id.clone(), step);
        self
    }

    /// Define an action
    pub fn action(mut self, action: ActionDefinition) -> Self {
        self.config.actions.insert(action.id.clone(), action);
        self
    }

    /// Map a collection handle to a workflow
    pub fn map_collection(mut self, handle: impl Into<String>, workflow: impl Into<String>) -> Self {
        self.config.mappings.insert(handle.into(), workflow.into());
        self
    }

    /// Finish building
    pub fn build(self) -> WorkflowConfiguration {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn review_configuration() -> WorkflowConfiguration {
        WorkflowConfiguration::builder("default")
            .workflow("default", ["reviewstep", "editstep", "finaleditstep"])
            .workflow("reviewflow", ["review", "editorial"])
            .step(StepDefinition::new("reviewstep").with_role("Reviewer"))
            .step(StepDefinition::new("editstep").with_role("Editor"))
            .step(StepDefinition::new("finaleditstep").with_role("Final editor"))
            .step(StepDefinition::new("review").with_action("reviewaction"))
            .step(StepDefinition::new("editorial").with_action("editaction"))
            .map_collection("123456789/1", "reviewflow")
            .build()
    }

    #[test]
    fn test_contains_workflow() {
        let config = review_configuration();

        assert!(config.contains_workflow("default"));
        assert!(config.contains_workflow("reviewflow"));
        assert!(!config.contains_workflow("nonexistent"));
        // names are case-sensitive
        assert!(!config.contains_workflow("ReviewFlow"));
    }

    #[test]
    fn test_mapping_target_counts_as_known() {
        let config = WorkflowConfiguration::builder("default")
            .workflow("default", Vec::<String>::new())
            .map_collection("123456789/9", "ghostflow")
            .build();

        assert!(config.contains_workflow("ghostflow"));
        assert!(config.workflow("ghostflow").is_none());
    }

    #[test]
    fn test_resolve_preserves_step_order() {
        let config = review_configuration();

        let resolved = config.resolve("default").unwrap();
        let ids: Vec<&str> = resolved.steps.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["reviewstep", "editstep", "finaleditstep"]);
        assert!(resolved.is_default);

        let resolved = config.resolve("reviewflow").unwrap();
        let ids: Vec<&str> = resolved.steps.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["review", "editorial"]);
        assert!(!resolved.is_default);
    }

    #[test]
    fn test_resolve_unknown_workflow() {
        let config = review_configuration();

        match config.resolve("nonexistent") {
            Err(CoreError::UnknownWorkflow(name)) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected UnknownWorkflow, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_missing_step_is_unresolvable() {
        let config = WorkflowConfiguration::builder("default")
            .workflow("default", ["reviewstep", "missingstep"])
            .step(StepDefinition::new("reviewstep"))
            .build();

        match config.resolve("default") {
            Err(CoreError::UnresolvableDefinition { name, reason }) => {
                assert_eq!(name, "default");
                assert!(reason.contains("missingstep"));
            }
            other => panic!("Expected UnresolvableDefinition, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_mapping_only_workflow_is_unresolvable() {
        let config = WorkflowConfiguration::builder("default")
            .workflow("default", Vec::<String>::new())
            .map_collection("123456789/9", "ghostflow")
            .build();

        assert!(matches!(
            config.resolve("ghostflow"),
            Err(CoreError::UnresolvableDefinition { .. })
        ));
    }

    #[test]
    fn test_mappings_ordered_by_handle() {
        let config = WorkflowConfiguration::builder("default")
            .map_collection("123456789/3", "b")
            .map_collection("123456789/1", "a")
            .map_collection("123456789/2", "a")
            .build();

        let handles: Vec<&str> = config.mappings().map(|(handle, _)| handle).collect();
        assert_eq!(handles, vec!["123456789/1", "123456789/2", "123456789/3"]);
        assert_eq!(config.mapping_for("123456789/3"), Some("b"));
        assert_eq!(config.mapping_for("123456789/4"), None);
    }

    #[test]
    fn test_step_serialization_skips_empty_fields() {
        let step = StepDefinition::new("reviewstep");
        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(value, json!({"id": "reviewstep", "actions": []}));

        let step = StepDefinition {
            config: json!({"requiresClaim": true}),
            ..StepDefinition::new("editstep").with_role("Editor")
        };
        let value = serde_json::to_value(&step).unwrap();
        assert_eq!(value["role"], "Editor");
        assert_eq!(value["config"]["requiresClaim"], true);
    }

    #[test]
    fn test_summary_counts_steps() {
        let config = review_configuration();
        let summary = config.resolve("reviewflow").unwrap().summary();

        assert_eq!(
            summary,
            WorkflowSummary {
                name: "reviewflow".to_string(),
                is_default: false,
                step_count: 2,
            }
        );
    }
}

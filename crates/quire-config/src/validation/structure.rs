use std::collections::HashSet;

use crate::document::ParsedDocument;
use crate::validation::{error_codes, ValidationError, Validator};

/// Validates the shape of the document:
/// - The default workflow is named and declared
/// - Workflow names, step ids, action ids and collection ids/handles are unique
/// - Steps only reference defined actions
/// - No workflow lists the same step twice
pub struct StructureValidator;

impl StructureValidator {
    /// Create a new structure validator
    pub fn new() -> Self {
        StructureValidator
    }

    fn validate_default(&self, document: &ParsedDocument) -> Vec<ValidationError> {
        let default = document.default_workflow.trim();
        if default.is_empty() {
            return vec![ValidationError::new(
                error_codes::INVALID_DEFAULT,
                "No default workflow is configured",
                "default_workflow",
            )];
        }

        if !document.workflows.iter().any(|w| w.name == document.default_workflow) {
            return vec![ValidationError::new(
                error_codes::INVALID_DEFAULT,
                format!(
                    "Default workflow '{}' is not declared in workflows",
                    document.default_workflow
                ),
                "default_workflow",
            )];
        }

        Vec::new()
    }

    fn validate_workflows(&self, document: &ParsedDocument) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut names = HashSet::new();

        for (idx, workflow) in document.workflows.iter().enumerate() {
            let path = format!("workflows[{}]", idx);

            if workflow.name.trim().is_empty() {
                errors.push(ValidationError::new(
                    error_codes::MISSING_REQUIRED_FIELD,
                    "Workflow name must not be empty",
                    format!("{}.name", path),
                ));
                continue;
            }

            if !names.insert(workflow.name.as_str()) {
                errors.push(ValidationError::new(
                    error_codes::DUPLICATE_ID,
                    format!("Duplicate workflow name: '{}'", workflow.name),
                    format!("{}.name", path),
                ));
            }

            let mut seen_steps = HashSet::new();
            for (step_idx, step_id) in workflow.steps.iter().enumerate() {
                if !seen_steps.insert(step_id.as_str()) {
                    errors.push(ValidationError::new(
                        error_codes::DUPLICATE_ID,
                        format!(
                            "Step '{}' is listed more than once in workflow '{}'",
                            step_id, workflow.name
                        ),
                        format!("{}.steps[{}]", path, step_idx),
                    ));
                }
            }
        }

        errors
    }

    fn validate_steps(&self, document: &ParsedDocument) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let action_ids: HashSet<&str> = document.actions.iter().map(|a| a.id.as_str()).collect();
        let mut step_ids = HashSet::new();

        for (idx, step) in document.steps.iter().enumerate() {
            let path = format!("steps[{}]", idx);

            if step.id.trim().is_empty() {
                errors.push(ValidationError::new(
                    error_codes::MISSING_REQUIRED_FIELD,
                    "Step id must not be empty",
                    format!("{}.id", path),
                ));
            } else if !step_ids.insert(step.id.as_str()) {
                errors.push(ValidationError::new(
                    error_codes::DUPLICATE_ID,
                    format!("Duplicate step id: '{}'", step.id),
                    format!("{}.id", path),
                ));
            }

            for (action_idx, action_id) in step.actions.iter().enumerate() {
                if !action_ids.contains(action_id.as_str()) {
                    errors.push(ValidationError::new(
                        error_codes::INVALID_REFERENCE,
                        format!(
                            "Action '{}' referenced by step '{}' is not defined",
                            action_id, step.id
                        ),
                        format!("{}.actions[{}]", path, action_idx),
                    ));
                }
            }
        }

        errors
    }

    fn validate_actions(&self, document: &ParsedDocument) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut action_ids = HashSet::new();

        for (idx, action) in document.actions.iter().enumerate() {
            if action.id.trim().is_empty() {
                errors.push(ValidationError::new(
                    error_codes::MISSING_REQUIRED_FIELD,
                    "Action id must not be empty",
                    format!("actions[{}].id", idx),
                ));
            } else if !action_ids.insert(action.id.as_str()) {
                errors.push(ValidationError::new(
                    error_codes::DUPLICATE_ID,
                    format!("Duplicate action id: '{}'", action.id),
                    format!("actions[{}].id", idx),
                ));
            }
        }

        errors
    }

    fn validate_collections(&self, document: &ParsedDocument) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut ids = HashSet::new();
        let mut handles = HashSet::new();

        for (idx, collection) in document.collections.iter().enumerate() {
            let path = format!("collections[{}]", idx);

            if !ids.insert(collection.id) {
                errors.push(ValidationError::new(
                    error_codes::DUPLICATE_ID,
                    format!("Duplicate collection id: '{}'", collection.id),
                    format!("{}.id", path),
                ));
            }

            if collection.handle.trim().is_empty() {
                errors.push(ValidationError::new(
                    error_codes::MISSING_REQUIRED_FIELD,
                    "Collection handle must not be empty",
                    format!("{}.handle", path),
                ));
            } else if !handles.insert(collection.handle.as_str()) {
                errors.push(ValidationError::new(
                    error_codes::DUPLICATE_ID,
                    format!("Duplicate collection handle: '{}'", collection.handle),
                    format!("{}.handle", path),
                ));
            }
        }

        errors
    }
}

impl Default for StructureValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for StructureValidator {
    fn validate(&self, document: &ParsedDocument) -> Vec<ValidationError> {
        let mut errors = self.validate_default(document);
        errors.extend(self.validate_workflows(document));
        errors.extend(self.validate_steps(document));
        errors.extend(self.validate_actions(document));
        errors.extend(self.validate_collections(document));
        errors
    }
}

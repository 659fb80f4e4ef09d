use std::collections::HashSet;

use crate::document::ParsedDocument;
use crate::validation::{error_codes, ValidationError, Validator};

/// Validates references that a lenient load tolerates:
/// - Workflow step references that name no defined step
/// - Collection mappings that target an undeclared workflow
/// - Collection mappings whose handle names no known collection
///
/// The resolver surfaces the first two as unresolvable definitions and skips
/// the third.
pub struct IntegrityValidator;

impl IntegrityValidator {
    /// Create a new integrity validator
    pub fn new() -> Self {
        IntegrityValidator
    }

    fn validate_step_references(&self, document: &ParsedDocument) -> Vec<ValidationError> {
        let step_ids: HashSet<&str> = document.steps.iter().map(|s| s.id.as_str()).collect();
        let mut errors = Vec::new();

        for (idx, workflow) in document.workflows.iter().enumerate() {
            for (step_idx, step_id) in workflow.steps.iter().enumerate() {
                if !step_ids.contains(step_id.as_str()) {
                    errors.push(ValidationError::new(
                        error_codes::INVALID_REFERENCE,
                        format!(
                            "Step '{}' referenced by workflow '{}' is not defined",
                            step_id, workflow.name
                        ),
                        format!("workflows[{}].steps[{}]", idx, step_idx),
                    ));
                }
            }
        }

        errors
    }

    fn validate_mappings(&self, document: &ParsedDocument) -> Vec<ValidationError> {
        let workflow_names: HashSet<&str> =
            document.workflows.iter().map(|w| w.name.as_str()).collect();
        let handles: HashSet<&str> = document
            .collections
            .iter()
            .map(|c| c.handle.as_str())
            .collect();
        let mut errors = Vec::new();

        for (handle, workflow) in &document.collection_mappings {
            let path = format!("collection_mappings[\"{}\"]", handle);

            if !workflow_names.contains(workflow.as_str()) {
                errors.push(ValidationError::new(
                    error_codes::INVALID_REFERENCE,
                    format!(
                        "Collection '{}' is mapped to workflow '{}', which is not declared",
                        handle, workflow
                    ),
                    path.clone(),
                ));
            }

            if !handles.contains(handle.as_str()) {
                errors.push(ValidationError::new(
                    error_codes::INVALID_REFERENCE,
                    format!("Mapped collection handle '{}' names no known collection", handle),
                    path,
                ));
            }
        }

        errors
    }
}

impl Default for IntegrityValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for IntegrityValidator {
    fn validate(&self, document: &ParsedDocument) -> Vec<ValidationError> {
        let mut errors = self.validate_step_references(document);
        errors.extend(self.validate_mappings(document));
        errors
    }
}

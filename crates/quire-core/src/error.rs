use thiserror::Error;

/// Core error type for workflow configuration queries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The name matches no configured workflow
    #[error("Unknown workflow: {0}")]
    UnknownWorkflow(String),

    /// The workflow is known but its definition cannot be assembled
    #[error("Workflow definition for {name} cannot be resolved: {reason}")]
    UnresolvableDefinition {
        /// Name of the workflow
        name: String,
        /// What is missing from the configuration
        reason: String,
    },

    /// Collection not found
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    /// Workflow step not found
    #[error("Workflow step not found: {0}")]
    StepNotFound(String),

    /// Workflow action not found
    #[error("Workflow action not found: {0}")]
    ActionNotFound(String),

    /// Collection catalog failure
    #[error("Collection catalog error: {0}")]
    CatalogError(String),
}

impl CoreError {
    /// Whether the error means "nothing by that name" from a caller's perspective.
    ///
    /// `UnresolvableDefinition` is a deployment defect, but callers see it the
    /// same way as an unknown name.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::UnknownWorkflow(_)
                | CoreError::UnresolvableDefinition { .. }
                | CoreError::CollectionNotFound(_)
                | CoreError::StepNotFound(_)
                | CoreError::ActionNotFound(_)
        )
    }

    /// Whether the error points at broken configuration rather than bad input
    pub fn is_configuration_defect(&self) -> bool {
        matches!(self, CoreError::UnresolvableDefinition { .. })
    }
}

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

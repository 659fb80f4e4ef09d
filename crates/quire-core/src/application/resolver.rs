use crate::{
    domain::catalog::CollectionCatalog,
    domain::collection::{Collection, QueryContext},
    domain::workflow::{ActionDefinition, StepDefinition, WorkflowConfiguration, WorkflowSummary},
    CoreError,
};
use std::sync::Arc;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// Answers read-only queries over the workflow configuration
pub struct WorkflowConfigResolver {
    /// Load-once workflow configuration
    configuration: Arc<WorkflowConfiguration>,

    /// Where collections come from
    catalog: Arc<dyn CollectionCatalog>,
}

impl WorkflowConfigResolver {
    /// Create a new resolver
    pub fn new(configuration: Arc<WorkflowConfiguration>, catalog: Arc<dyn CollectionCatalog>) -> Self {
        Self {
            configuration,
            catalog,
        }
    }

    /// The configuration this resolver reads from
    pub fn configuration(&self) -> &WorkflowConfiguration {
        &self.configuration
    }

    /// Whether the name refers to a configured workflow
    pub fn exists_by_name(&self, name: &str) -> bool {
        self.configuration.contains_workflow(name)
    }

    /// Whether the name is the default workflow.
    ///
    /// Only meaningful for names that exist.
    pub fn is_default(&self, name: &str) -> bool {
        self.configuration.is_default(name)
    }

    /// Collections the workflow applies to, ordered by handle.
    ///
    /// For the default workflow these are the collections without an explicit
    /// mapping to some other workflow; otherwise the collections explicitly
    /// mapped to `name`.
    pub async fn list_collections_for_workflow(
        &self,
        ctx: &QueryContext,
        name: &str,
    ) -> Result<Vec<Collection>, CoreError> {
        if !self.exists_by_name(name) {
            debug!(workflow = %name, "Collections requested for unknown workflow");
            return Err(CoreError::UnknownWorkflow(name.to_string()));
        }

        let mut collections = if self.is_default(name) {
            self.collections_covered_by_default(ctx).await?
        } else {
            self.collections_mapped_to(ctx, name).await?
        };

        collections.sort_by(|a, b| a.handle.cmp(&b.handle));

        debug!(
            workflow = %name,
            count = collections.len(),
            "Resolved collections for workflow"
        );

        Ok(collections)
    }

    /// Steps of the workflow, in configured order
    pub fn list_steps_for_workflow(&self, name: &str) -> Result<Vec<StepDefinition>, CoreError> {
        if !self.exists_by_name(name) {
            debug!(workflow = %name, "Steps requested for unknown workflow");
            return Err(CoreError::UnknownWorkflow(name.to_string()));
        }

        let workflow = self
            .configuration
            .resolve(name)
            .map_err(log_configuration_defect)?;

        Ok(workflow.steps)
    }

    /// Every declared workflow, ordered by name.
    ///
    /// Names known only as the target of a collection mapping are not listed,
    /// although `exists_by_name` accepts them and their collections resolve.
    /// They have no definition to summarize.
    pub fn list_workflows(&self) -> Vec<WorkflowSummary> {
        self.configuration
            .workflows()
            .map(|declaration| WorkflowSummary {
                name: declaration.name.clone(),
                is_default: self.is_default(&declaration.name),
                step_count: declaration.steps.len(),
            })
            .collect()
    }

    /// Summary of a single workflow
    pub fn find_workflow(&self, name: &str) -> Result<WorkflowSummary, CoreError> {
        if !self.exists_by_name(name) {
            return Err(CoreError::UnknownWorkflow(name.to_string()));
        }

        self.configuration
            .resolve(name)
            .map(|workflow| workflow.summary())
            .map_err(log_configuration_defect)
    }

    /// The workflow that applies to a collection: its explicit mapping, else the default
    pub async fn workflow_for_collection(
        &self,
        ctx: &QueryContext,
        collection_id: &Uuid,
    ) -> Result<WorkflowSummary, CoreError> {
        let collection = self
            .catalog
            .find_by_id(ctx, collection_id)
            .await?
            .ok_or_else(|| CoreError::CollectionNotFound(collection_id.to_string()))?;

        let name = self
            .configuration
            .mapping_for(&collection.handle)
            .unwrap_or_else(|| self.configuration.default_workflow());

        debug!(collection = %collection.handle, workflow = %name, "Resolved workflow for collection");

        self.find_workflow(name)
    }

    /// A step definition by id
    pub fn find_step(&self, id: &str) -> Result<StepDefinition, CoreError> {
        self.configuration
            .step(id)
            .cloned()
            .ok_or_else(|| CoreError::StepNotFound(id.to_string()))
    }

    /// An action definition by id
    pub fn find_action(&self, id: &str) -> Result<ActionDefinition, CoreError> {
        self.configuration
            .action(id)
            .cloned()
            .ok_or_else(|| CoreError::ActionNotFound(id.to_string()))
    }

    /// Collections with no explicit mapping to a non-default workflow
    async fn collections_covered_by_default(
        &self,
        ctx: &QueryContext,
    ) -> Result<Vec<Collection>, CoreError> {
        let default_workflow = self.configuration.default_workflow();
        let collections = self.catalog.find_all(ctx).await?;

        Ok(collections
            .into_iter()
            .filter(|collection| match self.configuration.mapping_for(&collection.handle) {
                None => true,
                Some(workflow) => workflow == default_workflow,
            })
            .collect())
    }

    /// Collections explicitly mapped to `name`
    async fn collections_mapped_to(
        &self,
        ctx: &QueryContext,
        name: &str,
    ) -> Result<Vec<Collection>, CoreError> {
        let mut collections = Vec::new();

        for (handle, workflow) in self.configuration.mappings() {
            if workflow != name {
                continue;
            }

            match self.catalog.find_by_handle(ctx, handle).await? {
                Some(collection) => collections.push(collection),
                None => {
                    warn!(
                        workflow = %name,
                        handle = %handle,
                        "Collection mapping refers to a handle that is not a known collection"
                    );
                }
            }
        }

        Ok(collections)
    }
}

impl std::fmt::Debug for WorkflowConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowConfigResolver")
            .field("default_workflow", &self.configuration.default_workflow())
            .finish()
    }
}

fn log_configuration_defect(err: CoreError) -> CoreError {
    if let CoreError::UnresolvableDefinition { name, reason } = &err {
        error!(workflow = %name, %reason, "Workflow configuration is inconsistent");
    }
    err
}

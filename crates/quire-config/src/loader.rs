use std::path::Path;

use quire_core::{InMemoryCollectionCatalog, WorkflowConfiguration};
use tracing::{info, warn};

use crate::document::ParsedDocument;
use crate::error::ConfigError;
use crate::parser::parse_document;
use crate::validation::{validate_document, ValidationError};

/// Options controlling how a configuration document is loaded
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Treat dangling references as errors instead of warnings
    pub strict: bool,
}

impl LoadOptions {
    /// Options for a strict load
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Result of loading a configuration document
#[derive(Debug)]
pub struct LoadedConfiguration {
    /// The immutable workflow configuration
    pub configuration: WorkflowConfiguration,

    /// Collections declared in the document
    pub catalog: InMemoryCollectionCatalog,

    /// Integrity findings tolerated by a lenient load
    pub warnings: Vec<ValidationError>,
}

/// Parse, validate and build the workflow configuration from YAML text
pub fn load_configuration(
    yaml_str: &str,
    options: &LoadOptions,
) -> Result<LoadedConfiguration, ConfigError> {
    let document = parse_document(yaml_str)?;
    let warnings = validate_document(&document, options.strict)?;

    for warning in &warnings {
        warn!(
            code = warning.code,
            path = warning.path.as_deref().unwrap_or(""),
            "Workflow configuration: {}",
            warning.message
        );
    }

    let (configuration, catalog) = build(document);

    info!(
        default_workflow = configuration.default_workflow(),
        workflows = configuration.workflows().count(),
        collections = catalog.len(),
        warnings = warnings.len(),
        "Loaded workflow configuration"
    );

    Ok(LoadedConfiguration {
        configuration,
        catalog,
        warnings,
    })
}

/// Read and load the workflow configuration from a file
pub async fn load_configuration_file(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<LoadedConfiguration, ConfigError> {
    let path = path.as_ref();
    info!(path = %path.display(), "Reading workflow configuration");
    let contents = tokio::fs::read_to_string(path).await?;
    load_configuration(&contents, options)
}

fn build(document: ParsedDocument) -> (WorkflowConfiguration, InMemoryCollectionCatalog) {
    let mut builder = WorkflowConfiguration::builder(document.default_workflow);

    for workflow in document.workflows {
        builder = builder.workflow(workflow.name, workflow.steps);
    }
    for step in document.steps {
        builder = builder.step(step);
    }
    for action in document.actions {
        builder = builder.action(action);
    }
    for (handle, workflow) in document.collection_mappings {
        builder = builder.map_collection(handle, workflow);
    }

    (
        builder.build(),
        InMemoryCollectionCatalog::new(document.collections),
    )
}

//! # Quire Config
//!
//! Reads the YAML workflow configuration document used by the Quire service
//! and turns it into an immutable [`quire_core::WorkflowConfiguration`] plus
//! an in-memory collection catalog.
//!
//! ## Features
//!
//! * Workflows, steps, actions and collections declared in one document
//! * Structural validation with every problem reported at once
//! * Lenient or strict handling of dangling references
//!
//! ## Example
//!
//! ```
//! use quire_config::{load_configuration, LoadOptions};
//!
//! let yaml = r#"
//! config_version: "1.0"
//! default_workflow: defaultWorkflow
//! workflows:
//!   - name: defaultWorkflow
//!     steps: [reviewstep]
//! steps:
//!   - id: reviewstep
//!     role: Reviewer
//!     actions: [reviewaction]
//! actions:
//!   - id: reviewaction
//!     options: [approve, reject]
//! "#;
//!
//! let loaded = load_configuration(yaml, &LoadOptions::default()).unwrap();
//! assert!(loaded.configuration.is_default("defaultWorkflow"));
//! assert!(loaded.warnings.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod loader;
mod parser;

/// Configuration document types
pub mod document;
/// Document validation
pub mod validation;

pub use document::{ParsedDocument, WorkflowEntry};
pub use error::ConfigError;
pub use loader::{load_configuration, load_configuration_file, LoadOptions, LoadedConfiguration};
pub use parser::{parse_document, SUPPORTED_VERSION};
pub use validation::ValidationError;

/// Parse and validate a workflow configuration document without building it.
///
/// Dangling references are checked according to `strict`; when lenient they
/// are returned alongside the document.
///
/// # Examples
///
/// ```
/// use quire_config::parse_and_validate_document;
///
/// // The default workflow is not declared
/// let yaml = r#"
/// config_version: "1.0"
/// default_workflow: defaultWorkflow
/// workflows:
///   - name: otherWorkflow
/// "#;
///
/// let result = parse_and_validate_document(yaml, false);
/// assert!(result.is_err());
///
/// if let Err(error) = result {
///     assert!(error.error_code().contains("INVALID_DEFAULT"));
/// }
/// ```
pub fn parse_and_validate_document(
    yaml_str: &str,
    strict: bool,
) -> Result<(ParsedDocument, Vec<ValidationError>), ConfigError> {
    let document = parser::parse_document(yaml_str)?;
    let warnings = validation::validate_document(&document, strict)?;
    Ok((document, warnings))
}

/// Returns a version string for the Quire config crate
///
/// # Examples
///
/// ```
/// use quire_config::version;
///
/// let ver = version();
/// assert!(ver.starts_with("0."));
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

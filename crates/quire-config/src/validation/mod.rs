use crate::document::ParsedDocument;
use crate::error::ConfigError;
use std::error::Error;
use std::fmt;

mod reference;
mod structure;

pub use reference::IntegrityValidator;
pub use structure::StructureValidator;

/// Represents a validation problem found in the configuration document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code (should be a constant identifier)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Optional path to the location of the error (e.g., "workflows[0].steps[2]")
    pub path: Option<String>,
}

impl ValidationError {
    pub(crate) fn new(code: &'static str, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl Error for ValidationError {}

/// Validation error codes
pub mod error_codes {
    /// Invalid reference (undefined action, step, workflow or collection)
    pub const INVALID_REFERENCE: &str = "ERR_CONFIG_VALIDATION_INVALID_REFERENCE";

    /// Duplicate ID or name found
    pub const DUPLICATE_ID: &str = "ERR_CONFIG_VALIDATION_DUPLICATE_ID";

    /// Missing required field
    pub const MISSING_REQUIRED_FIELD: &str = "ERR_CONFIG_VALIDATION_MISSING_REQUIRED_FIELD";

    /// The default workflow is missing or not declared
    pub const INVALID_DEFAULT: &str = "ERR_CONFIG_VALIDATION_INVALID_DEFAULT";
}

/// A trait for validators that check specific aspects of the configuration document
pub trait Validator {
    /// Validate the document and return a list of validation errors (if any)
    fn validate(&self, document: &ParsedDocument) -> Vec<ValidationError>;
}

/// Validate a parsed configuration document.
///
/// Structural problems always fail. Integrity problems (references that
/// resolve to nothing) fail only when `strict` is set; otherwise they are
/// returned as warnings for the caller to report.
pub fn validate_document(
    document: &ParsedDocument,
    strict: bool,
) -> Result<Vec<ValidationError>, ConfigError> {
    let mut errors = StructureValidator::new().validate(document);
    let findings = IntegrityValidator::new().validate(document);

    if strict {
        errors.extend(findings);
        if !errors.is_empty() {
            return Err(ConfigError::from_validation_errors(errors));
        }
        return Ok(Vec::new());
    }

    if !errors.is_empty() {
        return Err(ConfigError::from_validation_errors(errors));
    }

    Ok(findings)
}

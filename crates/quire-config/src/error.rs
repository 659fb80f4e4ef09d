use crate::validation::ValidationError;
use std::fmt;
use thiserror::Error;

/// All possible errors that can occur while loading the workflow configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Errors that occur during YAML parsing
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A single validation error
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    /// Multiple validation errors
    #[error("{}", MultipleErrorsFormat(.0))]
    MultipleValidationErrors(Vec<ValidationError>),

    /// Unsupported document version
    #[error("Unsupported configuration version: {0}")]
    UnsupportedVersion(String),

    /// The configuration file could not be read
    #[error("I/O error reading workflow configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

// Helper struct to format multiple errors
struct MultipleErrorsFormat<'a>(&'a [ValidationError]);

impl fmt::Display for MultipleErrorsFormat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multiple validation errors ({} issues):", self.0.len())?;
        for (i, err) in self.0.iter().enumerate() {
            write!(f, "\n  {}. {}", i + 1, err)?;
        }
        Ok(())
    }
}

impl ConfigError {
    /// Create a ConfigError from a vector of validation errors
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        let mut errors = errors;
        match errors.len() {
            0 => ConfigError::InternalError(
                "Called from_validation_errors with empty vector".to_string(),
            ),
            1 => match errors.pop() {
                Some(err) => ConfigError::ValidationError(err),
                None => ConfigError::InternalError("validation error vanished".to_string()),
            },
            _ => ConfigError::MultipleValidationErrors(errors),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::YamlError(_) => "ERR_CONFIG_YAML_PARSE",
            ConfigError::ValidationError(err) => err.code,
            ConfigError::MultipleValidationErrors(_) => "ERR_CONFIG_VALIDATION_MULTIPLE",
            ConfigError::UnsupportedVersion(_) => "ERR_CONFIG_UNSUPPORTED_VERSION",
            ConfigError::IoError(_) => "ERR_CONFIG_IO",
            ConfigError::InternalError(_) => "ERR_CONFIG_INTERNAL",
        }
    }

    /// All validation errors carried by this error, if any
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            ConfigError::ValidationError(err) => std::slice::from_ref(err),
            ConfigError::MultipleValidationErrors(errors) => errors,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::error_codes;

    fn validation_error(code: &'static str, message: &str) -> ValidationError {
        ValidationError {
            code,
            message: message.to_string(),
            path: None,
        }
    }

    #[test]
    fn test_from_validation_errors() {
        let single = ConfigError::from_validation_errors(vec![validation_error(
            error_codes::DUPLICATE_ID,
            "duplicate",
        )]);
        assert_eq!(single.error_code(), error_codes::DUPLICATE_ID);
        assert_eq!(single.validation_errors().len(), 1);

        let multiple = ConfigError::from_validation_errors(vec![
            validation_error(error_codes::DUPLICATE_ID, "first"),
            validation_error(error_codes::INVALID_REFERENCE, "second"),
        ]);
        assert_eq!(multiple.error_code(), "ERR_CONFIG_VALIDATION_MULTIPLE");
        let rendered = multiple.to_string();
        assert!(rendered.contains("2 issues"));
        assert!(rendered.contains("1. ERR_CONFIG_VALIDATION_DUPLICATE_ID: first"));

        let empty = ConfigError::from_validation_errors(Vec::new());
        assert_eq!(empty.error_code(), "ERR_CONFIG_INTERNAL");
    }
}

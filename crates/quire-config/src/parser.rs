use crate::document::ParsedDocument;
use crate::error::ConfigError;

/// Document versions this crate understands
pub const SUPPORTED_VERSION: &str = "1.0";

/// Parse a YAML string into a ParsedDocument.
///
/// This function handles the initial conversion from YAML text to structured data.
/// It does not check references or uniqueness - that's handled separately by the
/// validation module.
pub fn parse_document(yaml_str: &str) -> Result<ParsedDocument, ConfigError> {
    let document: ParsedDocument = serde_yaml::from_str(yaml_str)?;

    if document.config_version != SUPPORTED_VERSION {
        return Err(ConfigError::UnsupportedVersion(document.config_version.clone()));
    }

    Ok(document)
}

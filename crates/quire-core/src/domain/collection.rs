use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A grouping of submitted items to which exactly one workflow applies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    /// Stable identifier of the collection
    pub id: Uuid,

    /// Persistent handle, the key used by collection mappings
    pub handle: String,

    /// Human-readable name
    pub name: String,
}

impl Collection {
    /// Create a new collection with a random id
    pub fn new(handle: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            handle: handle.into(),
            name: name.into(),
        }
    }
}

/// Ambient context of the request a query is served for.
///
/// The resolver never looks inside; it is handed through to the
/// collection catalog untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryContext {
    /// Correlation id of the originating request
    pub correlation_id: String,

    /// Preferred locale of the caller, if any
    pub locale: Option<String>,
}

impl QueryContext {
    /// Create a context for the given correlation id
    pub fn new(correlation_id: impl Into<String>) -> Self {
        Self {
            correlation_id: correlation_id.into(),
            locale: None,
        }
    }

    /// Attach a locale
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

//! Pagination of resolver results
//!
//! The resolver returns whole ordered sequences; this module cuts them into
//! pages and renders the `_embedded` / `page` envelope.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ServerError, ServerResult};

/// Largest page size a client may request
pub const MAX_PAGE_SIZE: usize = 1000;

/// Page size used when the client does not ask for one
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Query parameters selecting a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page number
    #[serde(default)]
    pub page: usize,

    /// Number of elements per page
    #[serde(default = "default_size")]
    pub size: usize,
}

fn default_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Create a page request
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }
}

/// One page of an ordered sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Elements on this page
    pub items: Vec<T>,
    /// Requested page size
    pub size: usize,
    /// Number of elements across all pages
    pub total_elements: usize,
    /// Number of pages
    pub total_pages: usize,
    /// Zero-based page number
    pub number: usize,
}

impl<T: Serialize> Page<T> {
    /// Render the page as `{"_embedded": {rel: [...]}, "page": {...}}`
    pub fn to_body(&self, rel: &str) -> ServerResult<Value> {
        let items = serde_json::to_value(&self.items)
            .map_err(|err| ServerError::InternalError(format!("JSON error: {}", err)))?;

        let mut embedded = serde_json::Map::new();
        embedded.insert(rel.to_string(), items);

        Ok(json!({
            "_embedded": embedded,
            "page": {
                "size": self.size,
                "totalElements": self.total_elements,
                "totalPages": self.total_pages,
                "number": self.number,
            }
        }))
    }
}

/// Cut the requested page out of `items`.
///
/// A page past the end of a non-empty sequence is rejected; any page of an
/// empty sequence is empty.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> ServerResult<Page<T>> {
    if request.size == 0 || request.size > MAX_PAGE_SIZE {
        return Err(ServerError::ValidationError(format!(
            "Page size must be between 1 and {}, got {}",
            MAX_PAGE_SIZE, request.size
        )));
    }

    let total_elements = items.len();
    let total_pages = total_elements.div_ceil(request.size);

    if total_elements == 0 {
        return Ok(Page {
            items: Vec::new(),
            size: request.size,
            total_elements,
            total_pages,
            number: request.page,
        });
    }

    let offset = request
        .page
        .checked_mul(request.size)
        .filter(|offset| *offset < total_elements)
        .ok_or_else(|| {
            ServerError::ValidationError(format!(
                "Page {} is out of range, there are {} pages",
                request.page, total_pages
            ))
        })?;

    let items = items
        .into_iter()
        .skip(offset)
        .take(request.size)
        .collect();

    Ok(Page {
        items,
        size: request.size,
        total_elements,
        total_pages,
        number: request.page,
    })
}

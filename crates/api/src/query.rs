//! Shared query parameter types for API handlers.

use marquee_core::pagination::PageRequest;
use serde::Deserialize;

/// Raw pagination parameters (`?page=&limit=`).
///
/// Kept as text so malformed values fall back to defaults instead of
/// rejecting the request; see [`PageRequest::from_query`].
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PaginationParams {
    pub fn resolve(&self) -> PageRequest {
        PageRequest::from_query(self.page.as_deref(), self.limit.as_deref())
    }
}

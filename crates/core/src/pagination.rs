//! Offset pagination for the entry listing.
//!
//! Pages are 1-based; `skip = (page - 1) * limit`. Query values are parsed
//! leniently: anything missing, non-numeric or below 1 falls back to the
//! default, and `limit` is capped at [`MAX_PAGE_LIMIT`].

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const MAX_PAGE_LIMIT: i64 = 100;

/// A resolved page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PageRequest {
    /// Resolve raw `?page=&limit=` query values.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            limit: clamp_limit(parse_positive(limit), DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT),
        }
    }

    /// Number of rows to skip before this page.
    pub fn skip(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n >= 1)
}

/// Whether rows remain after the ones returned so far.
pub fn has_more(skip: i64, returned: usize, total: i64) -> bool {
    skip.saturating_add(returned as i64) < total
}

/// One page of results plus the bookkeeping the client needs to continue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn new(request: PageRequest, items: Vec<T>, total: i64) -> Self {
        let has_more = has_more(request.skip(), items.len(), total);
        Self {
            items,
            total,
            page: request.page,
            limit: request.limit,
            has_more,
        }
    }
}

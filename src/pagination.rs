//! # Pagination
//!
//! Page-window normalization and the response envelope for list endpoints.
//!
//! Normalization happens before query construction: builders and repositories
//! only ever see a `PageParams` that has been through [`PageParams::normalize`].
//! The envelope mirrors what list endpoints serialize: the items of one page
//! plus enough metadata for clients to walk the collection.

use serde::{Deserialize, Serialize};

/// Largest page size a caller may request; anything above falls back to the
/// default.
pub const MAX_PER_PAGE: u32 = 100;

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    25
}

/// Caller-supplied page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PageParams {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Clamp out-of-range values: page 0 becomes 1; per_page 0 or anything
    /// above [`MAX_PER_PAGE`] becomes the default.
    pub fn normalize(self) -> Self {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            default_per_page()
        } else {
            self.per_page
        };
        Self { page, per_page }
    }

    /// Row offset of this window: `(page - 1) * per_page`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }
}

/// Pagination metadata returned alongside one page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: u32,
    pub per_page: u32,
    pub total_count: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PaginationInfo {
    /// Derive the envelope metadata from normalized params and the count
    /// query's result.
    pub fn new(params: PageParams, total_count: u64) -> Self {
        let total_pages = ((total_count as f64) / (params.per_page as f64)).ceil() as u32;
        Self {
            page: params.page,
            per_page: params.per_page,
            total_count,
            total_pages,
            has_next: params.page < total_pages,
            has_previous: params.page > 1,
        }
    }
}

/// One page of results plus its pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

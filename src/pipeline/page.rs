use serde::Serialize;
use thiserror::Error;

use crate::domain::Product;

/// Reference page size from the storefront grid.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Invalid query input. Distinguishes caller bugs (page 0, empty pages) from
/// legitimate overflow, which is clamped instead of rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("page numbers start at 1")]
    InvalidPage,
    #[error("page size must be positive")]
    InvalidPageSize,
}

/// Pagination metadata, shaped like the storefront API envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// One bounded slice of sorted, filtered results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub items: Vec<Product>,
    pub pagination: Pagination,
}

/// Slices the requested page out of an already-sorted list.
///
/// A page past the end clamps down to the last page that exists. When nothing
/// matched at all there is no valid page to clamp to, so the metadata reports
/// the requested page with `total_pages = 0`.
pub fn paginate(sorted: Vec<Product>, page: usize, page_size: usize) -> Result<Page, QueryError> {
    if page < 1 {
        return Err(QueryError::InvalidPage);
    }
    if page_size < 1 {
        return Err(QueryError::InvalidPageSize);
    }

    let total_items = sorted.len();
    let total_pages = total_items.div_ceil(page_size);

    let current_page = if total_pages > 0 && page > total_pages {
        total_pages
    } else {
        page
    };

    // On a zero-match result current_page is the raw requested page, which can
    // be arbitrarily large; saturate rather than overflow the offset.
    let start = (current_page - 1).saturating_mul(page_size);
    let items: Vec<Product> = sorted
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    Ok(Page {
        items,
        pagination: Pagination {
            current_page,
            total_pages,
            total_items,
            items_per_page: page_size,
            has_next_page: current_page < total_pages,
            has_prev_page: total_pages > 0 && current_page > 1,
        },
    })
}

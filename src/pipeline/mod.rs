//! The catalog query pipeline: filter, stable sort, paginate.
//!
//! Pure and synchronous. Every call recomputes from the full product slice;
//! identical inputs over an unchanged slice produce identical pages.

mod filter;
mod page;
mod sort;

pub use filter::{Availability, FilterCriteria, PriceRange, DEFAULT_MAX_PRICE};
pub use page::{paginate, Page, Pagination, QueryError, DEFAULT_PAGE_SIZE};
pub use sort::SortKey;

use crate::domain::Product;

/// One complete, caller-owned query: filter state, sort key, page request.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    pub filters: FilterCriteria,
    pub sort: SortKey,
    pub page: usize,
    pub page_size: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            filters: FilterCriteria::default(),
            sort: SortKey::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Runs the pipeline over a snapshot of the catalog.
///
/// Sorting happens before pagination; slicing first and sorting within the
/// page would break the global ordering guarantee.
pub fn run(products: &[Product], query: &CatalogQuery) -> Result<Page, QueryError> {
    if query.page < 1 {
        return Err(QueryError::InvalidPage);
    }
    if query.page_size < 1 {
        return Err(QueryError::InvalidPageSize);
    }

    let mut matched = query.filters.apply(products);
    query.sort.apply(&mut matched);
    paginate(matched, query.page, query.page_size)
}

use std::cmp::Ordering;

use crate::domain::Product;

/// The ordering strategy applied to filtered results.
///
/// Every mode sorts stably: products comparing equal keep the relative order
/// they had after filtering, so pagination is reproducible across calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    /// Products flagged "new" come first.
    Newest,
    /// Lexicographic by display name.
    Name,
    /// Descending by rating.
    #[default]
    Popularity,
}

impl SortKey {
    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::PriceAsc => a.price.total_cmp(&b.price),
            SortKey::PriceDesc => b.price.total_cmp(&a.price),
            SortKey::Newest => b.is_new.cmp(&a.is_new),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Popularity => b.rating.total_cmp(&a.rating),
        }
    }

    /// Sorts in place. `Vec::sort_by` is stable, which the pagination stage
    /// relies on.
    pub fn apply(&self, products: &mut [Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}

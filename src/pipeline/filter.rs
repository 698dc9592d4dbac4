use serde::{Deserialize, Serialize};

use crate::domain::{Category, Product};

/// Availability constraint over the in-stock flag.
///
/// Selecting both "in stock" and "pre-order" in the UI means the caller wants
/// every product, so [`Availability::from_flags`] maps that combination to
/// `Any` rather than to a contradiction that matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Availability {
    #[default]
    Any,
    InStock,
    PreOrder,
}

impl Availability {
    pub fn from_flags(in_stock: bool, pre_order: bool) -> Self {
        match (in_stock, pre_order) {
            (true, false) => Availability::InStock,
            (false, true) => Availability::PreOrder,
            _ => Availability::Any,
        }
    }

    fn allows(&self, product: &Product) -> bool {
        match self {
            Availability::Any => true,
            Availability::InStock => product.in_stock,
            Availability::PreOrder => !product.in_stock,
        }
    }
}

/// Inclusive price bounds. The default upper bound is a sentinel chosen well
/// above any catalog price; callers wanting a truly unbounded range pass a
/// larger one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

pub const DEFAULT_MAX_PRICE: f64 = 200_000.0;

impl Default for PriceRange {
    fn default() -> Self {
        Self { min: 0.0, max: DEFAULT_MAX_PRICE }
    }
}

impl PriceRange {
    fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Caller-owned filter state for a single query.
///
/// Dimensions combine with logical AND; the allowed sets within a dimension
/// combine with logical OR. Empty sets impose no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub categories: Vec<Category>,
    pub brands: Vec<String>,
    pub price: PriceRange,
    pub availability: Availability,
    pub featured: Option<bool>,
    pub search: Option<String>,
}

impl FilterCriteria {
    pub fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }

        if !self.brands.is_empty() {
            // Unicode-aware, matching how search folds case; brand names are
            // not guaranteed to be ASCII.
            let brand = product.brand.to_lowercase();
            if !self.brands.iter().any(|b| b.to_lowercase() == brand) {
                return false;
            }
        }

        if !self.price.contains(product.price) {
            return false;
        }

        if !self.availability.allows(product) {
            return false;
        }

        if let Some(featured) = self.featured {
            if product.featured != featured {
                return false;
            }
        }

        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            if !product.name.to_lowercase().contains(&term)
                && !product.description.to_lowercase().contains(&term)
            {
                return false;
            }
        }

        true
    }

    /// Returns the matching subset in input order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::tests::demo_products;

    #[test]
    fn empty_criteria_match_everything() {
        let products = demo_products();
        assert_eq!(FilterCriteria::default().apply(&products).len(), products.len());
    }

    #[test]
    fn category_set_is_a_union() {
        let criteria = FilterCriteria {
            categories: vec![Category::Laptops, Category::Tablets],
            ..Default::default()
        };
        let matched = criteria.apply(&demo_products());
        assert_eq!(matched.len(), 4);
        assert!(matched
            .iter()
            .all(|p| matches!(p.category, Category::Laptops | Category::Tablets)));
    }

    #[test]
    fn brand_matching_ignores_case() {
        let criteria = FilterCriteria {
            brands: vec!["Apple".into()],
            ..Default::default()
        };
        let matched = criteria.apply(&demo_products());
        assert_eq!(matched.len(), 4);
        assert!(matched.iter().all(|p| p.brand == "apple"));
    }

    #[test]
    fn brand_matching_handles_non_ascii_case() {
        let mut products = demo_products();
        products[0].brand = "Böse".into();

        let criteria = FilterCriteria {
            brands: vec!["BÖSE".into()],
            ..Default::default()
        };
        let matched = criteria.apply(&products);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].brand, "Böse");
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let criteria = FilterCriteria {
            price: PriceRange { min: 54990.0, max: 99990.0 },
            ..Default::default()
        };
        let matched = criteria.apply(&demo_products());
        let prices: Vec<_> = matched.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![89990.0, 54990.0, 79990.0, 99990.0]);
    }

    #[test]
    fn dimensions_combine_with_and() {
        let criteria = FilterCriteria {
            categories: vec![Category::Smartphones],
            brands: vec!["samsung".into()],
            ..Default::default()
        };
        let matched = criteria.apply(&demo_products());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Samsung Galaxy S24");
    }

    #[test]
    fn availability_splits_the_catalog() {
        let products = demo_products();
        let in_stock = FilterCriteria {
            availability: Availability::InStock,
            ..Default::default()
        };
        let pre_order = FilterCriteria {
            availability: Availability::PreOrder,
            ..Default::default()
        };
        assert_eq!(in_stock.apply(&products).len(), 7);

        let pre = pre_order.apply(&products);
        assert_eq!(pre.len(), 1);
        assert_eq!(pre[0].name, "PlayStation 5");
    }

    #[test]
    fn both_availability_flags_mean_no_constraint() {
        assert_eq!(Availability::from_flags(true, true), Availability::Any);
        assert_eq!(Availability::from_flags(false, false), Availability::Any);
        assert_eq!(Availability::from_flags(true, false), Availability::InStock);
        assert_eq!(Availability::from_flags(false, true), Availability::PreOrder);

        let criteria = FilterCriteria {
            availability: Availability::from_flags(true, true),
            ..Default::default()
        };
        let products = demo_products();
        assert_eq!(criteria.apply(&products).len(), products.len());
    }

    #[test]
    fn search_scans_name_and_description() {
        let criteria = FilterCriteria {
            search: Some("console".into()),
            ..Default::default()
        };
        let matched = criteria.apply(&demo_products());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "PlayStation 5");

        let criteria = FilterCriteria {
            search: Some("PRO".into()),
            ..Default::default()
        };
        // MacBook Pro, iPhone 15 Pro, AirPods Pro 2, iPad Pro + descriptions
        // mentioning professionals.
        assert!(criteria.apply(&demo_products()).len() >= 4);
    }

    #[test]
    fn featured_constraint_applies_only_when_set() {
        let products = demo_products();
        let featured_count = products.iter().filter(|p| p.featured).count();
        let criteria = FilterCriteria {
            featured: Some(true),
            ..Default::default()
        };
        assert_eq!(criteria.apply(&products).len(), featured_count);
    }
}

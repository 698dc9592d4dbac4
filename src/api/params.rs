use serde::Deserialize;
use thiserror::Error;

use crate::domain::Category;
use crate::pipeline::{
    Availability, CatalogQuery, FilterCriteria, PriceRange, SortKey, DEFAULT_PAGE_SIZE,
};

/// Upper bound on `limit`, matching the public API contract.
const MAX_PAGE_SIZE: usize = 100;

/// Raw query-string parameters, exactly as the routing layer hands them over.
///
/// Everything is an optional string; [`TryFrom`] does the parsing so that a
/// caller bug surfaces as a [`ParamError`] instead of a guessed default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawProductQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub in_stock: Option<String>,
    pub featured: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("page must be a positive integer")]
    InvalidPage,
    #[error("limit must be between 1 and {MAX_PAGE_SIZE}")]
    InvalidLimit,
    #[error("{0} must be a non-negative number")]
    InvalidPrice(&'static str),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("{0} must be true or false")]
    InvalidFlag(&'static str),
    #[error("unknown sort key: {0}")]
    UnknownSort(String),
    #[error("sort order must be asc or desc")]
    UnknownOrder,
}

fn parse_flag(value: &str, name: &'static str) -> Result<bool, ParamError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParamError::InvalidFlag(name)),
    }
}

fn parse_price(value: &str, name: &'static str) -> Result<f64, ParamError> {
    let price: f64 = value.parse().map_err(|_| ParamError::InvalidPrice(name))?;
    if !price.is_finite() || price < 0.0 {
        return Err(ParamError::InvalidPrice(name));
    }
    Ok(price)
}

/// Maps the `sort`/`order` pair onto a [`SortKey`]. Accepts both the API
/// vocabulary (`sort=price&order=asc`) and the storefront-select vocabulary
/// (`sort=price-asc`).
fn parse_sort(sort: Option<&str>, order: Option<&str>) -> Result<SortKey, ParamError> {
    let descending = match order {
        None | Some("desc") => true,
        Some("asc") => false,
        Some(_) => return Err(ParamError::UnknownOrder),
    };

    match sort {
        None | Some("popular") | Some("popularity") | Some("rating") => Ok(SortKey::Popularity),
        Some("price") => Ok(if descending { SortKey::PriceDesc } else { SortKey::PriceAsc }),
        Some("price-asc") => Ok(SortKey::PriceAsc),
        Some("price-desc") => Ok(SortKey::PriceDesc),
        Some("name") => Ok(SortKey::Name),
        Some("new") | Some("createdAt") => Ok(SortKey::Newest),
        Some(other) => Err(ParamError::UnknownSort(other.to_string())),
    }
}

impl TryFrom<RawProductQuery> for CatalogQuery {
    type Error = ParamError;

    fn try_from(raw: RawProductQuery) -> Result<Self, ParamError> {
        let page = match raw.page.as_deref() {
            None => 1,
            Some(value) => match value.parse::<usize>() {
                Ok(page) if page >= 1 => page,
                _ => return Err(ParamError::InvalidPage),
            },
        };

        let page_size = match raw.limit.as_deref() {
            None => DEFAULT_PAGE_SIZE,
            Some(value) => match value.parse::<usize>() {
                Ok(limit) if (1..=MAX_PAGE_SIZE).contains(&limit) => limit,
                _ => return Err(ParamError::InvalidLimit),
            },
        };

        let categories = match raw.category.as_deref() {
            None => Vec::new(),
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| {
                    s.parse::<Category>()
                        .map_err(|e| ParamError::UnknownCategory(e.0))
                })
                .collect::<Result<Vec<_>, _>>()?,
        };

        let brands = match raw.brand.as_deref() {
            None => Vec::new(),
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        };

        let mut price = PriceRange::default();
        if let Some(min) = raw.min_price.as_deref() {
            price.min = parse_price(min, "minPrice")?;
        }
        if let Some(max) = raw.max_price.as_deref() {
            price.max = parse_price(max, "maxPrice")?;
        }

        // The original API only acts on inStock=true; an explicit false
        // leaves the constraint off.
        let availability = match raw.in_stock.as_deref() {
            Some(value) if parse_flag(value, "inStock")? => Availability::InStock,
            Some(_) | None => Availability::Any,
        };

        let featured = match raw.featured.as_deref() {
            Some(value) if parse_flag(value, "featured")? => Some(true),
            Some(_) | None => None,
        };

        let search = raw
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let sort = parse_sort(raw.sort.as_deref(), raw.order.as_deref())?;

        Ok(CatalogQuery {
            filters: FilterCriteria {
                categories,
                brands,
                price,
                availability,
                featured,
                search,
            },
            sort,
            page,
            page_size,
        })
    }
}

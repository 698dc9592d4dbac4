use serde::Serialize;

use crate::catalog::CatalogError;
use crate::domain::Product;
use crate::pipeline::{Page, Pagination};

use super::ParamError;

/// The `{success, data, pagination}` envelope of the product listing API.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListBody {
    pub success: bool,
    pub data: Vec<Product>,
    pub pagination: Pagination,
}

impl From<Page> for ProductListBody {
    fn from(page: Page) -> Self {
        Self {
            success: true,
            data: page.items,
            pagination: page.pagination,
        }
    }
}

/// The `{error, message}` envelope used for every failure response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl From<&ParamError> for ErrorBody {
    fn from(e: &ParamError) -> Self {
        Self {
            error: "Validation Error".into(),
            message: e.to_string(),
        }
    }
}

impl From<&CatalogError> for ErrorBody {
    fn from(e: &CatalogError) -> Self {
        let error = match e {
            CatalogError::NotFound(_) => "Product not found",
            CatalogError::InvalidRequest(_) => "Validation Error",
            CatalogError::StoreUnavailable(_) => "Server Error",
        };
        Self {
            error: error.into(),
            message: e.to_string(),
        }
    }
}

use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by [`crate::clients::CatalogClient`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("product not found: {0}")]
    NotFound(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("catalog store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<StoreError> for CatalogError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => CatalogError::NotFound(id),
            StoreError::Invalid(msg) => CatalogError::InvalidRequest(msg),
            e @ (StoreError::Closed | StoreError::Dropped) => {
                CatalogError::StoreUnavailable(e.to_string())
            }
        }
    }
}

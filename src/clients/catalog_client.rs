use tracing::{debug, instrument};

use crate::catalog::CatalogError;
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::pipeline::{CatalogQuery, Page};
use crate::store::StoreClient;

/// Client for the catalog store actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: StoreClient<Product>,
}

impl_basic_client!(CatalogClient, Product, CatalogError, product);

impl CatalogClient {
    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn create_product(&self, payload: ProductCreate) -> Result<String, CatalogError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(CatalogError::from)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_product(
        &self,
        id: String,
        patch: ProductPatch,
    ) -> Result<Product, CatalogError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(CatalogError::from)
    }

    /// Runs the filter/sort/paginate pipeline against the store's current
    /// snapshot.
    #[instrument(skip(self, query), fields(page = query.page, sort = ?query.sort))]
    pub async fn query(&self, query: CatalogQuery) -> Result<Page, CatalogError> {
        debug!("Sending request");
        self.inner.query(query).await.map_err(CatalogError::from)
    }
}

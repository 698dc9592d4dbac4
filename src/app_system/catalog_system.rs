use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use crate::catalog::CatalogError;
use crate::clients::CatalogClient;
use crate::domain::{Category, Product, ProductCreate};
use crate::store::StoreActor;

/// The running catalog system: one store actor plus its client.
///
/// Responsible for starting the actor, seeding data, and shutting down.
pub struct CatalogSystem {
    pub catalog_client: CatalogClient,
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    pub fn new() -> Self {
        let id_counter = Arc::new(AtomicU64::new(1));
        let next_id = move || {
            let id = id_counter.fetch_add(1, Ordering::SeqCst);
            format!("product_{}", id)
        };

        let (actor, store_client) = StoreActor::<Product>::new(32, next_id);
        let catalog_client = CatalogClient::new(store_client);
        let handle = tokio::spawn(actor.run());

        Self { catalog_client, handle }
    }

    /// Starts the system and loads the storefront's demo catalog.
    pub async fn with_demo_catalog() -> Result<Self, CatalogError> {
        let system = Self::new();
        for payload in demo_catalog() {
            system.catalog_client.create_product(payload).await?;
        }
        info!("Demo catalog seeded");
        Ok(system)
    }

    /// Closes the request channel and waits for the actor to drain.
    pub async fn shutdown(self) -> Result<(), CatalogError> {
        info!("Shutting down catalog system");
        let Self { catalog_client, handle } = self;
        drop(catalog_client);

        if let Err(e) = handle.await {
            error!(error = ?e, "Catalog actor task failed");
            return Err(CatalogError::StoreUnavailable(format!(
                "actor task failed: {}",
                e
            )));
        }

        info!("Catalog system shutdown complete");
        Ok(())
    }
}

impl Default for CatalogSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// The storefront's 8-product demo catalog, in its canonical order.
pub fn demo_catalog() -> Vec<ProductCreate> {
    vec![
        ProductCreate {
            name: "MacBook Pro 14\"".into(),
            description: "Powerful laptop for professionals".into(),
            category: Category::Laptops,
            brand: "apple".into(),
            price: 189_990.0,
            old_price: Some(199_990.0),
            in_stock: true,
            is_new: true,
            featured: true,
            rating: 4.9,
        },
        ProductCreate {
            name: "iPhone 15 Pro".into(),
            description: "Apple flagship smartphone".into(),
            category: Category::Smartphones,
            brand: "apple".into(),
            price: 89_990.0,
            old_price: Some(105_990.0),
            in_stock: true,
            is_new: false,
            featured: true,
            rating: 4.8,
        },
        ProductCreate {
            name: "AirPods Pro 2".into(),
            description: "Wireless noise-cancelling earbuds".into(),
            category: Category::Accessories,
            brand: "apple".into(),
            price: 24_990.0,
            old_price: None,
            in_stock: true,
            is_new: false,
            featured: true,
            rating: 4.7,
        },
        ProductCreate {
            name: "PlayStation 5".into(),
            description: "Next-generation gaming console".into(),
            category: Category::Gaming,
            brand: "sony".into(),
            price: 54_990.0,
            old_price: None,
            in_stock: false,
            is_new: false,
            featured: false,
            rating: 4.9,
        },
        ProductCreate {
            name: "Samsung Galaxy S24".into(),
            description: "Flagship Android smartphone".into(),
            category: Category::Smartphones,
            brand: "samsung".into(),
            price: 79_990.0,
            old_price: Some(89_990.0),
            in_stock: true,
            is_new: true,
            featured: false,
            rating: 4.6,
        },
        ProductCreate {
            name: "ASUS ROG Strix".into(),
            description: "Gaming laptop with an RTX 4070".into(),
            category: Category::Laptops,
            brand: "asus".into(),
            price: 129_990.0,
            old_price: None,
            in_stock: true,
            is_new: false,
            featured: false,
            rating: 4.7,
        },
        ProductCreate {
            name: "iPad Pro 12.9\"".into(),
            description: "Powerful tablet for professionals".into(),
            category: Category::Tablets,
            brand: "apple".into(),
            price: 99_990.0,
            old_price: None,
            in_stock: true,
            is_new: false,
            featured: false,
            rating: 4.8,
        },
        ProductCreate {
            name: "Lenovo ThinkPad X1".into(),
            description: "Premium business laptop".into(),
            category: Category::Laptops,
            brand: "lenovo".into(),
            price: 159_990.0,
            old_price: Some(179_990.0),
            in_stock: true,
            is_new: false,
            featured: false,
            rating: 4.6,
        },
    ]
}

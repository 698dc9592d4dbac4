mod api;
mod app_system;
mod catalog;
mod clients;
mod domain;
mod pipeline;
mod store;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;

use tracing::{info, warn, Instrument};

use crate::api::{ErrorBody, ProductListBody, RawProductQuery};
use crate::app_system::{setup_tracing, CatalogSystem};
use crate::domain::Category;
use crate::pipeline::{Availability, CatalogQuery, FilterCriteria, PriceRange, SortKey};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting storefront catalog");

    let system = CatalogSystem::with_demo_catalog().await?;
    let client = system.catalog_client.clone();

    let span = tracing::info_span!("default_browse");
    async {
        info!("Running the default popularity query");
        let page = client.query(CatalogQuery::default()).await?;
        info!(
            items = page.items.len(),
            total_pages = page.pagination.total_pages,
            "First page served"
        );
        if let Some(top) = page.items.first() {
            info!(name = %top.name, rating = top.rating, "Highest rated product");
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("filtered_browse");
    async {
        info!("Querying laptops under 160000, cheapest first");
        let query = CatalogQuery {
            filters: FilterCriteria {
                categories: vec![Category::Laptops],
                price: PriceRange { min: 0.0, max: 160_000.0 },
                availability: Availability::from_flags(true, false),
                ..Default::default()
            },
            sort: SortKey::PriceAsc,
            ..Default::default()
        };
        let page = client.query(query).await?;
        for product in &page.items {
            match product.discount_percentage() {
                Some(discount) => {
                    info!(name = %product.name, price = product.price, discount, "Match")
                }
                None => info!(name = %product.name, price = product.price, "Match"),
            }
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("search_browse");
    async {
        info!("Searching for \"pro\"");
        let query = CatalogQuery {
            filters: FilterCriteria {
                search: Some("pro".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let page = client.query(query).await?;
        info!(matches = page.pagination.total_items, "Search complete");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("overflow_browse");
    async {
        info!("Requesting a page past the end to demonstrate clamping");
        let query = CatalogQuery { page: 99, ..Default::default() };
        let page = client.query(query).await?;
        info!(
            served_page = page.pagination.current_page,
            total_pages = page.pagination.total_pages,
            "Clamped to the last valid page"
        );
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("api_listing");
    async {
        info!("Serving GET /api/products?category=smartphones&sort=price&order=asc");
        let raw = RawProductQuery {
            category: Some("smartphones".into()),
            sort: Some("price".into()),
            order: Some("asc".into()),
            ..Default::default()
        };
        let query = CatalogQuery::try_from(raw)?;
        let page = client.query(query).await?;
        let body = serde_json::to_string(&ProductListBody::from(page))?;
        info!(body = %body, "Response envelope");

        let bad = RawProductQuery { page: Some("0".into()), ..Default::default() };
        if let Err(e) = CatalogQuery::try_from(bad) {
            let body = serde_json::to_string(&ErrorBody::from(&e))?;
            warn!(body = %body, "Rejected request");
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    drop(client);
    system.shutdown().await?;

    info!("Storefront catalog demo complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::app_system::CatalogSystem;
    use crate::catalog::CatalogError;
    use crate::domain::{Category, ProductCreate, ProductPatch};
    use crate::pipeline::{Availability, CatalogQuery, FilterCriteria, SortKey};

    #[tokio::test]
    async fn demo_catalog_answers_the_default_query() {
        let system = CatalogSystem::with_demo_catalog().await.unwrap();

        let page = system.catalog_client.query(CatalogQuery::default()).await.unwrap();
        assert_eq!(page.items.len(), 8);
        assert_eq!(page.pagination.total_pages, 1);
        // Popularity default: best-rated first, catalog order on ties.
        assert_eq!(page.items[0].name, "MacBook Pro 14\"");
        assert_eq!(page.items[1].name, "PlayStation 5");

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn filtered_sorted_query_through_the_actor() {
        let system = CatalogSystem::with_demo_catalog().await.unwrap();

        let query = CatalogQuery {
            filters: FilterCriteria {
                categories: vec![Category::Laptops],
                availability: Availability::InStock,
                ..Default::default()
            },
            sort: SortKey::PriceAsc,
            ..Default::default()
        };
        let page = system.catalog_client.query(query).await.unwrap();

        let names: Vec<_> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["ASUS ROG Strix", "Lenovo ThinkPad X1", "MacBook Pro 14\""]
        );

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn created_products_are_queryable_and_deletable() {
        let system = CatalogSystem::with_demo_catalog().await.unwrap();
        let client = &system.catalog_client;

        let id = client
            .create_product(ProductCreate {
                name: "Nintendo Switch".into(),
                description: "Hybrid handheld gaming console".into(),
                category: Category::Gaming,
                brand: "nintendo".into(),
                price: 29_990.0,
                old_price: None,
                in_stock: true,
                is_new: true,
                featured: false,
                rating: 4.5,
            })
            .await
            .unwrap();
        assert_eq!(id, "product_9");

        let gaming = CatalogQuery {
            filters: FilterCriteria {
                categories: vec![Category::Gaming],
                ..Default::default()
            },
            ..Default::default()
        };
        let page = client.query(gaming.clone()).await.unwrap();
        assert_eq!(page.pagination.total_items, 2);

        let updated = client
            .update_product(id.clone(), ProductPatch { price: Some(27_990.0), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(updated.price, 27_990.0);

        client.delete_product(id.clone()).await.unwrap();
        assert_eq!(client.get_product(id).await.unwrap(), None);

        let page = client.query(gaming).await.unwrap();
        assert_eq!(page.pagination.total_items, 1);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn invalid_query_surfaces_as_invalid_request() {
        let system = CatalogSystem::with_demo_catalog().await.unwrap();

        let err = system
            .catalog_client
            .query(CatalogQuery { page: 0, ..Default::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRequest(_)));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn overflow_page_clamps_through_the_actor() {
        let system = CatalogSystem::with_demo_catalog().await.unwrap();

        let base = CatalogQuery {
            filters: FilterCriteria {
                brands: vec!["apple".into()],
                ..Default::default()
            },
            page_size: 3,
            ..Default::default()
        };
        let last = system
            .catalog_client
            .query(CatalogQuery { page: 2, ..base.clone() })
            .await
            .unwrap();
        let clamped = system
            .catalog_client
            .query(CatalogQuery { page: 50, ..base })
            .await
            .unwrap();

        assert_eq!(clamped, last);
        assert_eq!(clamped.pagination.current_page, 2);

        system.shutdown().await.unwrap();
    }
}

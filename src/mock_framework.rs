//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_query`] to assert behavior.

use tokio::sync::mpsc;

use crate::store::{Entity, StoreClient, StoreError, StoreRequest};

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit tests we don't want to spin up a full `StoreActor` if we are just
/// testing the *client* logic. Instead we create a "mock client" that sends
/// messages to a channel we control. The test inspects the messages arriving
/// on that channel and plays the actor's side of the conversation
/// deterministically.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::from_sender(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::CreatePayload,
    tokio::sync::oneshot::Sender<Result<T::Id, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a collection Query request
pub async fn expect_query<T: Entity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Query,
    tokio::sync::oneshot::Sender<Result<T::QueryResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::CatalogClient;
    use crate::domain::Product;
    use crate::pipeline::{paginate, CatalogQuery, SortKey};

    #[tokio::test]
    async fn mock_client_round_trips_a_query() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = CatalogClient::new(inner);

        let query_task = tokio::spawn(async move {
            let query = CatalogQuery {
                sort: SortKey::PriceAsc,
                ..Default::default()
            };
            client.query(query).await
        });

        let (query, responder) = expect_query(&mut receiver).await.expect("Expected Query request");
        assert_eq!(query.sort, SortKey::PriceAsc);
        assert_eq!(query.page, 1);

        let empty = paginate(Vec::new(), 1, query.page_size).unwrap();
        responder.send(Ok(empty.clone())).unwrap();

        let result = query_task.await.unwrap();
        assert_eq!(result, Ok(empty));
    }

    #[tokio::test]
    async fn mock_client_round_trips_create_and_get() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = CatalogClient::new(inner);

        let create_task = tokio::spawn({
            let client = client.clone();
            async move {
                let payload = crate::app_system::demo_catalog().remove(0);
                client.create_product(payload).await
            }
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "MacBook Pro 14\"");
        responder.send(Ok("product_1".to_string())).unwrap();
        assert_eq!(create_task.await.unwrap(), Ok("product_1".to_string()));

        let get_task = tokio::spawn(async move { client.get_product("product_1".into()).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "product_1");
        responder.send(Ok(None)).unwrap();
        assert_eq!(get_task.await.unwrap(), Ok(None));
    }

    #[tokio::test]
    async fn mock_client_reports_store_unavailable_when_dropped() {
        let (inner, receiver) = create_mock_client::<Product>(10);
        let client = CatalogClient::new(inner);
        drop(receiver);

        let err = client.query(CatalogQuery::default()).await.unwrap_err();
        assert!(matches!(err, crate::catalog::CatalogError::StoreUnavailable(_)));
    }
}

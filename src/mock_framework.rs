//! # Mock Framework
//!
//! Utilities for testing clients and checkout without a running actor.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_get`] to assert behavior
//! and answer on the actor's behalf.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

type Reply<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// Whatever the code under test sends arrives on the receiver, and the test
/// decides the answer (success, failure, or silence).
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, Reply<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Reply<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Reply<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Asserts that nothing has been sent to the actor so far.
pub fn assert_no_requests<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) {
    assert!(
        matches!(receiver.try_recv(), Err(mpsc::error::TryRecvError::Empty)),
        "expected no requests to reach the actor"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ProductClient;
    use crate::domain::{Money, Product, ProductCreate};

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);
        assert_no_requests(&mut receiver);

        let create_task = tokio::spawn(async move {
            let params = ProductCreate {
                name: "Test".to_string(),
                price: Money::from_paise(29900),
                description: String::new(),
                scent: String::new(),
                photo_url: String::new(),
            };
            client.create_product(params).await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Test");
        responder.send(Ok(1)).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(1));
    }

    #[tokio::test]
    async fn test_reads_are_normalized() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let get_task = tokio::spawn(async move { client.get_product(4).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, 4);
        responder
            .send(Ok(Some(Product::new(4, "Legacy", Money::from_paise(250)))))
            .unwrap();

        let product = get_task.await.unwrap().unwrap().unwrap();
        assert_eq!(product.price, Money::from_paise(25000));
    }

    #[tokio::test]
    async fn test_in_stock_filter_over_list() {
        let (inner, mut receiver) = create_mock_client::<Product>(10);
        let client = ProductClient::new(inner);

        let list_task = tokio::spawn(async move { client.get_in_stock_products().await });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        let mut sold_out = Product::new(2, "Sold Out", Money::from_paise(19900));
        sold_out.in_stock = false;
        responder
            .send(Ok(vec![Product::new(1, "Rose", Money::from_paise(29900)), sold_out]))
            .unwrap();

        let products = list_task.await.unwrap().unwrap();
        assert_eq!(products.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1]);
    }
}

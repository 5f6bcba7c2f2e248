//! Workflow tests with a real store actor and a hand-scripted validation
//! channel. Isolating the catalog this way makes the upstream failure
//! modes — silence, a dead transport, garbage payloads, partial coverage —
//! trivial to inject, and lets each test verify that a failed creation
//! leaves the store untouched.

use std::time::Duration;

use rust_decimal_macros::dec;
use serde_json::json;

use orders_messaging::mock::{mock_mailbox, silent_mailbox, unreachable_mailbox};
use orders_messaging::{Mailbox, MessageActor};
use orders_service::catalog::{CatalogRequest, ProductValidator};
use orders_service::dto::{CreateOrder, NewOrderItem};
use orders_service::error::OrderError;
use orders_service::repository::{OrderRepository, OrderStore};
use orders_service::service::OrderService;

const WINDOW: Duration = Duration::from_secs(1);

/// Spawns a real store actor and returns a repository handle for it.
fn spawn_store() -> OrderRepository {
    let (actor, mailbox) = MessageActor::new(OrderStore::default(), 16);
    tokio::spawn(actor.run());
    OrderRepository::new(mailbox, WINDOW)
}

fn service_with(catalog_mailbox: Mailbox<CatalogRequest>, window: Duration) -> (OrderService, OrderRepository) {
    let repo = spawn_store();
    let service = OrderService::new(ProductValidator::new(catalog_mailbox, window), repo.clone());
    (service, repo)
}

fn two_item_request() -> CreateOrder {
    CreateOrder {
        items: vec![
            NewOrderItem {
                product_id: "p1".into(),
                price: dec!(10),
                quantity: 2,
            },
            NewOrderItem {
                product_id: "p2".into(),
                price: dec!(5),
                quantity: 1,
            },
        ],
    }
}

#[tokio::test]
async fn create_computes_totals_from_submitted_prices() {
    let (catalog_mailbox, mut requests) = mock_mailbox(8);
    let (service, _repo) = service_with(catalog_mailbox, WINDOW);

    let call = tokio::spawn(async move { service.create(two_item_request()).await });

    let CatalogRequest::Validate {
        product_ids,
        reply_to,
    } = requests.recv().await.expect("validate request");
    assert_eq!(product_ids, vec!["p1".to_string(), "p2".to_string()]);

    // Catalog reports different live prices; totals must not use them.
    reply_to
        .send(json!([
            {"id": "p1", "name": "Widget", "price": 99.0},
            {"id": "p2", "name": "Gadget", "price": 99.0},
        ]))
        .unwrap();

    let order = call.await.unwrap().expect("order created");
    assert_eq!(order.total_amount, dec!(25));
    assert_eq!(order.total_items, 3);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].name, "Widget");
    assert_eq!(order.items[0].price, dec!(10));
    assert_eq!(order.items[1].name, "Gadget");
}

#[tokio::test]
async fn validation_timeout_leaves_no_order_behind() {
    let (catalog_mailbox, _holder) = silent_mailbox(8);
    let (service, repo) = service_with(catalog_mailbox, Duration::from_millis(30));

    let err = service.create(two_item_request()).await.unwrap_err();
    assert!(matches!(err, OrderError::UpstreamTimeout(_)), "{err}");

    assert_eq!(repo.count(None).await.unwrap(), 0);
}

#[tokio::test]
async fn unreachable_catalog_aborts_creation() {
    let (service, repo) = service_with(unreachable_mailbox(), WINDOW);

    let err = service.create(two_item_request()).await.unwrap_err();
    assert!(matches!(err, OrderError::UpstreamUnavailable), "{err}");

    assert_eq!(repo.count(None).await.unwrap(), 0);
}

#[tokio::test]
async fn malformed_reply_aborts_creation() {
    let (catalog_mailbox, mut requests) = mock_mailbox(8);
    let (service, repo) = service_with(catalog_mailbox, WINDOW);

    let call = tokio::spawn(async move { service.create(two_item_request()).await });

    let CatalogRequest::Validate { reply_to, .. } = requests.recv().await.unwrap();
    reply_to.send(json!({"message": "oops"})).unwrap();

    let err = call.await.unwrap().unwrap_err();
    assert!(matches!(err, OrderError::UpstreamMalformedReply(_)), "{err}");

    assert_eq!(repo.count(None).await.unwrap(), 0);
}

#[tokio::test]
async fn reply_missing_a_submitted_id_rejects_the_whole_order() {
    let (catalog_mailbox, mut requests) = mock_mailbox(8);
    let (service, repo) = service_with(catalog_mailbox, WINDOW);

    let call = tokio::spawn(async move { service.create(two_item_request()).await });

    let CatalogRequest::Validate { reply_to, .. } = requests.recv().await.unwrap();
    // Only p1 is recognized; p2 is silently absent from the reply.
    reply_to
        .send(json!([{"id": "p1", "name": "Widget", "price": 10.0}]))
        .unwrap();

    let err = call.await.unwrap().unwrap_err();
    match err {
        OrderError::ProductNotFound(id) => assert_eq!(id, "p2"),
        other => panic!("expected ProductNotFound, got {other}"),
    }

    // The orphaned line was not dropped and nothing was persisted.
    assert_eq!(repo.count(None).await.unwrap(), 0);
}

#[tokio::test]
async fn empty_item_list_is_rejected_before_any_round_trip() {
    let (catalog_mailbox, mut requests) = mock_mailbox(8);
    let (service, _repo) = service_with(catalog_mailbox, WINDOW);

    let err = service
        .create(CreateOrder { items: vec![] })
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)), "{err}");
    assert_eq!(err.status(), 400);

    // The validation channel was never touched.
    assert!(requests.try_recv().is_err());
}

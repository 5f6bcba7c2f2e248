//! Full end-to-end tests: real catalog directory, real store actor, real
//! workflow, graceful shutdown.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use orders_service::dto::{ChangeOrderStatus, CreateOrder, NewOrderItem, OrderPagination};
use orders_service::error::OrderError;
use orders_service::lifecycle::{OrderSystem, SystemConfig};
use orders_service::model::{OrderId, OrderStatus, ProductRecord};

fn product(id: &str, name: &str, price: Decimal) -> ProductRecord {
    ProductRecord {
        id: id.into(),
        name: name.into(),
        price,
    }
}

fn seeded_system() -> OrderSystem {
    OrderSystem::start_with_catalog(
        SystemConfig::default(),
        vec![
            // Live catalog prices deliberately differ from submitted ones.
            product("p1", "Widget", dec!(99.99)),
            product("p2", "Gadget", dec!(42.00)),
        ],
    )
}

fn order_request(items: &[(&str, Decimal, u32)]) -> CreateOrder {
    CreateOrder {
        items: items
            .iter()
            .map(|(product_id, price, quantity)| NewOrderItem {
                product_id: product_id.to_string(),
                price: *price,
                quantity: *quantity,
            })
            .collect(),
    }
}

#[tokio::test]
async fn create_then_fetch_round_trip() {
    let system = seeded_system();

    let created = system
        .orders
        .create(order_request(&[("p1", dec!(10), 2), ("p2", dec!(5), 1)]))
        .await
        .expect("create");
    assert_eq!(created.total_amount, dec!(25));
    assert_eq!(created.total_items, 3);
    assert_eq!(created.status, OrderStatus::Pending);

    let fetched = system.orders.find_one(created.id).await.expect("find_one");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.total_amount, dec!(25));
    assert_eq!(fetched.items.len(), 2);

    // Names come from the live catalog; prices stay frozen at order time.
    let widget = fetched
        .items
        .iter()
        .find(|item| item.product_id == "p1")
        .unwrap();
    assert_eq!(widget.name, "Widget");
    assert_eq!(widget.price, dec!(10));
    assert_eq!(widget.quantity, 2);
    let gadget = fetched
        .items
        .iter()
        .find(|item| item.product_id == "p2")
        .unwrap();
    assert_eq!(gadget.name, "Gadget");
    assert_eq!(gadget.price, dec!(5));

    system.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn unknown_order_id_is_not_found_with_404() {
    let system = seeded_system();

    let err = system.orders.find_one(OrderId::new()).await.unwrap_err();
    assert!(matches!(err, OrderError::NotFound(_)), "{err}");
    assert_eq!(err.status(), 404);

    system.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn listing_pages_through_all_orders() {
    let system = seeded_system();

    for _ in 0..25 {
        system
            .orders
            .create(order_request(&[("p1", dec!(10), 1)]))
            .await
            .expect("create");
    }

    let page3 = system
        .orders
        .find_all(OrderPagination {
            status: None,
            page: 3,
            limit: 10,
        })
        .await
        .expect("find_all");
    assert_eq!(page3.data.len(), 5);
    assert_eq!(page3.meta.total, 25);
    assert_eq!(page3.meta.total_pages, 3);
    assert_eq!(page3.meta.page, 3);

    // The list shape carries plain orders, items included but unenriched.
    assert!(page3.data.iter().all(|order| order.items.len() == 1));

    system.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn listing_filters_by_status() {
    let system = seeded_system();

    let mut ids = Vec::new();
    for _ in 0..6 {
        let created = system
            .orders
            .create(order_request(&[("p1", dec!(10), 1)]))
            .await
            .expect("create");
        ids.push(created.id);
    }
    for id in ids.iter().take(2) {
        system
            .orders
            .change_status(ChangeOrderStatus {
                id: *id,
                status: OrderStatus::Cancelled,
            })
            .await
            .expect("change_status");
    }

    let cancelled = system
        .orders
        .find_all(OrderPagination::with_status(OrderStatus::Cancelled))
        .await
        .expect("find_all");
    assert_eq!(cancelled.meta.total, 2);
    assert!(cancelled
        .data
        .iter()
        .all(|order| order.status == OrderStatus::Cancelled));

    let pending = system
        .orders
        .find_all(OrderPagination::with_status(OrderStatus::Pending))
        .await
        .expect("find_all");
    assert_eq!(pending.meta.total, 4);

    system.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn same_status_change_is_an_idempotent_noop() {
    let system = seeded_system();

    let created = system
        .orders
        .create(order_request(&[("p1", dec!(10), 1)]))
        .await
        .expect("create");

    let unchanged = system
        .orders
        .change_status(ChangeOrderStatus {
            id: created.id,
            status: OrderStatus::Pending,
        })
        .await
        .expect("change_status");
    assert_eq!(unchanged.id, created.id);
    assert_eq!(unchanged.status, OrderStatus::Pending);
    assert_eq!(unchanged.created_at, created.created_at);

    system.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn status_change_is_persisted_and_visible() {
    let system = seeded_system();

    let created = system
        .orders
        .create(order_request(&[("p1", dec!(10), 1)]))
        .await
        .expect("create");

    let delivered = system
        .orders
        .change_status(ChangeOrderStatus {
            id: created.id,
            status: OrderStatus::Delivered,
        })
        .await
        .expect("change_status");
    assert_eq!(delivered.status, OrderStatus::Delivered);

    let fetched = system.orders.find_one(created.id).await.expect("find_one");
    assert_eq!(fetched.status, OrderStatus::Delivered);

    system.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn status_change_on_unknown_order_is_not_found() {
    let system = seeded_system();

    let err = system
        .orders
        .change_status(ChangeOrderStatus {
            id: OrderId::new(),
            status: OrderStatus::Delivered,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::NotFound(_)), "{err}");
    assert_eq!(err.status(), 404);

    system.shutdown().await.expect("shutdown");
}

#[tokio::test]
async fn concurrent_creates_proceed_independently() {
    let system = seeded_system();

    let mut handles = Vec::new();
    for _ in 0..10 {
        let orders = system.orders.clone();
        handles.push(tokio::spawn(async move {
            orders
                .create(order_request(&[("p1", dec!(10), 2), ("p2", dec!(5), 1)]))
                .await
        }));
    }

    for handle in handles {
        let order = handle.await.unwrap().expect("create");
        assert_eq!(order.total_amount, dec!(25));
    }

    let page = system
        .orders
        .find_all(OrderPagination::default())
        .await
        .expect("find_all");
    assert_eq!(page.meta.total, 10);

    system.shutdown().await.expect("shutdown");
}

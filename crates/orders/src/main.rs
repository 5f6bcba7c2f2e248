//! Demo: starts the order system against a seeded in-process catalog and
//! walks through the full workflow — create, list, fetch enriched, change
//! status — before shutting down.
//!
//! ```bash
//! RUST_LOG=info cargo run -p orders-service
//! RUST_LOG=debug cargo run -p orders-service   # full payloads
//! ```

use rust_decimal::Decimal;
use tracing::info;

use orders_messaging::setup_tracing;
use orders_service::dto::{ChangeOrderStatus, CreateOrder, NewOrderItem, OrderPagination};
use orders_service::lifecycle::{OrderSystem, SystemConfig};
use orders_service::model::{OrderStatus, ProductRecord};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();
    info!("Starting order system demo");

    let catalog = vec![
        ProductRecord {
            id: "prod-widget".into(),
            name: "Widget".into(),
            price: Decimal::new(1000, 2),
        },
        ProductRecord {
            id: "prod-gadget".into(),
            name: "Gadget".into(),
            price: Decimal::new(550, 2),
        },
    ];
    let system = OrderSystem::start_with_catalog(SystemConfig::default(), catalog);

    let created = system
        .orders
        .create(CreateOrder {
            items: vec![
                NewOrderItem {
                    product_id: "prod-widget".into(),
                    price: Decimal::new(1000, 2),
                    quantity: 2,
                },
                NewOrderItem {
                    product_id: "prod-gadget".into(),
                    price: Decimal::new(500, 2),
                    quantity: 1,
                },
            ],
        })
        .await?;
    info!(
        order_id = %created.id,
        total_amount = %created.total_amount,
        total_items = created.total_items,
        "Order created"
    );

    let page = system.orders.find_all(OrderPagination::default()).await?;
    info!(total = page.meta.total, pages = page.meta.total_pages, "Listed orders");

    let fetched = system.orders.find_one(created.id).await?;
    for item in &fetched.items {
        info!(product = %item.name, price = %item.price, quantity = item.quantity, "Line item");
    }

    // Same-status change is a no-op; the second call persists a real change.
    system
        .orders
        .change_status(ChangeOrderStatus {
            id: created.id,
            status: OrderStatus::Pending,
        })
        .await?;
    let delivered = system
        .orders
        .change_status(ChangeOrderStatus {
            id: created.id,
            status: OrderStatus::Delivered,
        })
        .await?;
    info!(order_id = %delivered.id, status = %delivered.status, "Status changed");

    system.shutdown().await?;
    Ok(())
}

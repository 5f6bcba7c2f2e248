//! The order aggregate and its read model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::status::OrderStatus;

/// Type-safe, server-generated order identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrderId(pub Uuid);

impl OrderId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for OrderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Type-safe identifier for a single order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemId(pub Uuid);

impl OrderItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OrderItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One line of an order.
///
/// `product_id` references an entity owned by the external catalog; there
/// is no local product table to join against. `price` is a snapshot taken
/// at order time and never re-read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub product_id: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// A persisted purchase record with aggregated totals and a status.
///
/// Invariants, established at creation and never recomputed:
/// `total_amount = Σ price × quantity` and `total_items = Σ quantity` over
/// the line items. Items are immutable after creation; only `status`
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub total_items: u32,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

/// Order line annotated with the product's current catalog name.
///
/// The name is resolved at read time, not stored — repeated reads may show
/// a different name if the catalog renames the product, while the price
/// stays frozen at order time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedItem {
    pub product_id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Read model: an order whose items were joined against the live catalog.
/// Composed per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedOrder {
    pub id: OrderId,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub total_items: u32,
    pub created_at: DateTime<Utc>,
    pub items: Vec<EnrichedItem>,
}

impl EnrichedOrder {
    /// Builds the read model from a persisted order and its resolved items.
    pub fn new(order: Order, items: Vec<EnrichedItem>) -> Self {
        Self {
            id: order.id,
            status: order.status,
            total_amount: order.total_amount,
            total_items: order.total_items,
            created_at: order.created_at,
            items,
        }
    }
}

/// One page of orders plus the metadata the list endpoint returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPage {
    pub data: Vec<Order>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub total: u64,
    pub total_pages: u64,
    pub page: u32,
}

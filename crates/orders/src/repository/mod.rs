//! The persistence boundary for orders.
//!
//! The store runs as its own actor: state is owned exclusively by the
//! actor task and messages are applied one at a time, so an order row and
//! its line rows always land together — a half-written order is never
//! observable from outside, and concurrent mutations to the same order
//! serialize naturally (last writer wins).
//!
//! The store is injected and owned by the [`lifecycle`](crate::lifecycle)
//! orchestrator — opened at startup, closed when the last repository handle
//! is dropped — rather than living in ambient global state.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use orders_messaging::{Mailbox, MessageHandler, ReplyTo};

use crate::dto::NewOrderItem;
use crate::error::OrderError;
use crate::model::{Order, OrderId, OrderItem, OrderItemId, OrderStatus};

/// Messages understood by the order store actor.
///
/// Each variant is one repository operation carrying its own typed reply
/// envelope. Lookups answer `None` for an unknown id; the client maps that
/// to [`OrderError::NotFound`].
#[derive(Debug)]
pub enum StoreRequest {
    CreateWithItems {
        items: Vec<NewOrderItem>,
        total_amount: Decimal,
        total_items: u32,
        reply_to: ReplyTo<Order>,
    },
    Count {
        status: Option<OrderStatus>,
        reply_to: ReplyTo<u64>,
    },
    FindPage {
        status: Option<OrderStatus>,
        page: u32,
        per_page: u32,
        reply_to: ReplyTo<Vec<Order>>,
    },
    FindById {
        id: OrderId,
        reply_to: ReplyTo<Option<Order>>,
    },
    /// Status-only read, for transition checks that don't need the items.
    StatusOf {
        id: OrderId,
        reply_to: ReplyTo<Option<OrderStatus>>,
    },
    UpdateStatus {
        id: OrderId,
        status: OrderStatus,
        reply_to: ReplyTo<Option<Order>>,
    },
}

/// The order table, exclusively owned by its actor task.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: HashMap<OrderId, Order>,
}

impl OrderStore {
    fn matches(order: &Order, status: Option<OrderStatus>) -> bool {
        status.map_or(true, |wanted| order.status == wanted)
    }

    /// One page of orders under the deterministic sort key
    /// `(created_at, id)`, so paging stays stable and reproducible even as
    /// rows are inserted between reads.
    fn page(&self, status: Option<OrderStatus>, page: u32, per_page: u32) -> Vec<Order> {
        let mut rows: Vec<&Order> = self
            .orders
            .values()
            .filter(|order| Self::matches(order, status))
            .collect();
        rows.sort_by_key(|order| (order.created_at, order.id));
        let offset = (page.saturating_sub(1) as usize).saturating_mul(per_page as usize);
        rows.into_iter()
            .skip(offset)
            .take(per_page as usize)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl MessageHandler for OrderStore {
    type Message = StoreRequest;

    async fn handle(&mut self, msg: StoreRequest) {
        match msg {
            StoreRequest::CreateWithItems {
                items,
                total_amount,
                total_items,
                reply_to,
            } => {
                let order = Order {
                    id: OrderId::new(),
                    status: OrderStatus::default(),
                    total_amount,
                    total_items,
                    created_at: Utc::now(),
                    items: items
                        .into_iter()
                        .map(|item| OrderItem {
                            id: OrderItemId::new(),
                            product_id: item.product_id,
                            price: item.price,
                            quantity: item.quantity,
                        })
                        .collect(),
                };
                info!(
                    order_id = %order.id,
                    items = order.items.len(),
                    size = self.orders.len() + 1,
                    "Created"
                );
                self.orders.insert(order.id, order.clone());
                let _ = reply_to.send(order);
            }
            StoreRequest::Count { status, reply_to } => {
                let total = self
                    .orders
                    .values()
                    .filter(|order| Self::matches(order, status))
                    .count() as u64;
                debug!(?status, total, "Count");
                let _ = reply_to.send(total);
            }
            StoreRequest::FindPage {
                status,
                page,
                per_page,
                reply_to,
            } => {
                let rows = self.page(status, page, per_page);
                debug!(?status, page, per_page, rows = rows.len(), "FindPage");
                let _ = reply_to.send(rows);
            }
            StoreRequest::FindById { id, reply_to } => {
                let order = self.orders.get(&id).cloned();
                debug!(%id, found = order.is_some(), "Get");
                let _ = reply_to.send(order);
            }
            StoreRequest::StatusOf { id, reply_to } => {
                let status = self.orders.get(&id).map(|order| order.status);
                debug!(%id, found = status.is_some(), "StatusOf");
                let _ = reply_to.send(status);
            }
            StoreRequest::UpdateStatus {
                id,
                status,
                reply_to,
            } => match self.orders.get_mut(&id) {
                Some(order) => {
                    order.status = status;
                    info!(%id, %status, "Status updated");
                    let _ = reply_to.send(Some(order.clone()));
                }
                None => {
                    warn!(%id, "Not found");
                    let _ = reply_to.send(None);
                }
            },
        }
    }
}

/// Client wrapper around the order store actor.
///
/// Cheap to clone; every method is one request/reply exchange. Channel
/// failures — the store actor being gone or unresponsive — surface as
/// [`OrderError::StorageUnavailable`].
#[derive(Clone)]
pub struct OrderRepository {
    mailbox: Mailbox<StoreRequest>,
    window: Duration,
}

impl OrderRepository {
    pub fn new(mailbox: Mailbox<StoreRequest>, window: Duration) -> Self {
        Self { mailbox, window }
    }

    /// Persists an order and all of its line items atomically.
    ///
    /// Ids and the creation timestamp are assigned by the store. The
    /// returned items carry price, quantity, and product id — product
    /// names are not stored and must be joined in by the caller.
    #[instrument(skip(self, items))]
    pub async fn create_with_items(
        &self,
        items: Vec<NewOrderItem>,
        total_amount: Decimal,
        total_items: u32,
    ) -> Result<Order, OrderError> {
        self.mailbox
            .request(self.window, |reply_to| StoreRequest::CreateWithItems {
                items,
                total_amount,
                total_items,
                reply_to,
            })
            .await
            .map_err(|_| OrderError::StorageUnavailable)
    }

    #[instrument(skip(self))]
    pub async fn count(&self, status: Option<OrderStatus>) -> Result<u64, OrderError> {
        self.mailbox
            .request(self.window, |reply_to| StoreRequest::Count {
                status,
                reply_to,
            })
            .await
            .map_err(|_| OrderError::StorageUnavailable)
    }

    #[instrument(skip(self))]
    pub async fn find_page(
        &self,
        status: Option<OrderStatus>,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Order>, OrderError> {
        self.mailbox
            .request(self.window, |reply_to| StoreRequest::FindPage {
                status,
                page,
                per_page,
                reply_to,
            })
            .await
            .map_err(|_| OrderError::StorageUnavailable)
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: OrderId) -> Result<Order, OrderError> {
        self.mailbox
            .request(self.window, |reply_to| StoreRequest::FindById {
                id,
                reply_to,
            })
            .await
            .map_err(|_| OrderError::StorageUnavailable)?
            .ok_or(OrderError::NotFound(id))
    }

    /// The cheap status-only read used by transition checks.
    #[instrument(skip(self))]
    pub async fn status_of(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        self.mailbox
            .request(self.window, |reply_to| StoreRequest::StatusOf {
                id,
                reply_to,
            })
            .await
            .map_err(|_| OrderError::StorageUnavailable)?
            .ok_or(OrderError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        self.mailbox
            .request(self.window, |reply_to| StoreRequest::UpdateStatus {
                id,
                status,
                reply_to,
            })
            .await
            .map_err(|_| OrderError::StorageUnavailable)?
            .ok_or(OrderError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone};
    use rust_decimal_macros::dec;

    fn order_created_at(seconds: i64, status: OrderStatus) -> Order {
        Order {
            id: OrderId::new(),
            status,
            total_amount: dec!(10),
            total_items: 1,
            created_at: Utc.timestamp_opt(seconds, 0).unwrap(),
            items: Vec::new(),
        }
    }

    fn store_with(orders: Vec<Order>) -> OrderStore {
        OrderStore {
            orders: orders.into_iter().map(|order| (order.id, order)).collect(),
        }
    }

    #[test]
    fn pages_use_a_deterministic_sort_key() {
        let orders: Vec<Order> = (0..25)
            .map(|n| order_created_at(1_000 + n, OrderStatus::Pending))
            .collect();
        let timestamps: Vec<DateTime<Utc>> =
            orders.iter().map(|order| order.created_at).collect();
        let store = store_with(orders);

        let page3 = store.page(None, 3, 10);
        assert_eq!(page3.len(), 5);
        assert_eq!(
            page3.iter().map(|o| o.created_at).collect::<Vec<_>>(),
            timestamps[20..25]
        );

        // Re-reading the same page yields the same rows in the same order.
        assert_eq!(store.page(None, 3, 10), page3);
    }

    #[test]
    fn page_beyond_the_end_is_empty() {
        let store = store_with(vec![order_created_at(1, OrderStatus::Pending)]);
        assert!(store.page(None, 4, 10).is_empty());
    }

    #[test]
    fn equal_timestamps_fall_back_to_the_id() {
        let a = order_created_at(7, OrderStatus::Pending);
        let b = order_created_at(7, OrderStatus::Pending);
        let expected_first = a.id.min(b.id);
        let store = store_with(vec![a, b]);

        let rows = store.page(None, 1, 10);
        assert_eq!(rows[0].id, expected_first);
    }

    #[test]
    fn status_filter_applies_to_pages() {
        let store = store_with(vec![
            order_created_at(1, OrderStatus::Pending),
            order_created_at(2, OrderStatus::Delivered),
            order_created_at(3, OrderStatus::Pending),
        ]);
        let delivered = store.page(Some(OrderStatus::Delivered), 1, 10);
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].status, OrderStatus::Delivered);
    }
}

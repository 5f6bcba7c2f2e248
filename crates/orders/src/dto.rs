//! Inbound payloads and their transport-side validation.
//!
//! The workflow assumes well-typed input; these `validate` methods are the
//! checks the transport layer runs before a request reaches the core, so a
//! malformed payload never produces a partially-created order.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::OrderError;
use crate::model::{OrderId, OrderStatus};

/// One requested order line: the externally-owned product id, the price
/// the client observed, and the quantity.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrderItem {
    pub product_id: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Payload for creating an order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub items: Vec<NewOrderItem>,
}

impl CreateOrder {
    /// Rejects empty orders and nonsensical line items.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::Validation(
                "items must contain at least 1 element".into(),
            ));
        }
        for item in &self.items {
            if item.product_id.is_empty() {
                return Err(OrderError::Validation("product_id must not be empty".into()));
            }
            if item.quantity == 0 {
                return Err(OrderError::Validation(format!(
                    "quantity for product {} must be positive",
                    item.product_id
                )));
            }
            if item.price < Decimal::ZERO {
                return Err(OrderError::Validation(format!(
                    "price for product {} must not be negative",
                    item.product_id
                )));
            }
        }
        Ok(())
    }
}

/// Paging and filtering payload for the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderPagination {
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    10
}

impl Default for OrderPagination {
    fn default() -> Self {
        Self {
            status: None,
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl OrderPagination {
    pub fn with_status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), OrderError> {
        if self.page == 0 {
            return Err(OrderError::Validation("page must be positive".into()));
        }
        if self.limit == 0 {
            return Err(OrderError::Validation("limit must be positive".into()));
        }
        Ok(())
    }
}

/// Payload for a status transition request.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeOrderStatus {
    pub id: OrderId,
    pub status: OrderStatus,
}

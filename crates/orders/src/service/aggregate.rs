//! The join-and-total step of order creation.
//!
//! Pure functions over the submitted line items and the catalog map the
//! validation channel returned. Kept free of channels and state so the
//! money math is trivially testable.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::dto::NewOrderItem;
use crate::error::OrderError;
use crate::model::{EnrichedItem, OrderItem, ProductRecord};

/// Derived totals for an order being created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub total_amount: Decimal,
    pub total_items: u32,
}

/// Computes order totals from the submitted line items.
///
/// Every submitted id must appear in `catalog`; an absent id aborts the
/// whole order with [`OrderError::ProductNotFound`] — a line item is never
/// silently dropped. The price operand is the *submitted* price: the
/// validation step only confirms the product exists and does not
/// substitute the catalog's live price.
///
/// Accumulation runs in input order with `Decimal` arithmetic, so the sum
/// is exact and deterministic.
pub fn aggregate(
    items: &[NewOrderItem],
    catalog: &HashMap<String, ProductRecord>,
) -> Result<OrderTotals, OrderError> {
    let mut total_amount = Decimal::ZERO;
    let mut total_items = 0u32;
    for item in items {
        if !catalog.contains_key(&item.product_id) {
            return Err(OrderError::ProductNotFound(item.product_id.clone()));
        }
        total_amount += item.price * Decimal::from(item.quantity);
        total_items += item.quantity;
    }
    Ok(OrderTotals {
        total_amount,
        total_items,
    })
}

/// Annotates persisted line items with the product names resolved during
/// validation.
///
/// The repository returns items without names — names are not stored — so
/// this second join produces the response shape. The same missing-id
/// policy applies as in [`aggregate`].
pub fn enrich(
    items: &[OrderItem],
    catalog: &HashMap<String, ProductRecord>,
) -> Result<Vec<EnrichedItem>, OrderError> {
    items
        .iter()
        .map(|item| {
            let product = catalog
                .get(&item.product_id)
                .ok_or_else(|| OrderError::ProductNotFound(item.product_id.clone()))?;
            Ok(EnrichedItem {
                product_id: item.product_id.clone(),
                name: product.name.clone(),
                price: item.price,
                quantity: item.quantity,
            })
        })
        .collect()
}

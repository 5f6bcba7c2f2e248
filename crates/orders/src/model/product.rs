//! The external product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as reported by the external catalog.
///
/// Transient value object: fetched per request through the validation
/// channel, alive for that request's processing, never persisted or cached
/// locally. The `price` here is the catalog's *live* price — order totals
/// are computed from the submitted price instead, so this field only
/// matters to callers that want to compare the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

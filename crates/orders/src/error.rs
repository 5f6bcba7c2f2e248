//! The failure taxonomy of the order core.

use std::time::Duration;

use crate::model::OrderId;

/// Everything an order operation can fail with.
///
/// Nothing here is caught or retried inside the core: each variant aborts
/// the current operation immediately and propagates to the boundary layer,
/// which maps [`OrderError::status`] plus the display message onto the
/// wire. No operation is partially committed on failure — creation in
/// particular is all-or-nothing.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// The validation transport could not deliver the request.
    #[error("product validation service is unavailable")]
    UpstreamUnavailable,

    /// No validation reply arrived within the configured window.
    #[error("product validation timed out after {0:?}")]
    UpstreamTimeout(Duration),

    /// The validation reply was not a list-shaped payload.
    #[error("malformed product validation reply: {0}")]
    UpstreamMalformedReply(String),

    /// The order store could not be reached.
    #[error("order storage is unavailable")]
    StorageUnavailable,

    /// No order exists under the given id.
    #[error("Order with id {0} not found")]
    NotFound(OrderId),

    /// A submitted product id was absent from the validation reply.
    #[error("product {0} was not found in the catalog")]
    ProductNotFound(String),

    /// Malformed input, rejected before the workflow runs.
    #[error("{0}")]
    Validation(String),
}

impl OrderError {
    /// Numeric status for the boundary layer's error translation.
    ///
    /// `NotFound` maps to 404. Everything else, including internal
    /// failures, falls back to 400 — matching the observed behavior of the
    /// translation layer this core feeds.
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            _ => 400,
        }
    }
}

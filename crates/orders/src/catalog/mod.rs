//! The product validation boundary.
//!
//! The external catalog is reachable only through one request/reply
//! exchange: a batch of product ids goes out, a single list-shaped reply
//! comes back. Both the creation and the retrieval path use this same
//! contract, so it is defined once here.
//!
//! The reply payload travels as raw JSON ([`serde_json::Value`]) — the wire
//! shape — and is decoded on this side. That keeps transport-level garbage
//! representable: a reply that is not a list is a distinct failure
//! ([`OrderError::UpstreamMalformedReply`]), not a panic.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use orders_messaging::{ChannelError, Mailbox, MessageHandler, ReplyTo};

use crate::error::OrderError;
use crate::model::ProductRecord;

/// Wire messages understood by the product catalog.
#[derive(Debug)]
pub enum CatalogRequest {
    /// Confirm a batch of product ids. The reply is a JSON array of
    /// `{id, name, price}` records covering whichever ids were recognized —
    /// the contract does not promise coverage of every requested id, nor
    /// input order, nor input count.
    Validate {
        product_ids: Vec<String>,
        reply_to: ReplyTo<Value>,
    },
}

/// Client for the product validation channel.
///
/// Sends one request and awaits exactly one reply within the configured
/// window. There is no internal retry: retry policy belongs to the caller,
/// and here a failed call aborts the surrounding workflow step.
#[derive(Clone)]
pub struct ProductValidator {
    mailbox: Mailbox<CatalogRequest>,
    window: Duration,
}

impl ProductValidator {
    pub fn new(mailbox: Mailbox<CatalogRequest>, window: Duration) -> Self {
        Self { mailbox, window }
    }

    /// Validates a batch of product ids against the external catalog.
    ///
    /// The input may contain duplicates, and the reply preserves neither
    /// input order nor count, so the result is indexed by id. Should the
    /// upstream ever return duplicate ids, the last record wins.
    #[instrument(skip(self, product_ids))]
    pub async fn validate(
        &self,
        product_ids: Vec<String>,
    ) -> Result<HashMap<String, ProductRecord>, OrderError> {
        debug!(count = product_ids.len(), "Sending validate_products request");
        let payload = self
            .mailbox
            .request(self.window, |reply_to| CatalogRequest::Validate {
                product_ids,
                reply_to,
            })
            .await
            .map_err(|e| match e {
                ChannelError::Closed | ChannelError::ReplyDropped => {
                    OrderError::UpstreamUnavailable
                }
                ChannelError::Timeout(window) => OrderError::UpstreamTimeout(window),
            })?;

        if !payload.is_array() {
            warn!("Validation reply is not a list");
            return Err(OrderError::UpstreamMalformedReply(
                "expected a list of product records".into(),
            ));
        }
        let records: Vec<ProductRecord> = serde_json::from_value(payload)
            .map_err(|e| OrderError::UpstreamMalformedReply(e.to_string()))?;

        debug!(recognized = records.len(), "Validation reply received");
        Ok(records
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect())
    }
}

/// In-process stand-in for the remote product catalog.
///
/// Holds a seedable product table and answers [`CatalogRequest::Validate`]
/// with the recognized subset, in the wire shape the real service uses.
/// The demo binary and the integration tests run against this; production
/// wiring points the same mailbox at the real transport instead.
#[derive(Debug, Default)]
pub struct CatalogDirectory {
    products: HashMap<String, ProductRecord>,
}

impl CatalogDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = ProductRecord>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|product| (product.id.clone(), product))
                .collect(),
        }
    }
}

#[async_trait]
impl MessageHandler for CatalogDirectory {
    type Message = CatalogRequest;

    async fn handle(&mut self, msg: CatalogRequest) {
        match msg {
            CatalogRequest::Validate {
                product_ids,
                reply_to,
            } => {
                let recognized: Vec<&ProductRecord> = product_ids
                    .iter()
                    .filter_map(|id| self.products.get(id))
                    .collect();
                debug!(
                    requested = product_ids.len(),
                    recognized = recognized.len(),
                    "Validate"
                );
                let payload =
                    serde_json::to_value(&recognized).unwrap_or(Value::Array(Vec::new()));
                let _ = reply_to.send(payload);
            }
        }
    }
}

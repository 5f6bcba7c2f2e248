//! # Orders Service
//!
//! Order management on top of the actor-based request/reply plumbing from
//! `orders-messaging`: create an order from requested line items, list
//! orders with paging and a status filter, fetch a single order enriched
//! with live product names, and transition an order's status.
//!
//! ## Architecture
//!
//! The hard part is order creation, which crosses two boundaries:
//!
//! 1. **[`catalog`]** — the product validation channel. A batch of product
//!    ids goes to the external catalog in a single request; one list-shaped
//!    reply comes back, decoded into [`ProductRecord`]s and indexed by id.
//!    Timeouts, unreachable transport, and malformed payloads each surface
//!    as their own error.
//! 2. **[`repository`]** — the order store actor. An order row and all of
//!    its line rows are committed in a single sequentially-processed
//!    message, so partial writes are never observable.
//!
//! Between the two sits **[`service`]**: it aggregates the submitted line
//! items against the validated catalog (totals from the *submitted* prices;
//! validation only confirms existence), persists, and joins the persisted
//! items back against the catalog map to annotate them with product names.
//!
//! **[`lifecycle`]** wires it all together: explicit configuration, actor
//! spawning, and graceful shutdown.
//!
//! ## Module Tour
//!
//! - [`model`] — orders, line items, statuses, the transition rule, and the
//!   enriched read model.
//! - [`dto`] — inbound payloads with transport-side validation.
//! - [`error`] — the failure taxonomy, each variant carrying the numeric
//!   status the boundary layer maps onto the wire.
//! - [`catalog`], [`repository`], [`service`], [`lifecycle`] — see above.
//!
//! [`ProductRecord`]: model::ProductRecord

pub mod catalog;
pub mod dto;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod repository;
pub mod service;

//! The order workflow.
//!
//! [`OrderService`] orchestrates every order operation across the two
//! boundaries: the product validation channel and the order store. Each
//! incoming request runs on its own task; the only suspension points are
//! the validation call and the store calls, and no state is shared between
//! concurrent requests beyond the two mailboxes.

pub mod aggregate;

use tracing::{debug, info, instrument};

use crate::catalog::ProductValidator;
use crate::dto::{ChangeOrderStatus, CreateOrder, OrderPagination};
use crate::error::OrderError;
use crate::model::{
    plan_transition, EnrichedOrder, Order, OrderId, OrderPage, PageMeta, Transition,
};
use crate::repository::OrderRepository;

use aggregate::{aggregate, enrich};

/// Orchestrates order creation, retrieval, listing, and status changes.
#[derive(Clone)]
pub struct OrderService {
    validator: ProductValidator,
    repo: OrderRepository,
}

impl OrderService {
    pub fn new(validator: ProductValidator, repo: OrderRepository) -> Self {
        Self { validator, repo }
    }

    /// Creates an order from the requested line items.
    ///
    /// The submitted product ids are confirmed against the external
    /// catalog first; any upstream failure aborts here, before anything is
    /// persisted. Totals are then computed from the submitted prices, the
    /// order and its line rows are committed together, and the persisted
    /// items — which carry no product names — are joined once more against
    /// the same catalog map to build the response.
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateOrder) -> Result<EnrichedOrder, OrderError> {
        request.validate()?;

        let product_ids: Vec<String> = request
            .items
            .iter()
            .map(|item| item.product_id.clone())
            .collect();
        let catalog = self.validator.validate(product_ids).await?;

        let totals = aggregate(&request.items, &catalog)?;
        let order = self
            .repo
            .create_with_items(request.items, totals.total_amount, totals.total_items)
            .await?;
        info!(order_id = %order.id, total_amount = %order.total_amount, "Order created");

        let items = enrich(&order.items, &catalog)?;
        Ok(EnrichedOrder::new(order, items))
    }

    /// Lists orders with paging and an optional status filter.
    ///
    /// The list shape is deliberately not enriched with product names:
    /// only single-order retrieval pays for the extra catalog round trip.
    #[instrument(skip(self))]
    pub async fn find_all(&self, pagination: OrderPagination) -> Result<OrderPage, OrderError> {
        pagination.validate()?;

        let total = self.repo.count(pagination.status).await?;
        let data = self
            .repo
            .find_page(pagination.status, pagination.page, pagination.limit)
            .await?;
        let total_pages = total.div_ceil(pagination.limit as u64);
        debug!(total, total_pages, page = pagination.page, "Listed orders");

        Ok(OrderPage {
            data,
            meta: PageMeta {
                total,
                total_pages,
                page: pagination.page,
            },
        })
    }

    /// Fetches one order and joins its items against the live catalog.
    ///
    /// This repeats the validation round trip from creation so the
    /// response carries the products' *current* names.
    #[instrument(skip(self))]
    pub async fn find_one(&self, id: OrderId) -> Result<EnrichedOrder, OrderError> {
        let order = self.repo.find_by_id(id).await?;

        let product_ids: Vec<String> = order
            .items
            .iter()
            .map(|item| item.product_id.clone())
            .collect();
        let catalog = self.validator.validate(product_ids).await?;

        let items = enrich(&order.items, &catalog)?;
        Ok(EnrichedOrder::new(order, items))
    }

    /// Applies a status-change request.
    ///
    /// The current status is read with the cheap status-only lookup —
    /// deciding a transition needs no product enrichment. A same-status
    /// request returns the stored order unchanged without touching the
    /// row; any other target is persisted unconditionally.
    #[instrument(skip(self))]
    pub async fn change_status(&self, request: ChangeOrderStatus) -> Result<Order, OrderError> {
        let current = self.repo.status_of(request.id).await?;
        match plan_transition(current, request.status) {
            Transition::NoOp => {
                debug!(order_id = %request.id, status = %current, "Status unchanged");
                self.repo.find_by_id(request.id).await
            }
            Transition::Apply(target) => {
                info!(order_id = %request.id, from = %current, to = %target, "Applying status change");
                self.repo.update_status(request.id, target).await
            }
        }
    }
}

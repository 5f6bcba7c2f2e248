//! Domain models: orders, line items, statuses, and the read model.

pub mod order;
pub mod product;
pub mod status;

pub use order::{
    EnrichedItem, EnrichedOrder, Order, OrderId, OrderItem, OrderItemId, OrderPage, PageMeta,
};
pub use product::ProductRecord;
pub use status::{plan_transition, OrderStatus, Transition};

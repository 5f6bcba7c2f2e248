//! Order lifecycle statuses and the transition rule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OrderError;

/// Lifecycle stage of an order. New orders start as `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [Self::Pending, Self::Delivered, Self::Cancelled];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(OrderStatus::as_str).collect();
                OrderError::Validation(format!(
                    "Possible status values are {}",
                    allowed.join(", ")
                ))
            })
    }
}

/// Outcome of evaluating a status-change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The target equals the current status; nothing is persisted.
    NoOp,
    /// Persist the new status.
    Apply(OrderStatus),
}

/// The transition rule: a same-status request is a no-op, any other target
/// is applied unconditionally. There is deliberately no graph restricting
/// which status may follow which.
pub fn plan_transition(current: OrderStatus, target: OrderStatus) -> Transition {
    if current == target {
        Transition::NoOp
    } else {
        Transition::Apply(target)
    }
}

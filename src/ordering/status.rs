//! Order lifecycle.
//!
//! ```text
//! PENDING -> PREPARING -> READY_FOR_PICKUP -> COMPLETED
//! PENDING | PREPARING | READY_FOR_PICKUP -> CANCELLED
//! ```
//!
//! `COMPLETED` and `CANCELLED` are terminal. Requesting the current status again
//! is accepted and changes nothing.

use crate::model::OrderStatus;
use crate::order_actor::OrderError;

/// Whether status updates must follow the lifecycle graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionMode {
    /// Only the edges of the lifecycle graph are allowed.
    #[default]
    Strict,
    /// Any label may replace any other.
    Permissive,
}

/// Parses a requested status label, ignoring case.
pub fn parse(label: &str) -> Result<OrderStatus, OrderError> {
    label
        .parse()
        .map_err(|e: crate::model::UnknownStatus| OrderError::InvalidArgument(e.to_string()))
}

pub fn is_terminal(status: OrderStatus) -> bool {
    matches!(status, OrderStatus::Completed | OrderStatus::Cancelled)
}

/// Whether `from -> to` is an edge of the lifecycle graph.
pub fn can_transition(from: OrderStatus, to: OrderStatus) -> bool {
    use crate::model::OrderStatus::*;
    match (from, to) {
        (Pending, Preparing) | (Preparing, ReadyForPickup) | (ReadyForPickup, Completed) => true,
        (from, Cancelled) => !is_terminal(from),
        _ => false,
    }
}

/// The status an order in `current` ends up in when `requested` is applied.
pub fn transition(
    current: OrderStatus,
    requested: OrderStatus,
    mode: TransitionMode,
) -> Result<OrderStatus, OrderError> {
    if current == requested {
        return Ok(current);
    }
    match mode {
        TransitionMode::Permissive => Ok(requested),
        TransitionMode::Strict if can_transition(current, requested) => Ok(requested),
        TransitionMode::Strict => Err(OrderError::InvalidArgument(format!(
            "Cannot move order from {current} to {requested}"
        ))),
    }
}

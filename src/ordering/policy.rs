//! Order access policy.
//!
//! Rules, first match wins:
//!
//! 1. `ADMIN` may do anything.
//! 2. A `CAFETERIA_OWNER` may read, update and delete the orders of their own cafeteria.
//! 3. Anyone may read an order they placed.
//! 4. Everything else is denied.

use crate::model::{Caller, Order, OrderFilter, Role};

/// What a caller wants to do with an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    UpdateStatus,
    Delete,
}

pub fn can_access(caller: &Caller, order: &Order, operation: Operation) -> bool {
    if caller.has_role(Role::Admin) {
        return true;
    }
    if caller.has_role(Role::CafeteriaOwner) && caller.cafeteria_id == Some(order.cafeteria_id) {
        return true;
    }
    operation == Operation::Read && caller.user_id == order.user_id
}

/// The orders `caller` may list. `None` means none at all: an owner who has not
/// been assigned a cafeteria.
pub fn visible_scope(caller: &Caller) -> Option<OrderFilter> {
    if caller.has_role(Role::Admin) {
        Some(OrderFilter::All)
    } else if caller.has_role(Role::CafeteriaOwner) {
        caller.cafeteria_id.map(OrderFilter::Cafeteria)
    } else {
        Some(OrderFilter::User(caller.user_id))
    }
}

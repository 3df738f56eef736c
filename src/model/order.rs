//! The order aggregate: an [`Order`] and the [`OrderItem`]s it owns.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//! Orders are only created from an [`OrderDraft`] assembled by the
//! [`OrderBuilder`](crate::ordering::OrderBuilder); the only update an order accepts
//! is a new [`OrderStatus`].

use crate::model::{CafeteriaId, MenuItemId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use uuid::Uuid;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Identifier of a line inside an order. Lines are created with their order and
/// never addressed on their own, so a random id is enough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderItemId(pub Uuid);

impl OrderItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for OrderItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Lowest and highest pickup code.
pub const PICKUP_CODE_RANGE: std::ops::RangeInclusive<u32> = 100_000..=999_999;

/// Six-digit code a customer reads out at the counter to claim an order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PickupCode(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid pickup code: {0}")]
pub struct InvalidPickupCode(pub String);

impl PickupCode {
    pub fn from_number(number: u32) -> Result<Self, InvalidPickupCode> {
        if PICKUP_CODE_RANGE.contains(&number) {
            Ok(Self(number.to_string()))
        } else {
            Err(InvalidPickupCode(number.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PickupCode {
    type Err = InvalidPickupCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 6 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidPickupCode(s.to_string()));
        }
        let number: u32 = trimmed
            .parse()
            .map_err(|_| InvalidPickupCode(s.to_string()))?;
        Self::from_number(number)
    }
}

impl TryFrom<String> for PickupCode {
    type Error = InvalidPickupCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PickupCode> for String {
    fn from(code: PickupCode) -> Self {
        code.0
    }
}

impl Display for PickupCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of an order.
///
/// ```text
/// PENDING -> PREPARING -> READY_FOR_PICKUP -> COMPLETED
///    \___________\______________\__________-> CANCELLED
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Preparing,
    ReadyForPickup,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::ReadyForPickup,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// The stored label, e.g. `READY_FOR_PICKUP`.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::ReadyForPickup => "READY_FOR_PICKUP",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    /// Case-insensitive match against the five labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// One line of an order, with the price captured when the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub menu_item_id: MenuItemId,
    /// At least 1.
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl OrderItem {
    /// `unit_price * quantity`, or `None` on overflow.
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub pickup_code: PickupCode,
    pub cafeteria_id: CafeteriaId,
    pub user_id: UserId,
    /// In the order the lines were requested. Never empty.
    pub items: Vec<OrderItem>,
}

/// A fully validated order that has not been stored yet.
///
/// The repository turns it into an [`Order`] by assigning the id. Built by
/// [`OrderBuilder::build`](crate::ordering::OrderBuilder::build).
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub pickup_code: PickupCode,
    pub cafeteria_id: CafeteriaId,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
}

/// Selection used by repository list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFilter {
    All,
    Cafeteria(CafeteriaId),
    User(UserId),
}

/// A requested (menu item, quantity) pair. The quantity is signed so that bad
/// input reaches validation instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub menu_item_id: MenuItemId,
    pub quantity: i32,
}

impl LineItem {
    pub fn new(menu_item_id: MenuItemId, quantity: i32) -> Self {
        Self {
            menu_item_id,
            quantity,
        }
    }
}

/// Input of the create-order operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub cafeteria_id: CafeteriaId,
    pub user_id: UserId,
    pub items: Vec<LineItem>,
}

//! A dish sold by one cafeteria.
//!
//! # Actor Framework
//! [`MenuItem`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! The price is read once, when an order line is built from it. Later price
//! changes never reach existing orders.

use crate::model::CafeteriaId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for MenuItems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "menu_item_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub cafeteria_id: CafeteriaId,
    pub name: String,
    /// Non-negative.
    pub price: Decimal,
    pub is_available: bool,
}

/// DTOs for MenuItem creation and updates.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub cafeteria_id: CafeteriaId,
    pub name: String,
    pub price: Decimal,
    pub is_available: bool,
}

impl MenuItemCreate {
    /// An available item priced at `price`.
    pub fn new(cafeteria_id: CafeteriaId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            cafeteria_id,
            name: name.into(),
            price,
            is_available: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub is_available: Option<bool>,
}

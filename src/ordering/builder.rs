//! Order aggregate builder.
//!
//! Turns a cafeteria, the placing user and the resolved menu items into an
//! [`OrderDraft`]: one [`OrderItem`] per requested line, in request order, each
//! capturing the menu item's price at this moment. Duplicate menu items stay
//! separate lines. The total is exact decimal arithmetic.
//!
//! Looking the referenced records up is the caller's job, so that the builder
//! stays synchronous and the lookup order stays visible in one place
//! ([`OrderService::create_order`](crate::ordering::OrderService::create_order)).

use crate::model::{
    Cafeteria, CafeteriaId, MenuItem, OrderDraft, OrderItem, OrderItemId, OrderStatus, PickupCode,
    User, UserId,
};
use crate::order_actor::OrderError;
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct OrderBuilder {
    cafeteria_id: CafeteriaId,
    user_id: UserId,
    items: Vec<OrderItem>,
    total: Decimal,
}

impl OrderBuilder {
    pub fn new(cafeteria: &Cafeteria, user: &User) -> Self {
        Self {
            cafeteria_id: cafeteria.id,
            user_id: user.id,
            items: Vec::new(),
            total: Decimal::ZERO,
        }
    }

    /// Adds `quantity` of `menu_item` at its current price.
    ///
    /// Quantities below 1 are refused with [`OrderError::InvalidArgument`] and
    /// leave the builder unchanged.
    pub fn add_line(&mut self, menu_item: &MenuItem, quantity: i32) -> Result<&mut Self, OrderError> {
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q >= 1)
            .ok_or_else(|| {
                OrderError::InvalidArgument(format!(
                    "Quantity for {} must be at least 1, got {quantity}",
                    menu_item.id
                ))
            })?;

        let item = OrderItem {
            id: OrderItemId::new(),
            menu_item_id: menu_item.id,
            quantity,
            unit_price: menu_item.price,
        };
        let total = item
            .line_total()
            .and_then(|line| self.total.checked_add(line))
            .ok_or_else(|| OrderError::InvalidArgument("Order total is out of range".into()))?;

        self.items.push(item);
        self.total = total;
        Ok(self)
    }

    /// Sum of `unit_price * quantity` over the lines added so far.
    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Fails unless at least one line was added.
    pub fn ensure_lines(&self) -> Result<(), OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::InvalidArgument(
                "An order needs at least one item".into(),
            ));
        }
        Ok(())
    }

    /// The finished aggregate, `PENDING`, holding `pickup_code`.
    pub fn build(self, pickup_code: PickupCode) -> Result<OrderDraft, OrderError> {
        self.ensure_lines()?;
        Ok(OrderDraft {
            status: OrderStatus::Pending,
            total_amount: self.total,
            pickup_code,
            cafeteria_id: self.cafeteria_id,
            user_id: self.user_id,
            items: self.items,
        })
    }
}

//! Entity trait implementation for the Order domain type.
//!
//! See the trait implementation on [`Order`] for method documentation.

use crate::framework::ActorEntity;
use crate::model::{Order, OrderDraft, OrderFilter, OrderId, OrderStatus};
use crate::order_actor::OrderError;
use crate::ordering::status::{self, TransitionMode};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderDraft;
    type Update = OrderStatus;
    type Filter = OrderFilter;
    type Context = TransitionMode;
    type Error = OrderError;

    /// Stores a draft built by the `OrderBuilder` under its new id.
    fn from_create_params(id: OrderId, draft: OrderDraft) -> Result<Self, Self::Error> {
        if draft.items.is_empty() {
            return Err(OrderError::InvalidArgument(
                "An order needs at least one item".into(),
            ));
        }
        Ok(Self {
            id,
            status: draft.status,
            total_amount: draft.total_amount,
            pickup_code: draft.pickup_code,
            cafeteria_id: draft.cafeteria_id,
            user_id: draft.user_id,
            items: draft.items,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.pickup_code.to_string())
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        match filter {
            OrderFilter::All => true,
            OrderFilter::Cafeteria(id) => self.cafeteria_id == *id,
            OrderFilter::User(id) => self.user_id == *id,
        }
    }

    /// Moves the order to `requested`, subject to the transition mode.
    async fn on_update(
        &mut self,
        requested: OrderStatus,
        mode: &TransitionMode,
    ) -> Result<(), Self::Error> {
        let next = status::transition(self.status, requested, *mode)?;
        debug!(order_id = %self.id, from = %self.status, to = %next, "Status change");
        self.status = next;
        Ok(())
    }
}

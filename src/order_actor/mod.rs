//! # Order Actor
//!
//! The order repository: stores [`Order`] aggregates, keeps pickup codes unique and
//! applies status changes through the [status machine](crate::ordering::status).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`], the error type of the whole order workflow
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Context
//!
//! The actor's context is the [`TransitionMode`](crate::ordering::TransitionMode)
//! that decides whether status updates must follow the lifecycle graph:
//!
//! ```rust,ignore
//! let (actor, orders) = order_actor::new(32);
//! tokio::spawn(actor.run(TransitionMode::Strict));
//! ```
//!
//! ## Key Features
//!
//! - **Unique pickup codes**: a second order with a stored code is refused with
//!   [`OrderError::Conflict`] in the same step as the insert
//! - **All or nothing**: an order and its items are stored as one value
//! - **Atomic status updates**: a refused transition leaves the stored order untouched

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}

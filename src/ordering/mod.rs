//! # Order Workflow
//!
//! The rules of placing and fulfilling an order, independent of how the actors
//! behind them are wired:
//!
//! - [`builder`] - validates a cart and assembles the order aggregate
//! - [`pickup`] - draws collision-free pickup codes
//! - [`status`] - the order lifecycle and its allowed transitions
//! - [`policy`] - who may read, update or delete which order
//! - [`service`] - [`OrderService`], the operations callers invoke
//!
//! Everything except the service is plain synchronous code (the generator only
//! awaits its [`PickupCodeIndex`]), so it is tested without actors.

pub mod builder;
pub mod pickup;
pub mod policy;
pub mod service;
pub mod status;

pub use builder::OrderBuilder;
pub use pickup::{PickupCodeGenerator, PickupCodeIndex};
pub use policy::{can_access, visible_scope, Operation};
pub use service::OrderService;
pub use status::TransitionMode;

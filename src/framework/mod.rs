//! Generic actor framework for resource management.
//!
//! Every stored resource in the system (users, cafeterias, menu items, orders) is
//! owned by one [`ResourceActor`] running in its own Tokio task. Callers talk to it
//! through a cloneable [`ResourceClient`], usually wrapped in a typed client from
//! [`crate::clients`].
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the store and its unique-key index
//! - [`ResourceClient`] - Type-safe client for sending requests to an actor
//! - [`ActorClient`] - Shared behavior for the typed client wrappers
//! - [`FrameworkError`] - Transport, lookup and constraint failures
//!
//! # Testing
//!
//! See the [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};

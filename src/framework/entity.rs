//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stored resource (User, Cafeteria,
//! MenuItem, Order) implements to be managed by the generic [`ResourceActor`](super::ResourceActor).
//! It names the types for ids, DTOs, query filters, context and errors, and
//! provides the lifecycle hooks the actor calls around each operation.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::unique_key`]
//! - [`ActorEntity::matches`]
//!
//! The defaults do nothing (`Ok(())`, no unique key, every entity matches).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they may await other actors. The `Context` type is
/// injected into every hook at `run()` time, not at construction ("late binding").
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation. Ordering is used to
    /// return query results in creation order.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Predicate type accepted by `List` queries.
    type Filter: Send + Sync + Debug;

    /// The runtime context (dependencies or settings) injected into the actor.
    /// Use `()` if nothing is needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message: clients deal with a single
    /// error type, at the cost of every operation nominally being able to return
    /// every variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Key that must be unique across all stored entities of this type, if any.
    ///
    /// The actor keeps an index over these keys and refuses any create or update
    /// that would make two entities share one.
    fn unique_key(&self) -> Option<String> {
        None
    }

    /// Whether this entity is selected by a `List` query.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received. Runs against a working copy; the
    /// stored entity only changes if this returns `Ok`.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

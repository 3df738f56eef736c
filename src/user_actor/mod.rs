//! # User Actor
//!
//! Owns the user records the order workflow consults: who a caller is, which
//! roles they hold and, for cafeteria owners, which cafeteria they run.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = user_actor::new(32);
//! tokio::spawn(actor.run(()));
//!
//! let alice = client
//!     .create_user(UserCreate::new("Alice", "alice@campus.edu", &[Role::Student]))
//!     .await?;
//! let caller = client.principal(alice.id).await?;
//! ```
//!
//! Emails are unique (compared case-insensitively); a second user with the same
//! email is refused with [`UserError::AlreadyExists`].

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::User;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}

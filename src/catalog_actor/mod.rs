//! # Catalog Actor
//!
//! Reference data the order workflow reads: cafeterias and the menu items they
//! sell. Two [`ResourceActor`]s share one [`CatalogClient`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementations for
//!   [`Cafeteria`] and [`MenuItem`]
//! - [`error`] - [`CatalogError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates both actors and the client
//!
//! ## Context
//!
//! The menu item actor is started with a `ResourceClient<Cafeteria>` as its context
//! and refuses menu items for a cafeteria that does not exist:
//!
//! ```rust,ignore
//! let (cafeterias, menu_items, catalog) = catalog_actor::new(32);
//! let cafeteria_client = catalog.cafeterias().clone();
//! tokio::spawn(cafeterias.run(()));
//! tokio::spawn(menu_items.run(cafeteria_client));
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CatalogClient;
use crate::framework::ResourceActor;
use crate::model::{Cafeteria, MenuItem};

/// Creates the Cafeteria and MenuItem actors and their shared client.
pub fn new(
    buffer_size: usize,
) -> (ResourceActor<Cafeteria>, ResourceActor<MenuItem>, CatalogClient) {
    let (cafeteria_actor, cafeterias) = ResourceActor::new(buffer_size);
    let (menu_item_actor, menu_items) = ResourceActor::new(buffer_size);
    (
        cafeteria_actor,
        menu_item_actor,
        CatalogClient::new(cafeterias, menu_items),
    )
}

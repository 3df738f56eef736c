//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod cafeteria;
pub mod menu_item;
pub mod order;
pub mod user;

pub use cafeteria::*;
pub use menu_item::*;
pub use order::*;
pub use user::*;

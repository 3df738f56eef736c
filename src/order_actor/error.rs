//! Error types for the order workflow.

use crate::catalog_actor::CatalogError;
use crate::user_actor::UserError;
use std::fmt::Display;
use thiserror::Error;

/// Kind of record a [`OrderError::NotFound`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Cafeteria,
    User,
    MenuItem,
    Order,
}

impl Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Resource::Cafeteria => "Cafeteria",
            Resource::User => "User",
            Resource::MenuItem => "Menu item",
            Resource::Order => "Order",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during order operations.
///
/// Raised where the problem is detected and returned to the caller unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// A referenced cafeteria, user, menu item or order does not exist.
    #[error("{resource} not found: {id}")]
    NotFound { resource: Resource, id: String },

    /// Bad quantity, empty cart, unknown status label or refused transition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The caller may not perform this operation on this order.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A pickup code is already held by a stored order.
    #[error("Pickup code already in use: {0}")]
    Conflict(String),

    /// No free pickup code was found within the attempt limit.
    #[error("No free pickup code after {attempts} attempts")]
    CapacityExhausted { attempts: u32 },

    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    pub fn not_found(resource: Resource, id: impl Display) -> Self {
        OrderError::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

//! Error types for the Catalog actors.

use thiserror::Error;

/// Errors that can occur during cafeteria and menu item operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested cafeteria or menu item was not found.
    #[error("Catalog entry not found: {0}")]
    NotFound(String),

    /// The data provided is invalid.
    #[error("Catalog validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

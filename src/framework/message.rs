//! # Generic Messages
//!
//! Message types exchanged between [`ResourceClient`](super::ResourceClient) and
//! [`ResourceActor`](super::ResourceActor).

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a resource actor.
///
/// The variants map to the CRUD lifecycle of a stored resource, plus three
/// read-only queries:
///
/// - **Create / Get / Update / Delete**: standard lifecycle.
/// - **List**: every entity accepted by [`ActorEntity::matches`] for the filter.
/// - **FindUnique**: lookup through the [`ActorEntity::unique_key`] index.
/// - **Exists**: id membership check.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    List {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    FindUnique {
        key: String,
        respond_to: Response<Option<T>>,
    },
    Exists {
        id: T::Id,
        respond_to: Response<bool>,
    },
}

impl<T: ActorEntity> ResourceRequest<T> {
    /// Variant name, for logs and mock diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceRequest::Create { .. } => "Create",
            ResourceRequest::Get { .. } => "Get",
            ResourceRequest::Update { .. } => "Update",
            ResourceRequest::Delete { .. } => "Delete",
            ResourceRequest::List { .. } => "List",
            ResourceRequest::FindUnique { .. } => "FindUnique",
            ResourceRequest::Exists { .. } => "Exists",
        }
    }
}

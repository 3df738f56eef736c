//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get`, `delete` and
//! `exists` built on top of a generic `ResourceClient`, with errors mapped into the
//! resource's own error type.
use super::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard CRUD operations.
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Cafeteria> for CafeteriaClient {
///     type Error = CatalogError;
///     fn inner(&self) -> &ResourceClient<Cafeteria> { &self.inner }
///     fn map_error(e: FrameworkError) -> CatalogError { CatalogError::from_framework(e) }
/// }
///
/// // get(), delete() and exists() are provided
/// let cafeteria = client.get(CafeteriaId(1)).await?;
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Whether an entity with this ID is stored.
    #[tracing::instrument(skip(self))]
    async fn exists(&self, id: T::Id) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().exists(id).await.map_err(Self::map_error)
    }
}

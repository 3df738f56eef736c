//! # Order Client
//!
//! The order repository as the rest of the crate sees it: keyed CRUD over
//! [`Order`] aggregates plus lookups by pickup code, cafeteria and placing user.
//! It wraps a `ResourceClient<Order>`.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{CafeteriaId, Order, OrderDraft, OrderFilter, OrderId, OrderStatus, PickupCode, UserId};
use crate::order_actor::{OrderError, Resource};
use crate::ordering::PickupCodeIndex;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound {
                resource: Resource::Order,
                id,
            },
            FrameworkError::Conflict(code) => OrderError::Conflict(code),
            other => other
                .into_entity_error::<OrderError>()
                .unwrap_or_else(|e| OrderError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl OrderClient {
    /// Inserts the order with its items in one step.
    ///
    /// Fails with [`OrderError::Conflict`] if a stored order already holds the
    /// draft's pickup code; nothing is stored in that case.
    #[instrument(skip(self, draft), fields(pickup_code = %draft.pickup_code))]
    pub async fn save(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        info!("Sending save to actor");
        self.inner.create(draft).await.map_err(Self::map_error)
    }

    pub async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_pickup_code(&self, code: &PickupCode) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        self.inner
            .find_unique(code.to_string())
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn find_by_cafeteria_id(&self, id: CafeteriaId) -> Result<Vec<Order>, OrderError> {
        self.find(OrderFilter::Cafeteria(id)).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_user_id(&self, id: UserId) -> Result<Vec<Order>, OrderError> {
        self.find(OrderFilter::User(id)).await
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<Order>, OrderError> {
        self.find(OrderFilter::All).await
    }

    /// Orders selected by `filter`, oldest first.
    pub async fn find(&self, filter: OrderFilter) -> Result<Vec<Order>, OrderError> {
        debug!(?filter, "Sending request");
        self.inner.list(filter).await.map_err(Self::map_error)
    }

    /// Applies a status change through the status machine.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.update(id, status).await.map_err(Self::map_error)
    }

    /// Removes the order together with its items.
    pub async fn delete_by_id(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await
    }

    pub async fn exists_by_id(&self, id: OrderId) -> Result<bool, OrderError> {
        self.exists(id).await
    }
}

#[async_trait]
impl PickupCodeIndex for OrderClient {
    async fn is_taken(&self, code: &PickupCode) -> Result<bool, OrderError> {
        Ok(self.find_by_pickup_code(code).await?.is_some())
    }
}

//! # User Client
//!
//! Provides a high‑level API for interacting with the `User` actor.
//! It wraps a `ResourceClient<User>` and exposes domain‑specific methods,
//! including resolving a user id into the [`Caller`] that order operations take.
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Caller, User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            FrameworkError::Conflict(email) => UserError::AlreadyExists(email),
            other => other
                .into_entity_error::<UserError>()
                .unwrap_or_else(|e| UserError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Looks a user up by email, ignoring case.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        self.inner
            .find_unique(email.to_lowercase())
            .await
            .map_err(Self::map_error)
    }

    /// Resolves the principal acting as `id`.
    #[instrument(skip(self))]
    pub async fn principal(&self, id: UserId) -> Result<Caller, UserError> {
        let user = self
            .get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;
        debug!(roles = ?user.roles, cafeteria_id = ?user.cafeteria_id, "Resolved principal");
        Ok(Caller::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::{CafeteriaId, Role};
    use std::collections::BTreeSet;

    fn owner() -> User {
        User {
            id: UserId(7),
            name: "Olga".into(),
            email: "olga@campus.edu".into(),
            roles: BTreeSet::from([Role::CafeteriaOwner]),
            cafeteria_id: Some(CafeteriaId(2)),
        }
    }

    #[tokio::test]
    async fn test_principal_carries_roles_and_cafeteria() {
        let mut mock = MockClient::<User>::new();
        mock.expect_get(UserId(7)).return_ok(Some(owner()));
        let client = UserClient::new(mock.client());

        let caller = client.principal(UserId(7)).await.unwrap();
        assert_eq!(caller.user_id, UserId(7));
        assert!(caller.has_role(Role::CafeteriaOwner));
        assert_eq!(caller.cafeteria_id, Some(CafeteriaId(2)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_principal_for_unknown_user() {
        let mut mock = MockClient::<User>::new();
        mock.expect_get(UserId(9)).return_ok(None);
        let client = UserClient::new(mock.client());

        let result = client.principal(UserId(9)).await;
        assert_eq!(result, Err(UserError::NotFound("user_9".into())));
        mock.verify();
    }

    #[tokio::test]
    async fn test_duplicate_email_maps_to_already_exists() {
        let mut mock = MockClient::<User>::new();
        mock.expect_create()
            .return_err(FrameworkError::Conflict("olga@campus.edu".into()));
        let client = UserClient::new(mock.client());

        let result = client
            .create_user(UserCreate::new("Olga", "olga@campus.edu", &[Role::Student]))
            .await;
        assert_eq!(
            result,
            Err(UserError::AlreadyExists("olga@campus.edu".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_errors_are_recovered() {
        let mut mock = MockClient::<User>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                UserError::ValidationError("Invalid email: x".into()),
            )));
        let client = UserClient::new(mock.client());

        let result = client
            .create_user(UserCreate::new("X", "x", &[Role::Student]))
            .await;
        assert!(matches!(result, Err(UserError::ValidationError(_))));
    }
}

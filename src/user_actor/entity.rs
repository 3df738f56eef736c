//! Entity trait implementation for the User domain type.
//!
//! See the trait implementation on [`User`] for method documentation.

use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;

fn validate_name(name: &str) -> Result<(), UserError> {
    if name.trim().is_empty() {
        return Err(UserError::ValidationError("Name must not be empty".into()));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), UserError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(UserError::ValidationError(format!("Invalid email: {email}"))),
    }
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Filter = ();
    type Context = ();
    type Error = UserError;

    /// Creates a new User from creation parameters.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        validate_name(&params.name)?;
        validate_email(&params.email)?;
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            roles: params.roles,
            cafeteria_id: params.cafeteria_id,
        })
    }

    /// Emails are unique regardless of case.
    fn unique_key(&self) -> Option<String> {
        Some(self.email.to_lowercase())
    }

    /// Handles updates to the User entity.
    ///
    /// # Fields Updated
    /// - `name`: User's display name
    /// - `email`: User's email address
    /// - `cafeteria_id`: the cafeteria an owner runs
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name;
        }
        if let Some(email) = update.email {
            validate_email(&email)?;
            self.email = email;
        }
        if let Some(cafeteria_id) = update.cafeteria_id {
            self.cafeteria_id = Some(cafeteria_id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CafeteriaId, Role};

    #[test]
    fn create_validates_name_and_email() {
        let ok = User::from_create_params(
            UserId(1),
            UserCreate::new("Alice", "alice@campus.edu", &[Role::Student]),
        )
        .unwrap();
        assert!(ok.has_role(Role::Student));
        assert_eq!(ok.cafeteria_id, None);

        let bad_email =
            User::from_create_params(UserId(2), UserCreate::new("Bob", "bob", &[Role::Student]));
        assert!(matches!(bad_email, Err(UserError::ValidationError(_))));

        let no_name =
            User::from_create_params(UserId(3), UserCreate::new(" ", "x@y.z", &[Role::Admin]));
        assert!(matches!(no_name, Err(UserError::ValidationError(_))));
    }

    #[tokio::test]
    async fn update_assigns_cafeteria() {
        let mut owner = User::from_create_params(
            UserId(1),
            UserCreate::new("Olga", "olga@campus.edu", &[Role::CafeteriaOwner]),
        )
        .unwrap();
        let update = UserUpdate {
            cafeteria_id: Some(CafeteriaId(4)),
            ..Default::default()
        };
        owner.on_update(update, &()).await.unwrap();
        assert_eq!(owner.cafeteria_id, Some(CafeteriaId(4)));
        assert_eq!(owner.unique_key().as_deref(), Some("olga@campus.edu"));
    }
}

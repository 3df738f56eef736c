//! Users, their roles, and the principal view of a user that access checks use.
//!
//! # Actor Framework
//! [`User`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for User`](#impl-ActorEntity-for-User) for details on:
//! - Creation parameters ([`UserCreate`])
//! - Update parameters ([`UserUpdate`])

use crate::model::CafeteriaId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// Role granted to a user. A user may hold several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    /// Scoped to exactly one cafeteria, see [`User::cafeteria_id`].
    CafeteriaOwner,
    Student,
    Faculty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Unique across all users.
    pub email: String,
    pub roles: BTreeSet<Role>,
    /// The cafeteria a `CafeteriaOwner` runs.
    pub cafeteria_id: Option<CafeteriaId>,
}

impl User {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Payload for creating a new user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub roles: BTreeSet<Role>,
    pub cafeteria_id: Option<CafeteriaId>,
}

impl UserCreate {
    pub fn new(name: impl Into<String>, email: impl Into<String>, roles: &[Role]) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            roles: roles.iter().copied().collect(),
            cafeteria_id: None,
        }
    }

    /// Attaches the cafeteria an owner runs.
    pub fn owning(mut self, cafeteria_id: CafeteriaId) -> Self {
        self.cafeteria_id = Some(cafeteria_id);
        self
    }
}

/// Payload for updating an existing user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub cafeteria_id: Option<CafeteriaId>,
}

/// The authenticated principal a request is made on behalf of.
///
/// Resolved once at the boundary (see
/// [`UserClient::principal`](crate::clients::UserClient::principal)) and passed
/// explicitly into every order operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user_id: UserId,
    pub roles: BTreeSet<Role>,
    pub cafeteria_id: Option<CafeteriaId>,
}

impl Caller {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

impl From<&User> for Caller {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            roles: user.roles.clone(),
            cafeteria_id: user.cafeteria_id,
        }
    }
}

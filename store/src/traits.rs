//! Backend contracts.
//!
//! The team builder only talks to its identity provider, document store and
//! session storage through these traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use pokedeck_team::{NewTeam, TeamPatch, TeamRecord};

use crate::Result;
use crate::accounts::UserProfile;

/// Signed-in user as reported by the identity provider.
///
/// Only `uid` carries meaning for the team builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Identity provider (sign-up, sign-in, session)
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account and sign it in. Fails on an already registered email.
    async fn register(&self, email: &str, password: &str, display_name: &str) -> Result<AuthUser>;

    async fn login(&self, email: &str, password: &str) -> Result<AuthUser>;

    async fn logout(&self) -> Result<()>;

    /// Currently signed-in user
    fn current_user(&self) -> Option<AuthUser>;

    /// Watch auth state changes; dropping the receiver unsubscribes
    fn subscribe(&self) -> watch::Receiver<Option<AuthUser>>;
}

/// `teams` collection
#[async_trait]
pub trait TeamStore: Send + Sync {
    /// Insert a team; the store assigns id, timestamps and `favorite = false`
    async fn insert(&self, team: NewTeam) -> Result<TeamRecord>;

    async fn get(&self, team_id: &str) -> Result<Option<TeamRecord>>;

    /// Equality filter on `userId`
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<TeamRecord>>;

    /// Equality filter on `userId` and `name`
    async fn find_by_user_and_name(&self, user_id: &str, name: &str) -> Result<Vec<TeamRecord>>;

    /// Apply a partial update and stamp `updatedAt`
    async fn update(&self, team_id: &str, patch: &TeamPatch) -> Result<()>;

    async fn delete(&self, team_id: &str) -> Result<()>;

    /// Count aggregate over the whole collection
    async fn count(&self) -> Result<usize>;
}

/// `users` collection
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, profile: UserProfile) -> Result<()>;

    async fn find_by_username(&self, username: &str) -> Result<Option<UserProfile>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>>;
}

/// Synchronous string key/value storage scoped to the browser session
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: String);

    fn remove(&self, key: &str);
}

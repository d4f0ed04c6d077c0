//! Account registration and sign-in

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::{AuthUser, IdentityProvider, UserStore};
use crate::{Result, StoreError};

/// Profile document in the `users` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Same as the identity provider's uid
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Sign-up / sign-in on top of the identity provider and `users` collection
#[derive(Clone)]
pub struct Accounts {
    identity: Arc<dyn IdentityProvider>,
    users: Arc<dyn UserStore>,
}

impl Accounts {
    pub fn new(identity: Arc<dyn IdentityProvider>, users: Arc<dyn UserStore>) -> Self {
        Self { identity, users }
    }

    /// Register a new account.
    ///
    /// Username and email must both be unused in the `users` collection.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<AuthUser> {
        let username = username.trim();
        let email = email.trim().to_lowercase();

        if self.users.find_by_username(username).await?.is_some() {
            tracing::warn!(username, "Registration rejected: username taken");
            return Err(StoreError::UsernameTaken(username.to_string()));
        }
        if self.users.find_by_email(&email).await?.is_some() {
            tracing::warn!(email = %email, "Registration rejected: email taken");
            return Err(StoreError::EmailTaken(email));
        }

        let user = self
            .identity
            .register(&email, password, username)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Identity provider rejected sign-up"))?;

        self.users
            .insert(UserProfile {
                id: user.uid.clone(),
                username: username.to_string(),
                email,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(uid = %user.uid, username, "Registered account");
        Ok(user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser> {
        let user = self.identity.login(email, password).await?;
        tracing::info!(uid = %user.uid, "Signed in");
        Ok(user)
    }

    pub async fn logout(&self) -> Result<()> {
        self.identity.logout().await
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.identity.current_user()
    }

    pub fn identity(&self) -> &Arc<dyn IdentityProvider> {
        &self.identity
    }
}

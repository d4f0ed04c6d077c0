//! In-memory backends.
//!
//! Used by tests and the demos in place of the hosted identity provider,
//! document store and browser session storage. Clones share state.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::watch;
use uuid::Uuid;

use pokedeck_team::{NewTeam, TeamPatch, TeamRecord};

use crate::accounts::UserProfile;
use crate::traits::{AuthUser, IdentityProvider, SessionStorage, TeamStore, UserStore};
use crate::{Result, StoreError};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| StoreError::Backend("lock poisoned".to_string()))
}

// ============================================================================
// Teams
// ============================================================================

/// In-memory `teams` collection
#[derive(Clone, Default)]
pub struct MemoryTeamStore {
    teams: Arc<Mutex<HashMap<String, TeamRecord>>>,
    writes: Arc<AtomicUsize>,
    offline: Arc<AtomicBool>,
}

impl MemoryTeamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful inserts, updates and deletes
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Make every call fail with a backend error, like a dropped connection
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Insert a record as-is (fixtures)
    pub fn seed(&self, team: TeamRecord) -> Result<()> {
        lock(&self.teams)?.insert(team.id.clone(), team);
        Ok(())
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("document store unavailable".to_string()));
        }
        Ok(())
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl TeamStore for MemoryTeamStore {
    async fn insert(&self, team: NewTeam) -> Result<TeamRecord> {
        self.check_online()?;

        let now = Utc::now();
        let record = TeamRecord {
            id: Uuid::new_v4().to_string(),
            user_id: team.user_id,
            name: team.name,
            pokemon: team.pokemon,
            created_at: now,
            updated_at: now,
            favorite: false,
        };

        lock(&self.teams)?.insert(record.id.clone(), record.clone());
        self.record_write();
        Ok(record)
    }

    async fn get(&self, team_id: &str) -> Result<Option<TeamRecord>> {
        self.check_online()?;
        Ok(lock(&self.teams)?.get(team_id).cloned())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<TeamRecord>> {
        self.check_online()?;
        Ok(lock(&self.teams)?
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_user_and_name(&self, user_id: &str, name: &str) -> Result<Vec<TeamRecord>> {
        self.check_online()?;
        Ok(lock(&self.teams)?
            .values()
            .filter(|t| t.user_id == user_id && t.name == name)
            .cloned()
            .collect())
    }

    async fn update(&self, team_id: &str, patch: &TeamPatch) -> Result<()> {
        self.check_online()?;

        let mut teams = lock(&self.teams)?;
        let record = teams
            .get_mut(team_id)
            .ok_or_else(|| StoreError::NotFound(team_id.to_string()))?;
        patch.apply(record, Utc::now());
        drop(teams);

        self.record_write();
        Ok(())
    }

    async fn delete(&self, team_id: &str) -> Result<()> {
        self.check_online()?;
        lock(&self.teams)?.remove(team_id);
        self.record_write();
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        self.check_online()?;
        Ok(lock(&self.teams)?.len())
    }
}

// ============================================================================
// Users
// ============================================================================

/// In-memory `users` collection
#[derive(Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<Mutex<HashMap<String, UserProfile>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, profile: UserProfile) -> Result<()> {
        lock(&self.users)?.insert(profile.id.clone(), profile);
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserProfile>> {
        Ok(lock(&self.users)?
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserProfile>> {
        Ok(lock(&self.users)?
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

// ============================================================================
// Identity
// ============================================================================

struct Account {
    password: String,
    user: AuthUser,
}

/// In-memory identity provider
#[derive(Clone)]
pub struct MemoryIdentity {
    accounts: Arc<Mutex<HashMap<String, Account>>>,
    state: Arc<watch::Sender<Option<AuthUser>>>,
}

impl MemoryIdentity {
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self {
            accounts: Arc::new(Mutex::new(HashMap::new())),
            state: Arc::new(state),
        }
    }
}

impl Default for MemoryIdentity {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentity {
    async fn register(&self, email: &str, password: &str, display_name: &str) -> Result<AuthUser> {
        let email = email.trim().to_lowercase();
        let mut accounts = lock(&self.accounts)?;

        if accounts.contains_key(&email) {
            return Err(StoreError::EmailTaken(email));
        }

        let user = AuthUser {
            uid: Uuid::new_v4().to_string(),
            email: email.clone(),
            display_name: Some(display_name.to_string()),
        };
        accounts.insert(
            email,
            Account {
                password: password.to_string(),
                user: user.clone(),
            },
        );
        drop(accounts);

        self.state.send_replace(Some(user.clone()));
        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthUser> {
        let email = email.trim().to_lowercase();
        let user = {
            let accounts = lock(&self.accounts)?;
            match accounts.get(&email) {
                Some(account) if account.password == password => account.user.clone(),
                _ => return Err(StoreError::InvalidCredentials),
            }
        };

        self.state.send_replace(Some(user.clone()));
        Ok(user)
    }

    async fn logout(&self) -> Result<()> {
        self.state.send_replace(None);
        Ok(())
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<AuthUser>> {
        self.state.subscribe()
    }
}

// ============================================================================
// Session storage
// ============================================================================

/// In-memory session storage
#[derive(Clone, Default)]
pub struct MemorySessionStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries().remove(key);
    }
}

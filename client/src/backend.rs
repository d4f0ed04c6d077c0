use std::sync::Arc;

use pokedeck_store::{
    Accounts, EditSessionStore, IdentityProvider, MemoryIdentity, MemorySessionStorage,
    MemoryTeamStore, MemoryUserStore, SessionStorage, TeamGateway, TeamStore, UserStore,
};

/// Handles to the external services the team builder talks to
#[derive(Clone)]
pub struct Backend {
    pub teams: Arc<dyn TeamStore>,
    pub users: Arc<dyn UserStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub session: Arc<dyn SessionStorage>,
}

impl Backend {
    /// Everything in memory; nothing outlives the process
    pub fn in_memory() -> Self {
        Self {
            teams: Arc::new(MemoryTeamStore::new()),
            users: Arc::new(MemoryUserStore::new()),
            identity: Arc::new(MemoryIdentity::new()),
            session: Arc::new(MemorySessionStorage::new()),
        }
    }

    pub fn gateway(&self) -> TeamGateway {
        TeamGateway::new(self.teams.clone())
    }

    pub fn accounts(&self) -> Accounts {
        Accounts::new(self.identity.clone(), self.users.clone())
    }

    pub fn edit_sessions(&self) -> EditSessionStore {
        EditSessionStore::new(self.session.clone())
    }
}

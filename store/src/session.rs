use std::sync::Arc;

use pokedeck_team::{EDIT_SESSION_KEY, EditSession};

use crate::Result;
use crate::traits::SessionStorage;

/// Typed access to the single edit-session entry in session storage
#[derive(Clone)]
pub struct EditSessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl EditSessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Read the stored session. An unreadable entry is dropped.
    pub fn load(&self) -> Option<EditSession> {
        let raw = self.storage.get(EDIT_SESSION_KEY)?;

        match EditSession::from_json(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable edit session");
                self.storage.remove(EDIT_SESSION_KEY);
                None
            }
        }
    }

    /// Replace the stored session
    pub fn save(&self, session: &EditSession) -> Result<()> {
        let json = session.to_json()?;
        self.storage.set(EDIT_SESSION_KEY, json);
        tracing::trace!(team_id = %session.team_id, "Stored edit session");
        Ok(())
    }

    pub fn clear(&self) {
        self.storage.remove(EDIT_SESSION_KEY);
    }

    pub fn exists(&self) -> bool {
        self.storage.get(EDIT_SESSION_KEY).is_some()
    }
}

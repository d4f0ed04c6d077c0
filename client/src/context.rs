//! TeamContext - the team builder as the application sees it

use std::sync::Arc;

use pokedeck_catalog::PokemonRecord;
use pokedeck_store::{AuthUser, EditSessionStore, IdentityProvider, StoreError, TeamGateway};
use pokedeck_team::{
    ActionResult, EditExit, Locale, Mode, Notice, TEAM_SIZE, TeamBuilder, TeamError, TeamPatch,
    TeamRecord, restore, snapshot,
};

use crate::ClientError;
use crate::backend::Backend;
use crate::notify::{Notifier, Toast, ToastLevel};

/// The single authoritative team-builder state, wired to its services.
///
/// Local edits go straight to the [`TeamBuilder`]. While a saved team is
/// being edited, every change is written to the document store first and
/// then mirrored into the edit session, so a reload can pick it up again
/// through [`TeamContext::resume_session`].
///
/// No action returns an error: the outcome comes back as an
/// [`ActionResult`] (or a bool) and is also sent to the [`Notifier`].
pub struct TeamContext {
    builder: TeamBuilder,
    gateway: TeamGateway,
    sessions: EditSessionStore,
    identity: Arc<dyn IdentityProvider>,
    notifier: Arc<dyn Notifier>,
}

impl TeamContext {
    pub fn new(backend: &Backend, notifier: Arc<dyn Notifier>, locale: Locale) -> Self {
        Self {
            builder: TeamBuilder::new(locale),
            gateway: backend.gateway(),
            sessions: backend.edit_sessions(),
            identity: backend.identity.clone(),
            notifier,
        }
    }

    pub fn builder(&self) -> &TeamBuilder {
        &self.builder
    }

    pub fn mode(&self) -> Mode {
        self.builder.mode()
    }

    pub fn locale(&self) -> Locale {
        self.builder.locale()
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.builder.set_locale(locale);
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.identity.current_user()
    }

    pub fn gateway(&self) -> &TeamGateway {
        &self.gateway
    }

    // === Local operations ===

    /// Start a new team, dropping any stored edit session
    pub fn start_creating(&mut self) {
        self.sessions.clear();
        self.builder.start_creating();
    }

    /// Add to the local team without touching the store
    pub fn add_to_team(&mut self, pokemon: Arc<PokemonRecord>) -> ActionResult {
        let name = pokemon.display_name();
        match self.builder.add_to_team(pokemon) {
            Ok(_) => self.succeed(Notice::PokemonAdded(name)),
            Err(e) => self.reject(e),
        }
    }

    /// Rename locally; checked when saving
    pub fn update_team_name(&mut self, name: impl Into<String>) {
        self.builder.update_team_name(name);
    }

    /// Leave editing mode and drop the edit session
    pub fn stop_editing(&mut self, exit: EditExit) {
        if self.builder.mode().is_editing() {
            self.builder.stop_editing(exit);
        }
        self.sessions.clear();
    }

    /// Drop the edit session and start over with a blank team
    pub fn force_reset_state(&mut self) {
        self.sessions.clear();
        self.builder.reset();
        tracing::debug!("Team state reset");
    }

    // === Store-backed operations ===

    /// Load one of the signed-in user's teams for editing.
    ///
    /// Returns false, changing nothing, when signed out or when the team
    /// is not one of the user's.
    pub async fn start_editing(&mut self, team_id: &str) -> bool {
        let Some(user) = self.identity.current_user() else {
            self.reject(TeamError::NotAuthenticated);
            return false;
        };

        let team = match self.gateway.team_for_user(&user.uid, team_id).await {
            Ok(Some(team)) => team,
            Ok(None) => {
                self.reject(TeamError::TeamNotFound(team_id.to_string()));
                return false;
            }
            Err(e) => {
                self.fail(Notice::LoadFailed, &e);
                return false;
            }
        };

        self.builder.begin_editing(team);
        self.sync_session();
        true
    }

    /// Add a Pokemon picked from the catalog.
    ///
    /// In editing mode the new lineup is written to the store right away;
    /// if that fails the local add is undone.
    pub async fn handle_add_pokemon(&mut self, pokemon: Arc<PokemonRecord>) -> ActionResult {
        if !self.builder.mode().is_editing() {
            return self.add_to_team(pokemon);
        }

        if self.builder.team_count() >= TEAM_SIZE {
            return self.reject(TeamError::TeamFull);
        }

        let Some(team_id) = self.builder.current_team_id().map(str::to_string) else {
            return self.reject(TeamError::NotEditing);
        };

        let name = pokemon.display_name();
        let previous = self.builder.clone();
        if let Err(e) = self.builder.add_to_team(pokemon) {
            return self.reject(e);
        }

        if let Err(e) = self.persist_lineup(&team_id).await {
            self.builder = previous;
            return self.fail(Notice::UpdateFailed, &e);
        }

        self.succeed(Notice::PokemonAdded(name))
    }

    /// Empty a slot; in editing mode the new lineup is written to the store
    pub async fn remove_from_team(&mut self, index: usize) -> ActionResult {
        let editing_id = match self.builder.mode() {
            Mode::Editing => self.builder.current_team_id().map(str::to_string),
            _ => None,
        };

        let previous = self.builder.clone();
        let removed = match self.builder.remove_from_team(index) {
            Ok(Some(removed)) => removed,
            Ok(None) => return ActionResult::ok(String::new()),
            Err(e) => return self.reject(e),
        };

        if let Some(team_id) = editing_id {
            if let Err(e) = self.persist_lineup(&team_id).await {
                self.builder = previous;
                return self.fail(Notice::UpdateFailed, &e);
            }
        }

        self.succeed(Notice::PokemonRemoved(removed.display_name()))
    }

    /// Write the local name of the team being edited to the store
    pub async fn rename_team(&mut self) -> ActionResult {
        let Some((team_id, saved_name)) = self.editing_target() else {
            return self.reject(TeamError::NotEditing);
        };
        let Some(user) = self.identity.current_user() else {
            return self.reject(TeamError::NotAuthenticated);
        };

        let name = match self.builder.validate_name() {
            Ok(name) => name,
            Err(e) => return self.reject(e),
        };

        if name != saved_name {
            match self.gateway.check_team_name_exists(&user.uid, &name).await {
                Ok(true) => return self.reject(TeamError::DuplicateName(name)),
                Ok(false) => {}
                Err(e) => return self.fail(Notice::UpdateFailed, &e),
            }
        }

        let patch = TeamPatch::rename(name.clone());
        if let Err(e) = self.gateway.update_team(&team_id, &patch).await {
            return self.fail(Notice::UpdateFailed, &e);
        }

        self.builder.update_team_name(name);
        self.builder.apply_persisted(&patch);
        self.sync_session();
        self.succeed(Notice::TeamUpdated)
    }

    /// Save the team.
    ///
    /// Checked in order: a signed-in user, a real name, six Pokemon, and a
    /// name the user has not used yet. The first failed check is reported and
    /// nothing is written. On success the builder starts over with a blank
    /// team. Saving while editing updates the edited team instead of creating
    /// a new one.
    pub async fn save_team(&mut self) -> ActionResult {
        let Some(user) = self.identity.current_user() else {
            return self.reject(TeamError::NotAuthenticated);
        };

        let name = match self.builder.validate_for_save() {
            Ok(name) => name,
            Err(e) => return self.reject(e),
        };

        let editing = self.editing_target();
        let name_changed = editing
            .as_ref()
            .is_none_or(|(_, saved_name)| *saved_name != name);

        if name_changed {
            match self.gateway.check_team_name_exists(&user.uid, &name).await {
                Ok(true) => return self.reject(TeamError::DuplicateName(name)),
                Ok(false) => {}
                Err(e) => return self.fail(Notice::SaveFailed, &e),
            }
        }

        let pokemon = self.builder.slots().to_stored();
        let written = match editing {
            Some((team_id, _)) => {
                let patch = TeamPatch {
                    name: Some(name.clone()),
                    pokemon: Some(pokemon),
                    favorite: None,
                };
                self.gateway.update_team(&team_id, &patch).await
            }
            None => self
                .gateway
                .create_team(&user.uid, &name, pokemon)
                .await
                .map(|_| ()),
        };

        if let Err(e) = written {
            return self.fail(Notice::SaveFailed, &e);
        }

        self.sessions.clear();
        self.builder.reset();
        self.succeed(Notice::TeamSaved(name))
    }

    /// Flip a team's favorite flag
    pub async fn toggle_favorite(&mut self, team_id: &str) -> ActionResult {
        match self.gateway.toggle_favorite(team_id).await {
            Ok(favorite) => {
                if self.builder.current_team_id() == Some(team_id) {
                    self.builder.apply_persisted(&TeamPatch::favorite(favorite));
                    self.sync_session();
                }
                self.succeed(if favorite {
                    Notice::FavoriteAdded
                } else {
                    Notice::FavoriteRemoved
                })
            }
            Err(e) => self.fail(Notice::UpdateFailed, &e),
        }
    }

    /// Delete a team (confirmation is up to the caller)
    pub async fn delete_team(&mut self, team_id: &str) -> ActionResult {
        if let Err(e) = self.gateway.delete_team(team_id).await {
            return self.fail(Notice::DeleteFailed, &e);
        }

        if self.builder.current_team_id() == Some(team_id) {
            self.stop_editing(EditExit::Terminal);
        }
        self.succeed(Notice::TeamDeleted)
    }

    /// The signed-in user's teams, newest first
    pub async fn my_teams(&self) -> Result<Vec<TeamRecord>, ClientError> {
        let user = self.identity.current_user().ok_or(TeamError::NotAuthenticated)?;
        Ok(self.gateway.teams_for_user(&user.uid).await?)
    }

    /// The signed-in user's favorite teams, newest first
    pub async fn favorite_teams(&self) -> Result<Vec<TeamRecord>, ClientError> {
        let user = self.identity.current_user().ok_or(TeamError::NotAuthenticated)?;
        Ok(self.gateway.favorite_teams(&user.uid).await?)
    }

    /// Number of saved teams across all users
    pub async fn total_teams(&self) -> Result<usize, ClientError> {
        Ok(self.gateway.count_teams().await?)
    }

    // === Session resume ===

    /// Pick up a stored edit session.
    ///
    /// Call on start-up and on every navigation. Does nothing while signed
    /// out or when already editing. A session left by another user is
    /// dropped.
    pub fn resume_session(&mut self) -> bool {
        let Some(session) = self.sessions.load() else {
            return false;
        };
        let Some(user) = self.identity.current_user() else {
            return false;
        };
        if self.builder.mode().is_editing() {
            return false;
        }

        if session.team.user_id != user.uid {
            tracing::warn!(team_id = %session.team_id, "Dropping edit session of another user");
            self.sessions.clear();
            return false;
        }

        let team_id = session.team_id.clone();
        if !restore(&mut self.builder, session) {
            self.sessions.clear();
            return false;
        }

        tracing::debug!(team_id = %team_id, "Resumed edit session");
        true
    }

    // === Helpers ===

    fn editing_target(&self) -> Option<(String, String)> {
        if !self.builder.mode().is_editing() {
            return None;
        }
        let team_id = self.builder.current_team_id()?.to_string();
        let saved_name = self.builder.editing_team()?.name.clone();
        Some((team_id, saved_name))
    }

    /// Write the current lineup of the edited team, then mirror it
    async fn persist_lineup(&mut self, team_id: &str) -> Result<(), StoreError> {
        let patch = TeamPatch::replace_pokemon(self.builder.slots().to_stored());
        self.gateway.update_team(team_id, &patch).await?;

        self.builder.apply_persisted(&patch);
        self.sync_session();
        Ok(())
    }

    /// Make the stored edit session match the builder
    fn sync_session(&self) {
        match snapshot(&self.builder) {
            Some(session) => {
                if let Err(e) = self.sessions.save(&session) {
                    tracing::warn!(error = %e, "Failed to store edit session");
                }
            }
            None => self.sessions.clear(),
        }
    }

    fn toast(&self, level: ToastLevel, message: &str) {
        self.notifier.notify(&Toast {
            level,
            message: message.to_string(),
        });
    }

    fn succeed(&self, notice: Notice) -> ActionResult {
        let result = ActionResult::from_notice(&notice, self.locale());
        self.toast(ToastLevel::Success, &result.message);
        result
    }

    fn reject(&self, error: TeamError) -> ActionResult {
        tracing::warn!(error = %error, "Team action rejected");
        let result = ActionResult::from_error(&error, self.locale());
        self.toast(ToastLevel::Warning, &result.message);
        result
    }

    fn fail(&self, notice: Notice, error: &StoreError) -> ActionResult {
        tracing::error!(error = %error, "Team action failed");
        let result = ActionResult::from_notice(&notice, self.locale());
        self.toast(ToastLevel::Error, &result.message);
        result
    }
}

#[cfg(test)]
mod tests {
    use pokedeck_store::{MemoryIdentity, MemorySessionStorage, MemoryTeamStore, MemoryUserStore};
    use pokedeck_team::StoredPokemon;

    use super::*;
    use crate::notify::RecordingNotifier;

    struct Fixture {
        backend: Backend,
        teams: Arc<MemoryTeamStore>,
        notifier: Arc<RecordingNotifier>,
    }

    impl Fixture {
        fn new() -> Self {
            let teams = Arc::new(MemoryTeamStore::new());
            let backend = Backend {
                teams: teams.clone(),
                users: Arc::new(MemoryUserStore::new()),
                identity: Arc::new(MemoryIdentity::new()),
                session: Arc::new(MemorySessionStorage::new()),
            };
            Self {
                backend,
                teams,
                notifier: Arc::new(RecordingNotifier::new()),
            }
        }

        fn context(&self) -> TeamContext {
            TeamContext::new(&self.backend, self.notifier.clone(), Locale::En)
        }

        async fn sign_in(&self) -> AuthUser {
            self.backend
                .identity
                .register("ash@example.com", "pikachu", "Ash")
                .await
                .unwrap()
        }

        async fn saved_team(&self, user: &AuthUser, name: &str, count: u32) -> TeamRecord {
            let pokemon = (1..=count)
                .map(|id| StoredPokemon::from_record(&create_test_pokemon(id)))
                .collect();
            self.backend
                .gateway()
                .create_team(&user.uid, name, pokemon)
                .await
                .unwrap()
        }
    }

    fn create_test_pokemon(id: u32) -> PokemonRecord {
        PokemonRecord::new(id, format!("mon-{id}")).with_types(["normal"])
    }

    fn mon(id: u32) -> Arc<PokemonRecord> {
        Arc::new(create_test_pokemon(id))
    }

    #[test]
    fn test_add_from_idle_starts_creating() {
        let fixture = Fixture::new();
        let mut context = fixture.context();

        let result = context.add_to_team(mon(25));
        assert!(result.success);
        assert_eq!(result.message, "Mon 25 added to your team");
        assert_eq!(context.mode(), Mode::Creating);

        let toast = fixture.notifier.last().unwrap();
        assert_eq!(toast.level, ToastLevel::Success);
    }

    #[test]
    fn test_duplicate_add_is_rejected_with_warning() {
        let fixture = Fixture::new();
        let mut context = fixture.context();

        context.add_to_team(mon(25));
        let result = context.add_to_team(mon(25));

        assert!(!result.success);
        assert_eq!(context.builder().team_count(), 1);
        assert_eq!(fixture.notifier.last().unwrap().level, ToastLevel::Warning);
    }

    #[tokio::test]
    async fn test_start_editing_requires_sign_in() {
        let fixture = Fixture::new();
        let mut context = fixture.context();

        assert!(!context.start_editing("missing").await);
        assert_eq!(context.mode(), Mode::Idle);
        assert!(!fixture.backend.edit_sessions().exists());
    }

    #[tokio::test]
    async fn test_start_editing_loads_team_and_session() {
        let fixture = Fixture::new();
        let user = fixture.sign_in().await;
        let team = fixture.saved_team(&user, "Rivals", 3).await;
        let mut context = fixture.context();

        assert!(context.start_editing(&team.id).await);
        assert_eq!(context.mode(), Mode::Editing);
        assert_eq!(context.builder().name(), "Rivals");
        assert_eq!(context.builder().team_count(), 3);

        let session = fixture.backend.edit_sessions().load().unwrap();
        assert_eq!(session.team_id, team.id);
    }

    #[tokio::test]
    async fn test_start_editing_unknown_team() {
        let fixture = Fixture::new();
        fixture.sign_in().await;
        let mut context = fixture.context();

        assert!(!context.start_editing("nope").await);
        assert_eq!(context.mode(), Mode::Idle);
        assert_eq!(fixture.notifier.last().unwrap().level, ToastLevel::Warning);
    }

    #[tokio::test]
    async fn test_editing_add_persists_lineup() {
        let fixture = Fixture::new();
        let user = fixture.sign_in().await;
        let team = fixture.saved_team(&user, "Rivals", 3).await;
        let mut context = fixture.context();
        context.start_editing(&team.id).await;

        let result = context.handle_add_pokemon(mon(50)).await;
        assert!(result.success);

        let stored = fixture.backend.gateway().team_for_user(&user.uid, &team.id).await;
        let stored = stored.unwrap().unwrap();
        assert_eq!(stored.pokemon.len(), 4);
        assert!(stored.contains(50));

        let session = fixture.backend.edit_sessions().load().unwrap();
        assert_eq!(session.team.pokemon.len(), 4);
    }

    #[tokio::test]
    async fn test_editing_add_rolls_back_when_offline() {
        let fixture = Fixture::new();
        let user = fixture.sign_in().await;
        let team = fixture.saved_team(&user, "Rivals", 3).await;
        let mut context = fixture.context();
        context.start_editing(&team.id).await;
        let before = context.builder().clone();

        fixture.teams.set_offline(true);
        let result = context.handle_add_pokemon(mon(50)).await;

        assert!(!result.success);
        assert_eq!(result.message, "Could not update the team");
        assert_eq!(context.builder(), &before);
        assert_eq!(fixture.notifier.last().unwrap().level, ToastLevel::Error);
    }

    #[tokio::test]
    async fn test_editing_add_rejected_when_full() {
        let fixture = Fixture::new();
        let user = fixture.sign_in().await;
        let team = fixture.saved_team(&user, "Full", 6).await;
        let mut context = fixture.context();
        context.start_editing(&team.id).await;
        let writes = fixture.teams.writes();

        let result = context.handle_add_pokemon(mon(99)).await;
        assert!(!result.success);
        assert_eq!(fixture.teams.writes(), writes);
    }

    #[tokio::test]
    async fn test_remove_last_pokemon_leaves_editing() {
        let fixture = Fixture::new();
        let user = fixture.sign_in().await;
        let team = fixture.saved_team(&user, "Solo", 1).await;
        let mut context = fixture.context();
        context.start_editing(&team.id).await;

        let result = context.remove_from_team(0).await;
        assert!(result.success);
        assert_eq!(context.mode(), Mode::Creating);
        assert!(context.builder().has_default_name());
        assert!(!fixture.backend.edit_sessions().exists());

        let stored = fixture.backend.gateway().team_for_user(&user.uid, &team.id).await;
        assert!(stored.unwrap().unwrap().pokemon.is_empty());
    }

    #[tokio::test]
    async fn test_remove_empty_slot_is_silent() {
        let fixture = Fixture::new();
        let mut context = fixture.context();

        let result = context.remove_from_team(3).await;
        assert_eq!(result, ActionResult::ok(""));
        assert!(fixture.notifier.toasts().is_empty());
    }

    #[tokio::test]
    async fn test_rename_team_checks_duplicates() {
        let fixture = Fixture::new();
        let user = fixture.sign_in().await;
        fixture.saved_team(&user, "Taken", 2).await;
        let team = fixture.saved_team(&user, "Rivals", 2).await;
        let mut context = fixture.context();
        context.start_editing(&team.id).await;

        context.update_team_name("Taken");
        let result = context.rename_team().await;
        assert!(!result.success);

        context.update_team_name("  Aces ");
        let result = context.rename_team().await;
        assert!(result.success);
        assert_eq!(context.builder().editing_team().unwrap().name, "Aces");

        let session = fixture.backend.edit_sessions().load().unwrap();
        assert_eq!(session.team.name, "Aces");
    }

    #[tokio::test]
    async fn test_save_rejects_default_name() {
        let fixture = Fixture::new();
        fixture.sign_in().await;
        let mut context = fixture.context();
        context.start_creating();
        for id in 1..=6 {
            context.add_to_team(mon(id));
        }

        let result = context.save_team().await;
        assert_eq!(result.message, "Please choose a name other than the default one");
        assert_eq!(fixture.teams.writes(), 0);
    }

    #[tokio::test]
    async fn test_save_requires_sign_in() {
        let fixture = Fixture::new();
        let mut context = fixture.context();
        for id in 1..=6 {
            context.add_to_team(mon(id));
        }
        context.update_team_name("Aces");

        let result = context.save_team().await;
        assert!(!result.success);
        assert_eq!(context.builder().team_count(), 6);
        assert_eq!(fixture.teams.writes(), 0);
    }

    #[tokio::test]
    async fn test_save_creates_and_resets() {
        let fixture = Fixture::new();
        let user = fixture.sign_in().await;
        let mut context = fixture.context();
        for id in 1..=6 {
            context.add_to_team(mon(id));
        }
        context.update_team_name("Aces");

        let result = context.save_team().await;
        assert!(result.success);
        assert_eq!(result.message, "Team \"Aces\" saved");
        assert_eq!(context.mode(), Mode::Creating);
        assert!(context.builder().is_empty());

        let teams = context.my_teams().await.unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].user_id, user.uid);
        assert!(!teams[0].favorite);
    }

    #[tokio::test]
    async fn test_save_rejects_duplicate_name() {
        let fixture = Fixture::new();
        let user = fixture.sign_in().await;
        fixture.saved_team(&user, "Aces", 6).await;
        let writes = fixture.teams.writes();
        let mut context = fixture.context();
        for id in 10..=15 {
            context.add_to_team(mon(id));
        }
        context.update_team_name("Aces");

        let result = context.save_team().await;
        assert_eq!(result.message, "You already have a team named \"Aces\"");
        assert_eq!(fixture.teams.writes(), writes);
    }

    #[tokio::test]
    async fn test_save_while_editing_updates_in_place() {
        let fixture = Fixture::new();
        let user = fixture.sign_in().await;
        let team = fixture.saved_team(&user, "Rivals", 5).await;
        let mut context = fixture.context();
        context.start_editing(&team.id).await;

        context.handle_add_pokemon(mon(40)).await;
        let result = context.save_team().await;
        assert!(result.success);

        let teams = context.my_teams().await.unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].pokemon.len(), 6);
        assert!(!fixture.backend.edit_sessions().exists());
    }

    #[tokio::test]
    async fn test_resume_session_in_new_context() {
        let fixture = Fixture::new();
        let user = fixture.sign_in().await;
        let team = fixture.saved_team(&user, "Rivals", 4).await;

        let mut first = fixture.context();
        first.start_editing(&team.id).await;
        first.remove_from_team(1).await;

        let mut second = fixture.context();
        assert!(second.resume_session());
        assert_eq!(second.mode(), Mode::Editing);
        assert_eq!(second.builder().slots(), first.builder().slots());
        assert!(!second.resume_session());
    }

    #[tokio::test]
    async fn test_resume_session_needs_user() {
        let fixture = Fixture::new();
        let user = fixture.sign_in().await;
        let team = fixture.saved_team(&user, "Rivals", 2).await;
        fixture.context().start_editing(&team.id).await;

        fixture.backend.identity.logout().await.unwrap();
        let mut context = fixture.context();
        assert!(!context.resume_session());
        assert_eq!(context.mode(), Mode::Idle);
        assert!(fixture.backend.edit_sessions().exists());
    }

    #[tokio::test]
    async fn test_stop_editing_clears_session() {
        let fixture = Fixture::new();
        let user = fixture.sign_in().await;
        let team = fixture.saved_team(&user, "Rivals", 2).await;
        let mut context = fixture.context();
        context.start_editing(&team.id).await;

        context.stop_editing(EditExit::Intermediate);
        assert_eq!(context.mode(), Mode::Creating);
        assert!(!fixture.backend.edit_sessions().exists());
    }

    #[tokio::test]
    async fn test_toggle_favorite_and_delete() {
        let fixture = Fixture::new();
        let user = fixture.sign_in().await;
        let team = fixture.saved_team(&user, "Rivals", 2).await;
        let mut context = fixture.context();
        context.start_editing(&team.id).await;

        let result = context.toggle_favorite(&team.id).await;
        assert_eq!(result.message, "Added to favorites");
        assert!(context.builder().editing_team().unwrap().favorite);
        assert_eq!(context.favorite_teams().await.unwrap().len(), 1);

        let result = context.delete_team(&team.id).await;
        assert!(result.success);
        assert_eq!(context.mode(), Mode::Idle);
        assert_eq!(context.total_teams().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_save_while_editing_rejects_other_teams_name() {
        let fixture = Fixture::new();
        let user = fixture.sign_in().await;
        fixture.saved_team(&user, "Aces", 6).await;
        let team = fixture.saved_team(&user, "Rivals", 6).await;
        let mut context = fixture.context();
        context.start_editing(&team.id).await;
        let writes = fixture.teams.writes();

        context.update_team_name("Aces");
        let result = context.save_team().await;

        assert_eq!(result.message, "You already have a team named \"Aces\"");
        assert_eq!(context.mode(), Mode::Editing);
        assert_eq!(fixture.teams.writes(), writes);
    }

    #[tokio::test]
    async fn test_force_reset_state_clears_session() {
        let fixture = Fixture::new();
        let user = fixture.sign_in().await;
        let team = fixture.saved_team(&user, "Rivals", 3).await;
        let mut context = fixture.context();
        context.start_editing(&team.id).await;
        assert!(fixture.backend.edit_sessions().exists());

        context.force_reset_state();

        assert!(!fixture.backend.edit_sessions().exists());
        assert_eq!(context.mode(), Mode::Creating);
        assert!(context.builder().is_empty());
        assert_eq!(context.builder().current_team_id(), None);
        assert!(context.builder().has_default_name());
    }

    #[tokio::test]
    async fn test_resume_session_of_other_user_is_dropped() {
        let fixture = Fixture::new();
        let ash = fixture.sign_in().await;
        let team = fixture.saved_team(&ash, "Rivals", 3).await;
        fixture.context().start_editing(&team.id).await;

        fixture
            .backend
            .identity
            .register("gary@example.com", "eevee", "Gary")
            .await
            .unwrap();
        let mut context = fixture.context();

        assert!(!context.resume_session());
        assert_eq!(context.mode(), Mode::Idle);
        assert!(!fixture.backend.edit_sessions().exists());
    }

    #[tokio::test]
    async fn test_my_teams_reports_store_failure() {
        let fixture = Fixture::new();
        fixture.sign_in().await;
        fixture.teams.set_offline(true);
        let context = fixture.context();

        let err = context.my_teams().await.unwrap_err();
        assert!(matches!(err, ClientError::Store(StoreError::Backend(_))));
    }

    #[tokio::test]
    async fn test_my_teams_requires_sign_in() {
        let fixture = Fixture::new();
        let context = fixture.context();

        let err = context.my_teams().await.unwrap_err();
        assert!(matches!(err, ClientError::Rejected(TeamError::NotAuthenticated)));
    }
}

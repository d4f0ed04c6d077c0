//! TeamBuilder - the team editing state machine

use std::sync::Arc;

use chrono::Utc;
use pokedeck_catalog::PokemonRecord;

use crate::error::TeamError;
use crate::locale::{Locale, is_default_team_name};
use crate::mode::{EditExit, Mode};
use crate::record::{TeamPatch, TeamRecord};
use crate::slots::TeamSlots;

/// In-progress team plus the mode it is being built in.
///
/// Everything here is synchronous and local. Operations that also touch the
/// document store (editing a saved team, saving) live in the client crate
/// and drive this type.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamBuilder {
    mode: Mode,
    slots: TeamSlots,
    name: String,

    /// Id of the saved team being edited (editing mode only)
    current_team_id: Option<String>,

    /// Last known persisted state of that team
    editing_team: Option<TeamRecord>,

    locale: Locale,
}

impl TeamBuilder {
    /// Create an idle builder
    pub fn new(locale: Locale) -> Self {
        Self {
            mode: Mode::Idle,
            slots: TeamSlots::new(),
            name: locale.default_team_name().to_string(),
            current_team_id: None,
            editing_team: None,
            locale,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn slots(&self) -> &TeamSlots {
        &self.slots
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn current_team_id(&self) -> Option<&str> {
        self.current_team_id.as_deref()
    }

    pub fn editing_team(&self) -> Option<&TeamRecord> {
        self.editing_team.as_ref()
    }

    /// Number of filled slots
    pub fn team_count(&self) -> usize {
        self.slots.count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, pokemon_id: u32) -> bool {
        self.slots.contains(pokemon_id)
    }

    /// Whether the current name is still a default name
    pub fn has_default_name(&self) -> bool {
        is_default_team_name(&self.name)
    }

    /// Switch locale, carrying an untouched default name over
    pub fn set_locale(&mut self, locale: Locale) {
        if self.has_default_name() {
            self.name = locale.default_team_name().to_string();
        }
        self.locale = locale;
    }

    /// Start a brand-new team: six empty slots and the default name
    pub fn start_creating(&mut self) {
        self.reset_to(Mode::Creating);
        tracing::debug!("Started creating a team");
    }

    /// Load a saved team for editing
    pub fn begin_editing(&mut self, team: TeamRecord) {
        tracing::debug!(team_id = %team.id, pokemon = team.pokemon.len(), "Editing team");

        self.mode = Mode::Editing;
        self.slots = TeamSlots::from_stored(&team.pokemon);
        self.name = team.name.clone();
        self.current_team_id = Some(team.id.clone());
        self.editing_team = Some(team);
    }

    /// Leave editing mode; the target mode depends on where the user goes
    pub fn stop_editing(&mut self, exit: EditExit) {
        self.reset_to(exit.target_mode());
        tracing::debug!(mode = self.mode.as_str(), "Stopped editing");
    }

    /// Blank team in creating mode (after a save, or on forced cleanup)
    pub fn reset(&mut self) {
        self.reset_to(Mode::Creating);
    }

    fn reset_to(&mut self, mode: Mode) {
        self.mode = mode;
        self.slots.clear();
        self.name = self.locale.default_team_name().to_string();
        self.current_team_id = None;
        self.editing_team = None;
    }

    /// Put a Pokemon in the first empty slot.
    ///
    /// Adding from idle starts a new team implicitly.
    pub fn add_to_team(&mut self, pokemon: Arc<PokemonRecord>) -> Result<usize, TeamError> {
        let name = pokemon.display_name();
        let index = self.slots.insert(pokemon).inspect_err(|e| {
            tracing::warn!(pokemon = %name, error = %e, "Rejected add to team");
        })?;

        if self.mode == Mode::Idle {
            self.mode = Mode::Creating;
        }

        tracing::debug!(pokemon = %name, slot = index, "Added to team");
        Ok(index)
    }

    /// Empty a slot.
    ///
    /// When this empties the whole team the name goes back to the default
    /// and the builder stops tracking the saved team it was editing.
    pub fn remove_from_team(
        &mut self,
        index: usize,
    ) -> Result<Option<Arc<PokemonRecord>>, TeamError> {
        let removed = self.slots.remove(index)?;

        if removed.is_some() && self.slots.is_empty() {
            self.name = self.locale.default_team_name().to_string();
            if self.mode == Mode::Editing {
                self.mode = Mode::Creating;
                self.current_team_id = None;
                self.editing_team = None;
            }
        }

        Ok(removed)
    }

    /// Rename freely; the name is only checked when saving
    pub fn update_team_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Check the name is usable for a saved team, returning it trimmed
    pub fn validate_name(&self) -> Result<String, TeamError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(TeamError::EmptyName);
        }
        if is_default_team_name(name) {
            return Err(TeamError::DefaultName);
        }
        Ok(name.to_string())
    }

    /// Local save preconditions: a real name, then all six slots filled
    pub fn validate_for_save(&self) -> Result<String, TeamError> {
        let name = self.validate_name()?;

        let filled = self.slots.count();
        if !self.slots.is_full() {
            return Err(TeamError::IncompleteTeam { filled });
        }

        Ok(name)
    }

    /// Record a persisted change to the team being edited
    pub fn apply_persisted(&mut self, patch: &TeamPatch) {
        if let Some(team) = self.editing_team.as_mut() {
            patch.apply(team, Utc::now());
        }
    }

    pub(crate) fn resume(&mut self, team: TeamRecord, slots: TeamSlots) {
        self.mode = Mode::Editing;
        self.slots = slots;
        self.name = team.name.clone();
        self.current_team_id = Some(team.id.clone());
        self.editing_team = Some(team);
    }
}

impl Default for TeamBuilder {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

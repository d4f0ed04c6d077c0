//! Resumable edit sessions.
//!
//! While a saved team is being edited, the builder state is mirrored into a
//! single session-storage entry so the edit survives navigation and reloads.
//! [`snapshot`] and [`restore`] are the only two ways across that boundary.

use pokedeck_catalog::PokemonRecord;
use serde::{Deserialize, Serialize};

use crate::builder::TeamBuilder;
use crate::mode::Mode;
use crate::record::TeamRecord;
use crate::slots::TeamSlots;

/// Session storage key holding the serialized [`EditSession`]
pub const EDIT_SESSION_KEY: &str = "pokedeck.editSession";

/// Serialized editing-mode state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSession {
    pub team_id: String,

    /// The edited team, with the current slots and name
    pub team: TeamRecord,

    pub mode: Mode,
    pub is_editing: bool,

    /// All six slots including gaps. Older entries without it fall back to
    /// `team.pokemon`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<Option<PokemonRecord>>,
}

impl EditSession {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Whether this entry describes an active edit
    pub fn is_active(&self) -> bool {
        self.is_editing && self.mode == Mode::Editing && self.team.id == self.team_id
    }
}

/// Capture the builder's editing state; `None` outside editing mode
pub fn snapshot(builder: &TeamBuilder) -> Option<EditSession> {
    if builder.mode() != Mode::Editing {
        return None;
    }

    let team_id = builder.current_team_id()?.to_string();
    let mut team = builder.editing_team()?.clone();
    team.name = builder.name().to_string();
    team.pokemon = builder.slots().to_stored();

    Some(EditSession {
        team_id,
        team,
        mode: Mode::Editing,
        is_editing: true,
        slots: builder.slots().positions(),
    })
}

/// Put a builder back into the captured editing state.
///
/// Returns false, leaving the builder untouched, if the entry does not
/// describe an active edit.
pub fn restore(builder: &mut TeamBuilder, session: EditSession) -> bool {
    if !session.is_active() {
        return false;
    }

    let slots = if session.slots.is_empty() {
        TeamSlots::from_stored(&session.team.pokemon)
    } else {
        TeamSlots::from_positions(session.slots)
    };

    builder.resume(session.team, slots);
    true
}

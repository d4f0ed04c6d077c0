//! Localized notifications for completed or failed team actions

use serde::{Deserialize, Serialize};

use crate::error::TeamError;
use crate::locale::Locale;

/// Toast-style notification shown after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    PokemonAdded(String),
    PokemonRemoved(String),
    TeamSaved(String),
    TeamUpdated,
    TeamDeleted,
    FavoriteAdded,
    FavoriteRemoved,
    /// Backend failure while creating a team
    SaveFailed,
    /// Backend failure while changing a saved team
    UpdateFailed,
    DeleteFailed,
    LoadFailed,
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notice::SaveFailed | Notice::UpdateFailed | Notice::DeleteFailed | Notice::LoadFailed
        )
    }

    pub fn text(&self, locale: Locale) -> String {
        match (self, locale) {
            (Notice::PokemonAdded(name), Locale::En) => format!("{name} added to your team"),
            (Notice::PokemonAdded(name), Locale::Es) => format!("{name} se agregó a tu equipo"),
            (Notice::PokemonRemoved(name), Locale::En) => format!("{name} removed from your team"),
            (Notice::PokemonRemoved(name), Locale::Es) => {
                format!("{name} se eliminó de tu equipo")
            }
            (Notice::TeamSaved(name), Locale::En) => format!("Team \"{name}\" saved"),
            (Notice::TeamSaved(name), Locale::Es) => format!("Equipo \"{name}\" guardado"),
            (Notice::TeamUpdated, Locale::En) => "Team updated".to_string(),
            (Notice::TeamUpdated, Locale::Es) => "Equipo actualizado".to_string(),
            (Notice::TeamDeleted, Locale::En) => "Team deleted".to_string(),
            (Notice::TeamDeleted, Locale::Es) => "Equipo eliminado".to_string(),
            (Notice::FavoriteAdded, Locale::En) => "Added to favorites".to_string(),
            (Notice::FavoriteAdded, Locale::Es) => "Agregado a favoritos".to_string(),
            (Notice::FavoriteRemoved, Locale::En) => "Removed from favorites".to_string(),
            (Notice::FavoriteRemoved, Locale::Es) => "Eliminado de favoritos".to_string(),
            (Notice::SaveFailed, Locale::En) => "Could not save the team".to_string(),
            (Notice::SaveFailed, Locale::Es) => "No se pudo guardar el equipo".to_string(),
            (Notice::UpdateFailed, Locale::En) => "Could not update the team".to_string(),
            (Notice::UpdateFailed, Locale::Es) => "No se pudo actualizar el equipo".to_string(),
            (Notice::DeleteFailed, Locale::En) => "Could not delete the team".to_string(),
            (Notice::DeleteFailed, Locale::Es) => "No se pudo eliminar el equipo".to_string(),
            (Notice::LoadFailed, Locale::En) => "Could not load your teams".to_string(),
            (Notice::LoadFailed, Locale::Es) => "No se pudieron cargar tus equipos".to_string(),
        }
    }
}

/// Outcome handed back to the UI for every user action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
}

impl ActionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    pub fn from_notice(notice: &Notice, locale: Locale) -> Self {
        Self {
            success: !notice.is_error(),
            message: notice.text(locale),
        }
    }

    pub fn from_error(error: &TeamError, locale: Locale) -> Self {
        Self::failed(error.message(locale))
    }
}

//! Saved team documents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::stored::StoredPokemon;

/// A team as persisted in the `teams` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    pub id: String,
    pub user_id: String,
    pub name: String,

    /// Up to six simplified Pokemon, in slot order
    pub pokemon: Vec<StoredPokemon>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    #[serde(default)]
    pub favorite: bool,
}

impl TeamRecord {
    pub fn contains(&self, pokemon_id: u32) -> bool {
        self.pokemon.iter().any(|p| p.id == pokemon_id)
    }
}

/// Payload for creating a team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub user_id: String,
    pub name: String,
    pub pokemon: Vec<StoredPokemon>,
}

/// Partial update of a saved team.
///
/// No business rules are checked here; whoever builds the patch is
/// responsible for it being valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pokemon: Option<Vec<StoredPokemon>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

impl TeamPatch {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn replace_pokemon(pokemon: Vec<StoredPokemon>) -> Self {
        Self {
            pokemon: Some(pokemon),
            ..Self::default()
        }
    }

    pub fn favorite(favorite: bool) -> Self {
        Self {
            favorite: Some(favorite),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.pokemon.is_none() && self.favorite.is_none()
    }

    /// Apply the present fields to `record` and stamp `updated_at`
    pub fn apply(&self, record: &mut TeamRecord, now: DateTime<Utc>) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(pokemon) = &self.pokemon {
            record.pokemon = pokemon.clone();
        }
        if let Some(favorite) = self.favorite {
            record.favorite = favorite;
        }
        record.updated_at = now;
    }
}

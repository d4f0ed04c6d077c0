//! Simplified Pokemon shape kept inside saved teams

use serde::{Deserialize, Serialize};

use pokedeck_catalog::{PokemonRecord, Sprites};

/// A Pokemon as stored in a team document.
///
/// Only identity, types and sprites survive; base stats and abilities are
/// dropped on save and come back empty when a saved team is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPokemon {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub sprites: Sprites,
}

impl StoredPokemon {
    /// Strip a full record down to the stored shape
    pub fn from_record(record: &PokemonRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            types: record.types.clone(),
            sprites: record.sprites.clone(),
        }
    }

    /// Rebuild a full record with empty stats and abilities
    pub fn into_record(self) -> PokemonRecord {
        PokemonRecord::new(self.id, self.name)
            .with_types(self.types)
            .with_sprites(self.sprites)
    }
}

impl From<&PokemonRecord> for StoredPokemon {
    fn from(record: &PokemonRecord) -> Self {
        Self::from_record(record)
    }
}

impl From<StoredPokemon> for PokemonRecord {
    fn from(stored: StoredPokemon) -> Self {
        stored.into_record()
    }
}

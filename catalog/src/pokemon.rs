//! Pokemon record types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sprite URLs for a Pokemon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    /// Small front-facing sprite
    pub default: Option<String>,

    /// Official artwork
    pub artwork: Option<String>,
}

/// A fully hydrated catalog entry.
///
/// Records are immutable once fetched. The team builder holds them behind
/// `Arc` so a team slot references the fetched record instead of copying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonRecord {
    /// National dex number
    pub id: u32,

    /// Lowercase species name as returned by the catalog (e.g. "mr-mime")
    pub name: String,

    pub sprites: Sprites,

    /// Type names ordered by slot
    pub types: Vec<String>,

    /// Base stat by stat name ("hp", "attack", ...)
    pub base_stats: BTreeMap<String, u32>,

    /// Ability names ordered by slot
    pub abilities: Vec<String>,
}

impl PokemonRecord {
    /// Create a record with no sprites, stats or abilities
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sprites: Sprites::default(),
            types: Vec::new(),
            base_stats: BTreeMap::new(),
            abilities: Vec::new(),
        }
    }

    /// Set the types (builder style)
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sprites (builder style)
    pub fn with_sprites(mut self, sprites: Sprites) -> Self {
        self.sprites = sprites;
        self
    }

    /// Get the first type, if known
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    /// Sum of all base stats
    pub fn base_stat_total(&self) -> u32 {
        self.base_stats.values().sum()
    }

    /// Get a single base stat by name
    pub fn base_stat(&self, stat: &str) -> Option<u32> {
        self.base_stats.get(stat).copied()
    }

    /// Whether stats and abilities were populated (false for records rebuilt
    /// from a saved team)
    pub fn is_hydrated(&self) -> bool {
        !self.base_stats.is_empty() || !self.abilities.is_empty()
    }

    /// Human readable name ("mr-mime" -> "Mr Mime")
    pub fn display_name(&self) -> String {
        self.name
            .split('-')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

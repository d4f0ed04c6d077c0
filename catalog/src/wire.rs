//! Wire types for the catalog REST contract

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pokemon::{PokemonRecord, Sprites};

/// Response of `GET /pokemon?limit&offset`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonPage {
    /// Total number of entries (clamped to the configured catalog size)
    pub count: u32,

    pub results: Vec<PokemonSummary>,
}

/// A `{name, url}` entry of the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub name: String,
    pub url: String,
}

impl PokemonSummary {
    /// Parse the dex number from the trailing url segment
    /// (`.../pokemon/25/` -> 25)
    pub fn id(&self) -> Option<u32> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|segment| segment.parse().ok())
    }
}

/// Response of `GET /pokemon/{idOrName}`, reduced to the fields we read
#[derive(Debug, Clone, Deserialize)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: RawSprites,
    #[serde(default)]
    pub types: Vec<RawTypeSlot>,
    #[serde(default)]
    pub stats: Vec<RawStat>,
    #[serde(default)]
    pub abilities: Vec<RawAbilitySlot>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: RawOtherSprites,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawOtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: RawArtwork,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArtwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawAbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub slot: u8,
}

impl From<RawPokemon> for PokemonRecord {
    fn from(raw: RawPokemon) -> Self {
        let mut types = raw.types;
        types.sort_by_key(|t| t.slot);

        let mut abilities = raw.abilities;
        abilities.sort_by_key(|a| a.slot);

        let base_stats: BTreeMap<String, u32> = raw
            .stats
            .into_iter()
            .map(|s| (s.stat.name, s.base_stat))
            .collect();

        PokemonRecord {
            id: raw.id,
            name: raw.name,
            sprites: Sprites {
                default: raw.sprites.front_default,
                artwork: raw.sprites.other.official_artwork.front_default,
            },
            types: types.into_iter().map(|t| t.kind.name).collect(),
            base_stats,
            abilities: abilities.into_iter().map(|a| a.ability.name).collect(),
        }
    }
}

/// Parse a full record from a `GET /pokemon/{idOrName}` body
pub fn parse_pokemon(body: &str) -> serde_json::Result<PokemonRecord> {
    serde_json::from_str::<RawPokemon>(body).map(PokemonRecord::from)
}

//! Team building domain for the Pokemon team builder.
//!
//! # Overview
//!
//! `pokedeck-team` sits between the catalog (where Pokemon come from) and the
//! store (where finished teams go):
//!
//! ```text
//! pokedeck-catalog (PokemonRecord)
//!        │
//!        ▼
//! pokedeck-team (slots + state machine)
//!        │
//!        ├─> pokedeck-store (TeamRecord persistence)
//!        └─> pokedeck-client (async editing, session resume)
//! ```
//!
//! # Main Types
//!
//! - [`TeamBuilder`] - Synchronous team editing state machine
//! - [`TeamSlots`] - The six fixed team slots
//! - [`Mode`] - `Idle` / `Creating` / `Editing`
//! - [`StoredPokemon`] - Simplified Pokemon kept inside a saved team
//! - [`TeamRecord`], [`TeamPatch`], [`NewTeam`] - Saved team documents
//! - [`EditSession`] with [`snapshot`] / [`restore`] - Resumable edit state
//! - [`TeamError`], [`Notice`], [`Locale`] - Localized user-facing outcomes
//!
//! # Example Usage
//!
//! ```ignore
//! use pokedeck_team::{Locale, TeamBuilder};
//!
//! let mut builder = TeamBuilder::new(Locale::En);
//! builder.start_creating();
//! builder.add_to_team(pikachu)?;
//! builder.update_team_name("Aces");
//! ```

mod builder;
mod error;
mod locale;
mod messages;
mod mode;
mod record;
mod session;
mod slots;
mod stored;

pub use builder::TeamBuilder;
pub use error::TeamError;
pub use locale::{Locale, is_default_team_name};
pub use messages::{ActionResult, Notice};
pub use mode::{EditExit, Mode};
pub use record::{NewTeam, TeamPatch, TeamRecord};
pub use session::{EDIT_SESSION_KEY, EditSession, restore, snapshot};
pub use slots::{TEAM_SIZE, TeamSlots};
pub use stored::StoredPokemon;

// Re-export the catalog record the slots hold
pub use pokedeck_catalog::{PokemonRecord, Sprites};

//! Application layer of the Pokemon team builder.
//!
//! [`TeamContext`] owns the one team-builder state of a session and wires it
//! to the document store, the identity provider and session storage.
//! [`CatalogBrowser`] pages through the Pokemon catalog the user picks from.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use pokedeck_client::{Backend, CatalogBrowser, Config, LogNotifier, TeamContext};
//!
//! let config = Config::from_env();
//! let backend = Backend::in_memory();
//!
//! let mut browser = CatalogBrowser::from_config(&config);
//! browser.load_page(1).await?;
//!
//! let mut team = TeamContext::new(&backend, Arc::new(LogNotifier), config.locale);
//! team.resume_session();
//! if let Some(pokemon) = browser.pokemon().first() {
//!     team.handle_add_pokemon(pokemon.clone()).await;
//! }
//! ```

mod backend;
mod browser;
mod config;
mod context;
mod notify;

pub use backend::Backend;
pub use browser::CatalogBrowser;
pub use config::{BackendCredentials, Config};
pub use context::TeamContext;
pub use notify::{LogNotifier, Notifier, RecordingNotifier, Toast, ToastLevel};

pub use pokedeck_catalog::{CatalogClient, CatalogError, PokemonRecord};
pub use pokedeck_store::{AuthUser, StoreError};
pub use pokedeck_team::{ActionResult, EditExit, Locale, Mode, TeamError, TeamRecord};

/// Errors from the read-side queries of [`TeamContext`]
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Rejected(#[from] TeamError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

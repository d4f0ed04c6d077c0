//! Pokemon catalog access for the team builder.
//!
//! This crate wraps the public, read-only Pokemon REST catalog:
//!
//! ```text
//! GET /pokemon?limit&offset   -> paginated summaries
//! GET /pokemon/{idOrName}     -> full record
//! ```
//!
//! # Main Types
//!
//! - [`CatalogClient`] - HTTP client with a capped list endpoint and a
//!   fixed-window batch hydrator
//! - [`PokemonRecord`] - Immutable Pokemon record used by the team builder
//! - [`PokemonSummary`] - Name/url pair returned by the list endpoint
//! - [`page_window`] / [`RequestTracker`] - Pagination helpers
//!
//! # Example Usage
//!
//! ```ignore
//! use pokedeck_catalog::{CatalogClient, CatalogConfig};
//!
//! let catalog = CatalogClient::new(CatalogConfig::default());
//! let page = catalog.get_list(20, 0).await?;
//! let ids: Vec<u32> = page.results.iter().filter_map(|s| s.id()).collect();
//! let records = catalog.get_batch(&ids, 5).await?;
//! ```

pub mod client;
pub mod pagination;
pub mod pokemon;
pub mod wire;

pub use client::{CatalogClient, CatalogConfig, HydratedPage};
pub use pagination::{RequestToken, RequestTracker, page_window, total_pages};
pub use pokemon::{PokemonRecord, Sprites};
pub use wire::{PokemonPage, PokemonSummary};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Pokemon not found: {0}")]
    NotFound(String),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid catalog payload: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

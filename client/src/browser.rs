//! Catalog browsing state for the Pokemon picker

use std::sync::Arc;

use pokedeck_catalog::{
    CatalogClient, CatalogError, HydratedPage, PokemonRecord, RequestToken, RequestTracker,
    page_window,
};

use crate::config::Config;

/// Current catalog page plus the bookkeeping to ignore stale loads.
///
/// Page loads are not cancelled when the user moves on. Each load carries a
/// [`RequestToken`]; a result is only applied if no newer load was started.
pub struct CatalogBrowser {
    catalog: CatalogClient,
    requests: RequestTracker,
    page_size: u32,
    window: usize,

    page: usize,
    count: u32,
    total_pages: usize,
    pokemon: Vec<Arc<PokemonRecord>>,
}

impl CatalogBrowser {
    pub fn new(catalog: CatalogClient, page_size: u32, window: usize) -> Self {
        Self {
            catalog,
            requests: RequestTracker::new(),
            page_size: page_size.max(1),
            window,
            page: 1,
            count: 0,
            total_pages: 0,
            pokemon: Vec::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CatalogClient::new(config.catalog()),
            config.page_size,
            config.page_window,
        )
    }

    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// 1-based page currently shown
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Pokemon on the current page
    pub fn pokemon(&self) -> &[Arc<PokemonRecord>] {
        &self.pokemon
    }

    /// Look up a Pokemon on the current page by dex number
    pub fn get(&self, id: u32) -> Option<Arc<PokemonRecord>> {
        self.pokemon.iter().find(|p| p.id == id).cloned()
    }

    /// Page numbers to show around the current page
    pub fn page_numbers(&self) -> Vec<usize> {
        page_window(self.page, self.total_pages, self.window)
    }

    /// Start a page load, superseding any load still in flight
    pub fn begin_load(&self) -> RequestToken {
        self.requests.issue()
    }

    /// Apply a loaded page if its load is still the latest one
    pub fn apply(&mut self, token: RequestToken, loaded: HydratedPage) -> bool {
        if !self.requests.is_current(token) {
            tracing::debug!(page = loaded.page, "Discarding superseded catalog page");
            return false;
        }

        self.page = loaded.page;
        self.count = loaded.count;
        self.total_pages = loaded.total_pages;
        self.pokemon = loaded.pokemon.into_iter().map(Arc::new).collect();
        true
    }

    /// Load and show a page. Returns false if a newer load won the race.
    pub async fn load_page(&mut self, page: usize) -> Result<bool, CatalogError> {
        let token = self.begin_load();
        let loaded = self.catalog.get_page(page, self.page_size).await?;
        Ok(self.apply(token, loaded))
    }

    pub async fn next_page(&mut self) -> Result<bool, CatalogError> {
        if self.total_pages > 0 && self.page >= self.total_pages {
            return Ok(false);
        }
        self.load_page(self.page + 1).await
    }

    pub async fn previous_page(&mut self) -> Result<bool, CatalogError> {
        if self.page <= 1 {
            return Ok(false);
        }
        self.load_page(self.page - 1).await
    }

    /// Fetch a single Pokemon by name or dex number
    pub async fn find(&self, id_or_name: &str) -> Result<Arc<PokemonRecord>, CatalogError> {
        self.catalog.get_pokemon(id_or_name).await.map(Arc::new)
    }
}

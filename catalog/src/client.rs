use std::time::Duration;

use futures_util::future::try_join_all;
use reqwest::StatusCode;

use crate::pagination::total_pages;
use crate::pokemon::PokemonRecord;
use crate::wire::{PokemonPage, parse_pokemon};
use crate::{CatalogError, Result};

pub const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2";

/// Catalog client settings
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base url of the REST catalog, without trailing slash
    pub base_url: String,

    /// Entries past this many are never listed
    pub max_pokemon: u32,

    /// Concurrent requests per hydration batch
    pub batch_size: usize,

    /// Pause between two hydration batches
    pub batch_delay: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
            max_pokemon: 1025,
            batch_size: 5,
            batch_delay: Duration::from_millis(100),
        }
    }
}

/// A listed page with every entry hydrated to a full record
#[derive(Debug, Clone)]
pub struct HydratedPage {
    /// 1-based page number
    pub page: usize,
    pub pokemon: Vec<PokemonRecord>,
    pub count: u32,
    pub total_pages: usize,
}

/// Client for the public Pokemon catalog
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_http(reqwest::Client::new(), config)
    }

    /// Use an existing `reqwest::Client` (shared connection pool)
    pub fn with_http(http: reqwest::Client, mut config: CatalogConfig) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self { http, config }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// List summaries, never reaching past `max_pokemon`.
    ///
    /// `limit` is shortened so that `offset + limit <= max_pokemon` and the
    /// returned count is clamped to the cap. An offset at or beyond the cap
    /// yields an empty page without contacting the catalog; its count is the
    /// cap itself, since the real total is not known without a request.
    pub async fn get_list(&self, limit: u32, offset: u32) -> Result<PokemonPage> {
        let max = self.config.max_pokemon;
        let limit = limit.min(max.saturating_sub(offset));

        if offset >= max {
            tracing::debug!(offset, max, "List request past catalog cap");
            return Ok(PokemonPage {
                count: max,
                results: Vec::new(),
            });
        }

        let url = format!("{}/pokemon", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("limit", limit), ("offset", offset)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let mut page: PokemonPage = serde_json::from_str(&body)?;
        page.results.truncate(limit as usize);
        page.count = page.count.min(max);

        Ok(page)
    }

    /// Fetch one full record by dex number or name
    pub async fn get_pokemon(&self, id_or_name: &str) -> Result<PokemonRecord> {
        let key = id_or_name.trim().to_lowercase();
        let url = format!("{}/pokemon/{}", self.config.base_url, key);

        let response = self.http.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(CatalogError::NotFound(key)),
            status if !status.is_success() => Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            }),
            _ => {
                let body = response.text().await?;
                Ok(parse_pokemon(&body)?)
            }
        }
    }

    /// Hydrate records in sequential fixed-size batches.
    ///
    /// Each batch is fetched concurrently and awaited in full, followed by
    /// the configured delay before the next batch is issued. The first failed
    /// fetch aborts the whole call. Results keep the order of `ids`.
    pub async fn get_batch(&self, ids: &[u32], batch_size: usize) -> Result<Vec<PokemonRecord>> {
        let batch_size = batch_size.max(1);
        let batches = ids.len().div_ceil(batch_size);
        let mut records = Vec::with_capacity(ids.len());

        for (index, chunk) in ids.chunks(batch_size).enumerate() {
            let fetched = try_join_all(
                chunk
                    .iter()
                    .map(|id| async move { self.get_pokemon(&id.to_string()).await }),
            )
            .await
            .inspect_err(|e| {
                tracing::error!(batch = index, error = %e, "Catalog batch failed");
            })?;

            records.extend(fetched);

            if index + 1 < batches {
                tokio::time::sleep(self.config.batch_delay).await;
            }
        }

        tracing::debug!(count = records.len(), batches, "Hydrated catalog batch");
        Ok(records)
    }

    /// List and hydrate one 1-based page
    pub async fn get_page(&self, page: usize, page_size: u32) -> Result<HydratedPage> {
        let page = page.max(1);
        let offset = u32::try_from(page - 1)
            .unwrap_or(u32::MAX)
            .saturating_mul(page_size);

        let listed = self.get_list(page_size, offset).await?;
        let ids: Vec<u32> = listed.results.iter().filter_map(|s| s.id()).collect();
        let pokemon = self.get_batch(&ids, self.config.batch_size).await?;

        Ok(HydratedPage {
            page,
            pokemon,
            count: listed.count,
            total_pages: total_pages(listed.count, page_size),
        })
    }
}

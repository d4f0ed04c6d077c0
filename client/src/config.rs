//! Runtime configuration loaded from the environment

use std::env;
use std::str::FromStr;
use std::time::Duration;

use pokedeck_catalog::CatalogConfig;
use pokedeck_catalog::client::DEFAULT_CATALOG_URL;
use pokedeck_team::Locale;

/// Credentials for the hosted identity provider and document store
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackendCredentials {
    pub url: String,
    pub api_key: String,
}

/// Configuration for the team builder
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub catalog_url: String,
    pub max_pokemon: u32,
    pub batch_size: usize,
    pub batch_delay: Duration,
    pub page_size: u32,
    pub page_window: usize,
    pub locale: Locale,
    pub backend: Option<BackendCredentials>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            max_pokemon: 1025,
            batch_size: 5,
            batch_delay: Duration::from_millis(100),
            page_size: 20,
            page_window: 5,
            locale: Locale::En,
            backend: None,
        }
    }
}

impl Config {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `POKEDECK_CATALOG_URL` - Catalog REST base url (default: PokeAPI v2)
    /// - `POKEDECK_MAX_POKEMON` - Catalog size cap (default: 1025)
    /// - `POKEDECK_BATCH_SIZE` - Concurrent fetches per batch (default: 5)
    /// - `POKEDECK_BATCH_DELAY_MS` - Pause between batches (default: 100)
    /// - `POKEDECK_PAGE_SIZE` - Pokemon per catalog page (default: 20)
    /// - `POKEDECK_PAGE_WINDOW` - Page numbers shown around the current page (default: 5)
    /// - `POKEDECK_LOCALE` - `en` or `es` (default: en)
    /// - `POKEDECK_BACKEND_URL` / `POKEDECK_BACKEND_KEY` - Hosted backend credentials
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup: &dyn Fn(&str) -> Option<String> = &lookup;
        let mut config = Self::default();

        if let Some(url) = lookup("POKEDECK_CATALOG_URL").filter(|u| !u.trim().is_empty()) {
            config.catalog_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(max) = read(lookup, "POKEDECK_MAX_POKEMON") {
            config.max_pokemon = max;
        }
        if let Some(size) = read::<usize>(lookup, "POKEDECK_BATCH_SIZE") {
            config.batch_size = size.max(1);
        }
        if let Some(ms) = read(lookup, "POKEDECK_BATCH_DELAY_MS") {
            config.batch_delay = Duration::from_millis(ms);
        }
        if let Some(size) = read::<u32>(lookup, "POKEDECK_PAGE_SIZE") {
            config.page_size = size.max(1);
        }
        if let Some(window) = read::<usize>(lookup, "POKEDECK_PAGE_WINDOW") {
            config.page_window = window.max(1);
        }
        if let Some(locale) = lookup("POKEDECK_LOCALE").and_then(|tag| Locale::from_tag(&tag)) {
            config.locale = locale;
        }

        config.backend = match (lookup("POKEDECK_BACKEND_URL"), lookup("POKEDECK_BACKEND_KEY")) {
            (Some(url), Some(api_key)) => Some(BackendCredentials { url, api_key }),
            _ => None,
        };

        config
    }

    pub fn catalog(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.catalog_url.clone(),
            max_pokemon: self.max_pokemon,
            batch_size: self.batch_size,
            batch_delay: self.batch_delay,
        }
    }
}

fn read<T: FromStr>(lookup: &dyn Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.catalog().batch_size, 5);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("POKEDECK_CATALOG_URL", "http://localhost:8080/api/"),
            ("POKEDECK_MAX_POKEMON", "200"),
            ("POKEDECK_BATCH_DELAY_MS", "0"),
            ("POKEDECK_LOCALE", "es-AR"),
        ]);

        assert_eq!(config.catalog_url, "http://localhost:8080/api");
        assert_eq!(config.max_pokemon, 200);
        assert_eq!(config.batch_delay, Duration::ZERO);
        assert_eq!(config.locale, Locale::Es);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            ("POKEDECK_BATCH_SIZE", "0"),
            ("POKEDECK_PAGE_SIZE", "lots"),
            ("POKEDECK_LOCALE", "klingon"),
        ]);

        assert_eq!(config.batch_size, 1);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_backend_needs_both_values() {
        assert!(config_from(&[("POKEDECK_BACKEND_URL", "https://x")]).backend.is_none());

        let config = config_from(&[
            ("POKEDECK_BACKEND_URL", "https://x"),
            ("POKEDECK_BACKEND_KEY", "secret"),
        ]);
        assert_eq!(config.backend.unwrap().api_key, "secret");
    }
}

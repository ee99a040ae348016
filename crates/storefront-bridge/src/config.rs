use serde::{Deserialize, Serialize};

/// Base URL of the public catalog API used when nothing else is configured.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com";

/// Connection settings for the external product catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of the catalog API. Endpoints such as `/products` are
    /// resolved relative to it.
    pub base_url: String,
    /// Timeout applied to every catalog request, in seconds.
    pub request_timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_owned(),
            request_timeout_secs: 30,
        }
    }
}

/// Presentation settings for the storefront pages.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Number of top-rated products shown on the home page.
    pub trending_limit: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self { trending_limit: 3 }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Configuration for the catalog API connection.
    pub catalog: CatalogConfig,
    /// Configuration for the storefront pages.
    pub storefront: StorefrontConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [catalog]
            base_url = "http://localhost:8080"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.base_url, "http://localhost:8080");
        assert_eq!(config.catalog.request_timeout_secs, 30);
        assert_eq!(config.storefront.trending_limit, 3);
    }

    #[test]
    fn empty_file_is_default_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.catalog.base_url, DEFAULT_CATALOG_URL);
    }
}

//! Read-only client for the external product catalog API.
//!
//! The catalog is a fakestoreapi-compatible HTTP service. This crate issues
//! the four read requests the storefront needs and parses the responses into
//! [`ProductRecord`]s:
//! - `GET /products`
//! - `GET /products/categories`
//! - `GET /products/category/{name}`
//! - `GET /products/{id}`
//!
//! There are no retries and no caching. Timeouts are whatever the shared
//! [`reqwest::Client`] was built with.

use reqwest::Url;
use serde::de::DeserializeOwned;
use storefront_bridge::product::ProductRecord;

/// Errors returned by [`CatalogClient`] requests.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid catalog base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    /// The request could not be sent, the connection failed, or a listing
    /// endpoint answered with a non-success status.
    #[error("catalog request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// The response body is not the JSON shape the catalog promises.
    #[error("failed to parse catalog response: {0}")]
    Parse(#[from] serde_json::Error),
    /// The catalog has no product with the requested id.
    #[error("product {id} not found")]
    NotFound { id: u64 },
}

/// HTTP client for the product catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a client that resolves every endpoint against `base_url`.
    ///
    /// A trailing slash is added when missing so that a base such as
    /// `https://host/api` keeps its path.
    pub fn new(http: reqwest::Client, base_url: &str) -> Result<Self, CatalogError> {
        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the full catalog.
    pub async fn fetch_all(&self) -> Result<Vec<ProductRecord>, CatalogError> {
        self.get_list(self.endpoint(&["products"])).await
    }

    /// Fetches the products of one category. The name is sent as a single
    /// percent-encoded path segment.
    pub async fn fetch_by_category(
        &self,
        name: &str,
    ) -> Result<Vec<ProductRecord>, CatalogError> {
        self.get_list(self.endpoint(&["products", "category", name]))
            .await
    }

    /// Fetches the distinct category names.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_list(self.endpoint(&["products", "categories"]))
            .await
    }

    /// Fetches a single product.
    ///
    /// Any non-success status is reported as [`CatalogError::NotFound`]. So is
    /// an empty or `null` body, which is how fakestoreapi answers unknown ids.
    pub async fn fetch_by_id(&self, id: u64) -> Result<ProductRecord, CatalogError> {
        let url = self.endpoint(&["products", &id.to_string()]);
        log::debug!("Fetching product {id} from {url}");

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            log::debug!("Catalog answered {} for product {id}", response.status());
            return Err(CatalogError::NotFound { id });
        }

        let body = response.text().await?;
        let body = body.trim();
        if body.is_empty() || body == "null" {
            return Err(CatalogError::NotFound { id });
        }
        Ok(serde_json::from_str(body)?)
    }

    async fn get_list<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, CatalogError> {
        log::debug!("Fetching {url}");
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // checked in `new`: the base can always take path segments
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

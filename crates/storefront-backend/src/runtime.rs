//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, shared state, and the message
//! dispatch loop that listens to frontend bridge requests.

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
    thread,
    time::Duration,
};

use storefront_bridge::{
    MessageFromBackend, MessageToBackend,
    config::{CatalogConfig, Config, DEFAULT_CATALOG_URL},
};
use storefront_catalog::CatalogClient;
use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
};

use crate::app::AppContext;
use crate::cart::{CartState, FileStore, MemoryStore};
use crate::state::State;

/// Name of the key-value store file inside the data directory.
const STORE_FILE_NAME: &str = "storage.toml";

/// Startup overrides that take precedence over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct BackendOptions {
    /// Catalog base URL to use instead of `catalog.base_url`.
    pub catalog_url: Option<String>,
}

/// Per-request timeout for catalog calls. `0` disables the timeout.
fn request_timeout(config: &CatalogConfig) -> Option<Duration> {
    match config.request_timeout_secs {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    }
}

fn build_request_client(config: &CatalogConfig) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = request_timeout(config) {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .unwrap_or_else(|e| {
            log::error!("Failed to configure HTTP client, using defaults: {e}");
            reqwest::Client::new()
        })
}

fn build_catalog_client(http: reqwest::Client, config: &CatalogConfig) -> CatalogClient {
    match CatalogClient::new(http.clone(), &config.base_url) {
        Ok(client) => client,
        Err(e) => {
            log::error!(
                "Invalid catalog url {:?} ({e}), falling back to {DEFAULT_CATALOG_URL}",
                config.base_url
            );
            CatalogClient::new(http, DEFAULT_CATALOG_URL)
                .expect("failed to build the default catalog client")
        }
    }
}

fn build_cart(data_path: Option<PathBuf>) -> CartState {
    match data_path {
        Some(data_path) => CartState::new(FileStore::new(data_path.join(STORE_FILE_NAME))),
        None => {
            log::warn!("No data directory available, the cart will not be persisted");
            CartState::new(MemoryStore::default())
        }
    }
}

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(
    rx: Receiver<MessageToBackend>,
    tx: Sender<MessageFromBackend>,
    options: BackendOptions,
) {
    let (mut config, data_path) = match crate::config::load_config().await {
        Ok((config, data_path)) => (config, Some(data_path)),
        Err(e) => {
            log::error!("Failed to load config, using defaults: {e}");
            (Config::default(), None)
        }
    };
    if let Some(catalog_url) = options.catalog_url {
        config.catalog.base_url = catalog_url;
    }

    let request_client = build_request_client(&config.catalog);
    let catalog = build_catalog_client(request_client, &config.catalog);
    log::info!("Using catalog at {}", catalog.base_url());

    let state = Arc::new(RwLock::new(State {
        config,
        catalog,
        cart: Arc::new(Mutex::new(build_cart(data_path))),
    }));

    let context = Arc::new(AppContext { state, tx });
    context.consume_bridge_messages(rx).await;
}

/// Spawn the backend runtime and begin processing bridge messages.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>, options: BackendOptions) {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to build tokio runtime");
        runtime.block_on(async { setup_backend(rx, tx, options).await });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_disables_it() {
        let config = CatalogConfig {
            request_timeout_secs: 0,
            ..CatalogConfig::default()
        };
        assert_eq!(request_timeout(&config), None);
    }

    #[test]
    fn configured_timeout_is_used() {
        let config = CatalogConfig {
            request_timeout_secs: 12,
            ..CatalogConfig::default()
        };
        assert_eq!(request_timeout(&config), Some(Duration::from_secs(12)));
    }

    #[test]
    fn invalid_catalog_url_falls_back_to_default() {
        let config = CatalogConfig {
            base_url: "not a url".into(),
            ..CatalogConfig::default()
        };
        let client = build_catalog_client(reqwest::Client::new(), &config);
        assert_eq!(client.base_url().as_str(), "https://fakestoreapi.com/");
    }
}

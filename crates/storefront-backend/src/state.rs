/// The core backend state: configuration, the catalog client and the cart.
///
/// It is wrapped in an async-friendly lock (see [`SharedState`]); handlers
/// clone what they need under a short read lock.
pub struct State {
    /// The loaded application configuration.
    pub config: storefront_bridge::config::Config,
    /// Client for the external product catalog. Cloning it shares the
    /// underlying connection pool.
    pub catalog: storefront_catalog::CatalogClient,
    /// Persisted cart counter. Its store does blocking file IO, so it is only
    /// touched from the blocking pool (see [`crate::services::cart_service`]).
    pub cart: SharedCart,
}

/// Thread-safe, async-friendly shared reference to the application [`State`].
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;

/// The cart behind a plain mutex, held only inside blocking tasks.
pub type SharedCart = std::sync::Arc<std::sync::Mutex<crate::cart::CartState>>;

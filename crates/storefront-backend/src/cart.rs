//! Persisted cart counter.
//!
//! The cart is a single integer: the number of times "add to cart" was used.
//! It is stored as a decimal string under [`CART_COUNT_KEY`] in a small
//! string-keyed store scoped to the user profile. There is no decrement and
//! no per-item tracking.

use std::{
    collections::{BTreeMap, HashMap},
    path::PathBuf,
};

/// Key of the cart counter entry in the store.
pub const CART_COUNT_KEY: &str = "cartCount";

/// Errors that can occur while writing to a [`KeyValueStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to read or write the store file.
    #[error("failed to access store: {0}")]
    IoError(#[from] std::io::Error),
    /// The store file exists but is not a valid TOML table of strings.
    #[error("failed to deserialize store: {0}")]
    DeserializeError(#[from] toml::de::Error),
    /// Failed to serialize the store contents.
    #[error("failed to serialize store: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// String-keyed storage of string values.
///
/// Reads never fail: a value that cannot be read is treated as absent.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// A store backed by a TOML file. Every access reads the file, so several
/// processes sharing it see each other's writes (but may lose increments).
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.read_entries() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                log::warn!("Ignoring unreadable store {:?}: {e}", self.path);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries().unwrap_or_else(|e| {
            log::warn!("Overwriting unreadable store {:?}: {e}", self.path);
            BTreeMap::new()
        });
        entries.insert(key.to_owned(), value.to_owned());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, toml::to_string(&entries)?)?;
        Ok(())
    }
}

/// A store that lives only as long as the process. Used when no data
/// directory is available.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// The cart counter on top of a [`KeyValueStore`].
pub struct CartState {
    store: Box<dyn KeyValueStore + Send + Sync>,
}

impl CartState {
    pub fn new(store: impl KeyValueStore + Send + Sync + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Returns the stored count. A missing or non-numeric value counts as 0.
    pub fn current_count(&self) -> u64 {
        self.store
            .get(CART_COUNT_KEY)
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Adds one item and persists the new count, which is returned.
    pub fn increment(&mut self) -> Result<u64, StoreError> {
        let count = self.current_count().saturating_add(1);
        self.store.set(CART_COUNT_KEY, &count.to_string())?;
        Ok(count)
    }
}

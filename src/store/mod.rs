//! Persistent state store: the three lists plus the navigation hand-offs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage is a flat, last-writer-wins cache. Every list lives under its own
//! key as a JSON array; the selected category and product are raw strings.
//! There is no versioning and no grouping of writes.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here reaches the caller as an error. A missing or malformed entry
//! loads as an empty list and a failed write is logged and dropped, so a
//! broken or full `localStorage` never blocks the page.


#[cfg(feature = "csr")]
mod local;
mod memory;

#[cfg(feature = "csr")]
pub use local::LocalStorage;
pub use memory::MemoryStore;

use crate::config::StorageKeys;
use crate::state::Collections;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage access failed for {key}: {message}")]
    Access { key: String, message: String },
    #[error("malformed value under {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode value for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value backend (browser `localStorage` or an in-memory map).
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

pub struct PersistentStore<S> {
    backend: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> PersistentStore<S> {
    pub fn new(backend: S, keys: StorageKeys) -> Self {
        Self { backend, keys }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load all three lists. Absent or unreadable entries come back empty.
    pub fn load(&self, compare_limit: usize) -> Collections {
        Collections::from_persisted(
            self.load_list(&self.keys.compare),
            self.load_list(&self.keys.cart),
            self.load_list(&self.keys.favorites),
            compare_limit,
        )
    }

    /// Write all three lists, overwriting what was there.
    pub fn save(&self, collections: &Collections) {
        self.write_list(&self.keys.compare, collections.compare());
        self.write_list(&self.keys.cart, collections.cart());
        self.write_list(&self.keys.favorites, collections.favorites());
    }

    pub fn selected_category(&self) -> Option<String> {
        self.load_string(&self.keys.selected_category)
    }

    pub fn set_selected_category(&self, category: &str) {
        self.write_string(&self.keys.selected_category, category);
    }

    pub fn selected_product(&self) -> Option<String> {
        self.load_string(&self.keys.selected_product)
    }

    pub fn set_selected_product(&self, product_id: &str) {
        self.write_string(&self.keys.selected_product, product_id);
    }

    fn read_list(&self, key: &str) -> Result<Option<Vec<String>>, StoreError> {
        let Some(raw) = self.backend.get_item(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Decode { key: key.to_owned(), source })
    }

    fn load_list(&self, key: &str) -> Vec<String> {
        match self.read_list(key) {
            Ok(list) => list.unwrap_or_default(),
            Err(err) => {
                log::warn!("{err}; starting with an empty list");
                Vec::new()
            }
        }
    }

    fn write_list(&self, key: &str, list: &[String]) {
        let result = serde_json::to_string(list)
            .map_err(|source| StoreError::Encode { key: key.to_owned(), source })
            .and_then(|raw| self.backend.set_item(key, &raw));
        if let Err(err) = result {
            log::warn!("{err}; change kept in memory only");
        }
    }

    fn load_string(&self, key: &str) -> Option<String> {
        match self.backend.get_item(key) {
            Ok(value) => value.filter(|value| !value.is_empty()),
            Err(err) => {
                log::warn!("{err}");
                None
            }
        }
    }

    fn write_string(&self, key: &str, value: &str) {
        if let Err(err) = self.backend.set_item(key, value) {
            log::warn!("{err}; navigation hand-off not saved");
        }
    }
}

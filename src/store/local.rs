//! Browser `localStorage` backend.

use super::{KeyValueStore, StoreError};

/// `window.localStorage`, when the browser grants it.
///
/// Private browsing modes may refuse storage; in that case every call fails
/// with [`StoreError::Unavailable`] and the store degrades to empty lists.
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().unwrap_or_default());
        if storage.is_none() {
            log::warn!("localStorage unavailable; shopper lists will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.get_item(key).map_err(|err| StoreError::Access {
            key: key.to_owned(),
            message: format!("{err:?}"),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|err| StoreError::Access {
            key: key.to_owned(),
            message: format!("{err:?}"),
        })
    }
}

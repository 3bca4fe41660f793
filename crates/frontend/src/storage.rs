//! Web Storage tiers backing the session

use clinic_core::{KeyValueStorage, StorageError, TieredPersistence};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// One browser storage area (`sessionStorage` or `localStorage`)
///
/// A missing area (storage disabled, no window) behaves as an empty store
/// whose writes fail.
pub struct BrowserStorage {
    storage: Option<Storage>,
    name: &'static str,
}

impl BrowserStorage {
    pub fn session() -> Self {
        Self {
            storage: web_sys::window().and_then(|w| w.session_storage().ok().flatten()),
            name: "sessionStorage",
        }
    }

    pub fn local() -> Self {
        Self {
            storage: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
            name: "localStorage",
        }
    }

    fn area(&self) -> Result<&Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable(self.name.to_string()))
    }
}

fn describe(error: &JsValue) -> String {
    error
        .as_string()
        .unwrap_or_else(|| format!("{error:?}"))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let Some(storage) = &self.storage else {
            return Ok(None);
        };
        storage.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: describe(&e),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.area()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: describe(&e),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let Some(storage) = &self.storage else {
            return Ok(());
        };
        storage.remove_item(key).map_err(|e| StorageError::Remove {
            key: key.to_string(),
            message: describe(&e),
        })
    }
}

/// Session-scoped persistence with `localStorage` as the legacy tier
pub fn browser_persistence() -> TieredPersistence<BrowserStorage, BrowserStorage> {
    TieredPersistence::new(BrowserStorage::session(), BrowserStorage::local())
}

//! `localStorage` behind the shared key-value store trait.

use shared::{KeyValueStore, StorageError};
use web_sys::Storage;

/// The page's `localStorage`, or nothing if the browser refuses access
/// (private mode, disabled storage). Without it every read comes back empty
/// and every write fails, which the entry store already tolerates.
#[derive(Clone)]
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        Self {
            storage: web_sys::window().and_then(|window| window.local_storage().ok().flatten()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|e| StorageError::ReadFailed {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        // Throws QuotaExceededError when the origin is out of space
        storage.set_item(key, value).map_err(|e| StorageError::WriteRejected {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_storage_round_trip() {
        let storage = BrowserStorage::local();
        assert!(storage.is_available());

        storage.set_item("expense_tracker_test_key", "[]").unwrap();
        assert_eq!(
            storage.get_item("expense_tracker_test_key").unwrap().as_deref(),
            Some("[]")
        );
    }

    #[wasm_bindgen_test]
    fn test_missing_key_reads_none() {
        let storage = BrowserStorage::local();
        assert!(storage.get_item("expense_tracker_never_written").unwrap().is_none());
    }
}

//! Entry repository: the whole collection as one JSON blob under one key.

use log::{debug, warn};

use crate::storage::{KeyValueStore, StorageError};
use crate::Entry;

/// Default slot the collection lives in
pub const DEFAULT_STORAGE_KEY: &str = "my_personal_expenses_v1";

/// Reads and writes the full entry collection through a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct EntryRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> EntryRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the stored collection.
    ///
    /// Never fails: a missing slot, a read error or a blob that does not parse
    /// all come back as an empty collection.
    pub fn load(&self) -> Vec<Entry> {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No saved entries under '{}'", self.key);
                return Vec::new();
            }
            Err(e) => {
                warn!("Could not read '{}', starting empty: {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Entry>>(&raw) {
            Ok(entries) => {
                debug!("Loaded {} entries from '{}'", entries.len(), self.key);
                entries
            }
            Err(e) => {
                warn!("Saved entries under '{}' are corrupt, starting empty: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored collection (last write wins)
    pub fn save(&self, entries: &[Entry]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(entries)?;
        self.store.set_item(&self.key, &raw)?;
        debug!("Saved {} entries to '{}'", entries.len(), self.key);
        Ok(())
    }
}

//! In-memory entry collection that writes through to its repository on every
//! change.

use chrono::Utc;
use log::{debug, info, warn};

use crate::repository::EntryRepository;
use crate::storage::{KeyValueStore, StorageError};
use crate::{Entry, EntryPatch, NewEntry};

pub const DELETE_PROMPT: &str = "Delete this entry?";
pub const CLEAR_ALL_PROMPT: &str = "Clear all saved data?";

/// Blocking yes/no prompt shown before destructive actions
pub trait Confirmation {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirmation for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Ordered entry collection, newest first
pub struct EntryStore<S: KeyValueStore> {
    entries: Vec<Entry>,
    repository: EntryRepository<S>,
    last_save_error: Option<StorageError>,
}

impl<S: KeyValueStore> EntryStore<S> {
    /// Load whatever the repository holds and take ownership of it
    pub fn open(repository: EntryRepository<S>) -> Self {
        let entries = repository.load();
        info!("Entry store opened with {} entries", entries.len());
        Self {
            entries,
            repository,
            last_save_error: None,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn repository(&self) -> &EntryRepository<S> {
        &self.repository
    }

    /// Error from the most recent save, if it failed
    pub fn last_save_error(&self) -> Option<&StorageError> {
        self.last_save_error.as_ref()
    }

    /// Prepend a new entry under a freshly minted ID
    pub fn add(&mut self, new_entry: NewEntry) -> &Entry {
        let id = self.mint_id();
        debug!("Adding entry {} ({})", id, new_entry.title);
        self.entries.insert(0, Entry::from_new(id, new_entry));
        self.persist();
        &self.entries[0]
    }

    /// Merge `patch` into the entry with `id`. Returns false if there is none.
    pub fn update(&mut self, id: &str, patch: EntryPatch) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) else {
            debug!("Update ignored, no entry {}", id);
            return false;
        };
        entry.apply(patch);
        debug!("Updated entry {}", id);
        self.persist();
        true
    }

    /// Remove the entry with `id` once the user confirms.
    ///
    /// Returns true only if something was removed.
    pub fn delete(&mut self, id: &str, confirmation: &dyn Confirmation) -> bool {
        if !confirmation.confirm(DELETE_PROMPT) {
            debug!("Delete of {} declined", id);
            return false;
        }
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            debug!("Delete ignored, no entry {}", id);
            return false;
        }
        debug!("Deleted entry {}", id);
        self.persist();
        true
    }

    /// Empty the collection once the user confirms
    pub fn clear_all(&mut self, confirmation: &dyn Confirmation) -> bool {
        if !confirmation.confirm(CLEAR_ALL_PROMPT) {
            debug!("Clear all declined");
            return false;
        }
        info!("Clearing {} entries", self.entries.len());
        self.entries.clear();
        self.persist();
        true
    }

    fn mint_id(&self) -> String {
        loop {
            let id = Entry::generate_id(Utc::now().timestamp_millis());
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&mut self) {
        match self.repository.save(&self.entries) {
            Ok(()) => self.last_save_error = None,
            Err(e) => {
                warn!("Entries not saved: {}", e);
                self.last_save_error = Some(e);
            }
        }
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use shared::{Entry, EntryRepository, EntryStore};
use yew::prelude::*;

use crate::services::dialogs::BrowserConfirm;
use crate::services::BrowserStorage;

pub type BrowserEntryStore = EntryStore<BrowserStorage>;

#[derive(Clone, PartialEq)]
pub struct EntriesState {
    /// Snapshot of the full collection, newest first
    pub entries: Vec<Entry>,
    /// Set while the last save failed (e.g., storage quota exceeded)
    pub save_warning: Option<String>,
}

#[derive(Clone, PartialEq)]
pub struct UseEntriesActions {
    /// Re-read the store after a mutation made elsewhere
    pub refresh: Callback<()>,
    pub delete: Callback<String>,
    pub clear_all: Callback<()>,
}

pub struct UseEntriesResult {
    pub store: Rc<RefCell<BrowserEntryStore>>,
    pub state: EntriesState,
    pub actions: UseEntriesActions,
}

#[hook]
pub fn use_entries(storage_key: &str) -> UseEntriesResult {
    let store = {
        let storage_key = storage_key.to_string();
        use_mut_ref(move || EntryStore::open(EntryRepository::with_key(BrowserStorage::local(), storage_key)))
    };
    let entries = {
        let store = store.clone();
        use_state(move || store.borrow().entries().to_vec())
    };
    let save_warning = use_state(|| None::<String>);

    let refresh = {
        let store = store.clone();
        let entries = entries.clone();
        let save_warning = save_warning.clone();

        use_callback((), move |_: (), _| {
            let store = store.borrow();
            entries.set(store.entries().to_vec());
            save_warning.set(store.last_save_error().map(|e| format!("Changes could not be saved: {}", e)));
        })
    };

    let delete = {
        let store = store.clone();
        let refresh = refresh.clone();

        use_callback((), move |id: String, _| {
            let removed = store.borrow_mut().delete(&id, &BrowserConfirm);
            if removed {
                refresh.emit(());
            }
        })
    };

    let clear_all = {
        let store = store.clone();
        let refresh = refresh.clone();

        use_callback((), move |_: (), _| {
            if store.borrow_mut().clear_all(&BrowserConfirm) {
                info!("All entries cleared");
                refresh.emit(());
            }
        })
    };

    let state = EntriesState {
        entries: (*entries).clone(),
        save_warning: (*save_warning).clone(),
    };

    let actions = UseEntriesActions {
        refresh,
        delete,
        clear_all,
    };

    UseEntriesResult { store, state, actions }
}

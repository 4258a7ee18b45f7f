use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod chart;
pub mod config;
pub mod export;
pub mod filter;
pub mod form;
pub mod repository;
pub mod storage;
pub mod store;
pub mod summary;

pub use chart::{CategoryBreakdown, ChartHandle, ChartSlot};
pub use config::{ConfigError, TrackerConfig};
pub use export::{export_csv, export_json, ExportError};
pub use filter::{filter_entries, CategoryFilter, EntryFilter};
pub use form::{Draft, FormController, FormError, FormMode, Submitted};
pub use repository::EntryRepository;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::{Confirmation, EntryStore};
pub use summary::{format_money, format_signed, Summary};

/// A single income or expense record.
///
/// Entry ID format: "entry::epoch_millis::uuid". IDs read back from storage are
/// treated as opaque strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    /// What the money was for (never empty once persisted)
    pub title: String,
    /// Non-negative amount; the sign comes from `entry_type`
    pub amount: f64,
    pub category: Category,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// UTC midnight of the entry's calendar day, e.g. "2025-06-15T00:00:00.000Z"
    pub date: String,
}

/// Whether an entry adds to or takes from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    #[default]
    Expense,
    Income,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Expense => "expense",
            EntryType::Income => "income",
        }
    }

    /// Label shown in the type selector
    pub fn label(&self) -> &'static str {
        match self {
            EntryType::Expense => "Expense",
            EntryType::Income => "Income",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryType {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expense" => Ok(EntryType::Expense),
            "income" => Ok(EntryType::Income),
            other => Err(ParseValueError(other.to_string())),
        }
    }
}

/// The fixed, closed set of categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Bills,
    Shopping,
    Entertainment,
    Income,
    Other,
}

impl Category {
    /// All categories in display order. The first one is the form default.
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Bills,
        Category::Shopping,
        Category::Entertainment,
        Category::Income,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Bills => "Bills",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Income => "Income",
            Category::Other => "Other",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::ALL[0]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|category| category.as_str() == s)
            .copied()
            .ok_or_else(|| ParseValueError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown value: {0}")]
pub struct ParseValueError(pub String);

/// Normalized data for a new entry, produced by the form on submit
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub title: String,
    pub amount: f64,
    pub category: Category,
    pub entry_type: EntryType,
    pub date: String,
}

/// Partial update for an existing entry. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<Category>,
    pub entry_type: Option<EntryType>,
    pub date: Option<String>,
}

impl From<NewEntry> for EntryPatch {
    fn from(entry: NewEntry) -> Self {
        Self {
            title: Some(entry.title),
            amount: Some(entry.amount),
            category: Some(entry.category),
            entry_type: Some(entry.entry_type),
            date: Some(entry.date),
        }
    }
}

impl Entry {
    /// Build a stored entry from normalized form data and a freshly minted ID
    pub fn from_new(id: String, new_entry: NewEntry) -> Self {
        Self {
            id,
            title: new_entry.title,
            amount: new_entry.amount,
            category: new_entry.category,
            entry_type: new_entry.entry_type,
            date: new_entry.date,
        }
    }

    /// Generate an entry ID from a timestamp plus a random suffix
    pub fn generate_id(epoch_millis: i64) -> String {
        format!("entry::{}::{}", epoch_millis, uuid::Uuid::new_v4().simple())
    }

    /// Shallow-merge a patch into this entry. The ID is never touched.
    pub fn apply(&mut self, patch: EntryPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(entry_type) = patch.entry_type {
            self.entry_type = entry_type;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
    }

    pub fn is_income(&self) -> bool {
        self.entry_type == EntryType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.entry_type == EntryType::Expense
    }

    /// Calendar-day part of the stored timestamp (YYYY-MM-DD)
    pub fn day(&self) -> &str {
        self.date.get(..10).unwrap_or(&self.date)
    }
}

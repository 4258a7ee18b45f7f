//! Category and title search filtering over the entry list.

use std::fmt;
use std::str::FromStr;

use crate::{Category, Entry, ParseValueError};

/// Category selector value. `All` lets everything through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => entry.category == *category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Selector options: "All" followed by every category
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Entries matching both the category and the case-insensitive title search,
/// in their original order.
pub fn filter_entries<'a>(entries: &'a [Entry], category: &CategoryFilter, search: &str) -> Vec<&'a Entry> {
    let needle = search.to_lowercase();
    entries
        .iter()
        .filter(|entry| category.matches(entry))
        .filter(|entry| needle.is_empty() || entry.title.to_lowercase().contains(&needle))
        .collect()
}

/// Current list filter settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFilter {
    pub category: CategoryFilter,
    pub search: String,
}

impl EntryFilter {
    pub fn apply<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        filter_entries(entries, &self.category, &self.search)
    }

    /// Back to "All" with an empty search box
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All || !self.search.is_empty()
    }
}

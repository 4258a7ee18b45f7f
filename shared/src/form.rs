//! # Entry Form
//!
//! Draft state for the add/edit form and the rules for turning a draft into a
//! stored entry. The form is either creating a new entry or editing an existing
//! one; a successful submit or a cancel always returns it to a blank create
//! form.

use chrono::{NaiveDate, SecondsFormat};
use log::debug;

use crate::storage::KeyValueStore;
use crate::store::EntryStore;
use crate::{Category, Entry, EntryType, NewEntry};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("Required fields missing")]
    MissingRequiredFields,
    #[error("Amount is not a number: {0}")]
    InvalidAmount(String),
    #[error("Date is not a valid YYYY-MM-DD date: {0}")]
    InvalidDate(String),
}

/// Which entry, if any, the form is editing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit { id: String },
}

/// Unsaved form fields, kept as the user typed them
#[derive(Debug, Clone, PartialEq)]
pub struct Draft {
    pub title: String,
    pub amount: String,
    pub category: Category,
    pub entry_type: EntryType,
    /// Calendar day in YYYY-MM-DD form
    pub date: String,
}

impl Draft {
    /// Blank draft for a new entry dated `today`
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category: Category::default(),
            entry_type: EntryType::default(),
            date: today.format("%Y-%m-%d").to_string(),
        }
    }

    /// Draft seeded from a stored entry, date cut down to the calendar day
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            amount: entry.amount.to_string(),
            category: entry.category,
            entry_type: entry.entry_type,
            date: entry.day().to_string(),
        }
    }

    /// Check presence, coerce the amount and normalize the date
    pub fn normalize(&self) -> Result<NewEntry, FormError> {
        if self.title.is_empty() || self.amount.is_empty() {
            return Err(FormError::MissingRequiredFields);
        }

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| FormError::InvalidAmount(self.amount.clone()))?;

        Ok(NewEntry {
            title: self.title.clone(),
            amount,
            category: self.category,
            entry_type: self.entry_type,
            date: normalize_date(&self.date)?,
        })
    }
}

/// Turn "YYYY-MM-DD" into the stored timestamp form, UTC midnight with
/// millisecond precision: "2025-06-15T00:00:00.000Z"
pub fn normalize_date(day: &str) -> Result<String, FormError> {
    let date = NaiveDate::parse_from_str(day.trim(), "%Y-%m-%d")
        .map_err(|_| FormError::InvalidDate(day.to_string()))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| FormError::InvalidDate(day.to_string()))?;
    Ok(midnight.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// What a successful submit did
#[derive(Debug, Clone, PartialEq)]
pub enum Submitted {
    Added { id: String },
    /// `found` is false when the edited entry had been removed meanwhile
    Updated { id: String, found: bool },
}

/// Add/edit form state machine
#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    mode: FormMode,
    draft: Draft,
}

impl FormController {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            mode: FormMode::Create,
            draft: Draft::blank(today),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Edit { id } => Some(id),
            FormMode::Create => None,
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.draft.amount = amount.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.draft.category = category;
    }

    pub fn set_entry_type(&mut self, entry_type: EntryType) {
        self.draft.entry_type = entry_type;
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.draft.date = date.into();
    }

    /// Switch to editing `entry`, replacing the current draft
    pub fn begin_edit(&mut self, entry: &Entry) {
        debug!("Editing entry {}", entry.id);
        self.mode = FormMode::Edit { id: entry.id.clone() };
        self.draft = Draft::from_entry(entry);
    }

    /// Drop the draft and go back to a blank create form
    pub fn cancel(&mut self, today: NaiveDate) {
        self.mode = FormMode::Create;
        self.draft = Draft::blank(today);
    }

    /// Validate the draft and hand it to the store.
    ///
    /// On error nothing changes: the store is untouched and the draft is kept
    /// so the user can fix it.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        store: &mut EntryStore<S>,
        today: NaiveDate,
    ) -> Result<Submitted, FormError> {
        let payload = self.draft.normalize()?;

        let submitted = match &self.mode {
            FormMode::Create => {
                let id = store.add(payload).id.clone();
                Submitted::Added { id }
            }
            FormMode::Edit { id } => {
                let found = store.update(id, payload.into());
                Submitted::Updated {
                    id: id.clone(),
                    found,
                }
            }
        };

        self.cancel(today);
        Ok(submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::EntryRepository;
    use crate::storage::MemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn open_store() -> EntryStore<MemoryStore> {
        EntryStore::open(EntryRepository::new(MemoryStore::new()))
    }

    fn filled_form() -> FormController {
        let mut form = FormController::new(today());
        form.set_title("Coffee");
        form.set_amount("3.50");
        form.set_category(Category::Food);
        form.set_date("2025-06-10");
        form
    }

    #[test]
    fn test_blank_draft_defaults() {
        let form = FormController::new(today());
        let draft = form.draft();
        assert_eq!(draft.title, "");
        assert_eq!(draft.amount, "");
        assert_eq!(draft.category, Category::Food);
        assert_eq!(draft.entry_type, EntryType::Expense);
        assert_eq!(draft.date, "2025-06-15");
        assert_eq!(form.mode(), &FormMode::Create);
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("2025-06-10").unwrap(), "2025-06-10T00:00:00.000Z");
        assert!(matches!(normalize_date("2025-13-01"), Err(FormError::InvalidDate(_))));
        assert!(matches!(normalize_date(""), Err(FormError::InvalidDate(_))));
    }

    #[test]
    fn test_submit_create_adds_and_resets() {
        let mut store = open_store();
        let mut form = filled_form();

        let submitted = form.submit(&mut store, today()).unwrap();

        assert!(matches!(submitted, Submitted::Added { .. }));
        let entry = &store.entries()[0];
        assert_eq!(entry.title, "Coffee");
        assert_eq!(entry.amount, 3.5);
        assert_eq!(entry.date, "2025-06-10T00:00:00.000Z");
        assert_eq!(form.draft(), &Draft::blank(today()));
    }

    #[test]
    fn test_submit_missing_title_keeps_draft() {
        let mut store = open_store();
        let mut form = filled_form();
        form.set_title("");
        let before = form.clone();

        let result = form.submit(&mut store, today());

        assert_eq!(result, Err(FormError::MissingRequiredFields));
        assert!(store.is_empty());
        assert_eq!(form, before);
    }

    #[test]
    fn test_submit_missing_amount_keeps_draft() {
        let mut store = open_store();
        let mut form = filled_form();
        form.set_amount("");
        let before = form.clone();

        assert_eq!(form.submit(&mut store, today()), Err(FormError::MissingRequiredFields));
        assert!(store.is_empty());
        assert_eq!(form, before);
    }

    #[test]
    fn test_whitespace_title_counts_as_present() {
        let mut store = open_store();
        let mut form = filled_form();
        form.set_title("  ");

        assert!(form.submit(&mut store, today()).is_ok());
        assert_eq!(store.entries()[0].title, "  ");
    }

    #[test]
    fn test_blank_amount_is_not_a_number() {
        let mut store = open_store();
        let mut form = filled_form();
        form.set_amount(" ");

        assert!(matches!(form.submit(&mut store, today()), Err(FormError::InvalidAmount(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_zero_amount_counts_as_present() {
        let mut store = open_store();
        let mut form = filled_form();
        form.set_amount("0");
        assert!(form.submit(&mut store, today()).is_ok());
        assert_eq!(store.entries()[0].amount, 0.0);
    }

    #[test]
    fn test_submit_rejects_non_numeric_amount() {
        let mut store = open_store();
        let mut form = filled_form();
        form.set_amount("abc");

        assert!(matches!(form.submit(&mut store, today()), Err(FormError::InvalidAmount(_))));
        assert!(store.is_empty());
        assert_eq!(form.draft().amount, "abc");
    }

    #[test]
    fn test_begin_edit_seeds_draft_with_day() {
        let mut store = open_store();
        filled_form().submit(&mut store, today()).unwrap();
        let entry = store.entries()[0].clone();

        let mut form = FormController::new(today());
        form.begin_edit(&entry);

        assert_eq!(form.editing_id(), Some(entry.id.as_str()));
        assert_eq!(form.draft().date, "2025-06-10");
        assert_eq!(form.draft().amount, "3.5");
        assert_eq!(form.draft().title, "Coffee");
    }

    #[test]
    fn test_edit_flow_changes_only_amount() {
        let mut store = open_store();
        filled_form().submit(&mut store, today()).unwrap();
        let mut other = filled_form();
        other.set_title("Tea");
        other.submit(&mut store, today()).unwrap();
        let original = store.entries()[1].clone();

        let mut form = FormController::new(today());
        form.begin_edit(&original);
        form.set_amount("7");
        let submitted = form.submit(&mut store, today()).unwrap();

        assert_eq!(
            submitted,
            Submitted::Updated {
                id: original.id.clone(),
                found: true
            }
        );
        assert_eq!(store.len(), 2);
        let edited = store.get(&original.id).unwrap();
        assert_eq!(edited.amount, 7.0);
        assert_eq!(edited.title, original.title);
        assert_eq!(edited.category, original.category);
        assert_eq!(edited.entry_type, original.entry_type);
        assert_eq!(edited.date, original.date);
        assert_eq!(store.entries()[1].id, original.id);
        assert!(!form.is_editing());
    }

    #[test]
    fn test_edit_of_removed_entry_returns_to_create() {
        let mut store = open_store();
        filled_form().submit(&mut store, today()).unwrap();
        let entry = store.entries()[0].clone();
        store.delete(&entry.id, &|_: &str| true);

        let mut form = FormController::new(today());
        form.begin_edit(&entry);
        let submitted = form.submit(&mut store, today()).unwrap();

        assert_eq!(submitted, Submitted::Updated { id: entry.id, found: false });
        assert!(store.is_empty());
        assert_eq!(form.mode(), &FormMode::Create);
    }

    #[test]
    fn test_cancel_resets() {
        let mut store = open_store();
        filled_form().submit(&mut store, today()).unwrap();

        let mut form = FormController::new(today());
        form.begin_edit(&store.entries()[0]);
        form.cancel(today());

        assert_eq!(form, FormController::new(today()));
    }
}

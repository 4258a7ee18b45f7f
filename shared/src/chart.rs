//! # Category Chart
//!
//! Data for the expense-by-category pie and the ownership rule for whatever
//! drawn chart object the host creates: at most one is alive at a time, the old
//! one is released before a new one is built, and the last one is released
//! when the slot goes away.

use crate::{Category, Entry};

/// One pie slice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySlice {
    pub category: Category,
    pub total: f64,
}

/// Expense totals for every category, in the fixed category order.
/// Categories without expenses are kept with a zero total.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub slices: Vec<CategorySlice>,
}

impl CategoryBreakdown {
    pub fn from_entries(entries: &[Entry]) -> Self {
        let slices = Category::ALL
            .iter()
            .map(|&category| CategorySlice {
                category,
                total: entries
                    .iter()
                    .filter(|e| e.is_expense() && e.category == category)
                    .map(|e| e.amount)
                    .sum(),
            })
            .collect();
        Self { slices }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.slices.iter().map(|s| s.category.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.slices.iter().map(|s| s.total).collect()
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.total).sum()
    }

    /// Sum of the positive slices only, which is what the pie divides up
    pub fn drawable_total(&self) -> f64 {
        self.slices.iter().map(|s| s.total).filter(|t| *t > 0.0).sum()
    }

    /// True when there is nothing to draw a pie from
    pub fn is_empty(&self) -> bool {
        self.drawable_total() <= 0.0
    }
}

/// A live chart object owned by a [`ChartSlot`]
pub trait ChartHandle {
    /// Tear down whatever the chart holds (canvas contents, listeners, ...)
    fn release(&mut self);
}

/// Holds at most one chart handle and guarantees its release
pub struct ChartSlot<H: ChartHandle> {
    handle: Option<H>,
}

impl<H: ChartHandle> ChartSlot<H> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    /// Release the current chart, then build a new one.
    ///
    /// If `build` fails the slot stays empty.
    pub fn redraw<F, E>(&mut self, build: F) -> Result<(), E>
    where
        F: FnOnce() -> Result<H, E>,
    {
        self.release();
        self.handle = Some(build()?);
        Ok(())
    }

    pub fn release(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.release();
        }
    }
}

impl<H: ChartHandle> Default for ChartSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ChartHandle> Drop for ChartSlot<H> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EntryType;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn entry(amount: f64, category: Category, entry_type: EntryType) -> Entry {
        Entry {
            id: format!("{}-{}", category, amount),
            title: "x".to_string(),
            amount,
            category,
            entry_type,
            date: "2025-06-15T00:00:00.000Z".to_string(),
        }
    }

    /// Records create/release events in a shared log
    struct RecordingHandle {
        name: u32,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl ChartHandle for RecordingHandle {
        fn release(&mut self) {
            self.log.borrow_mut().push(format!("release {}", self.name));
        }
    }

    fn build(name: u32, log: &Rc<RefCell<Vec<String>>>) -> Result<RecordingHandle, ()> {
        log.borrow_mut().push(format!("build {}", name));
        Ok(RecordingHandle {
            name,
            log: log.clone(),
        })
    }

    #[test]
    fn test_breakdown_sums_expenses_per_category() {
        let entries = vec![
            entry(10.0, Category::Food, EntryType::Expense),
            entry(5.0, Category::Food, EntryType::Expense),
            entry(20.0, Category::Bills, EntryType::Expense),
            entry(500.0, Category::Income, EntryType::Income),
            entry(7.0, Category::Food, EntryType::Income),
        ];
        let breakdown = CategoryBreakdown::from_entries(&entries);

        assert_eq!(breakdown.labels(), vec!["Food", "Transport", "Bills", "Shopping", "Entertainment", "Income", "Other"]);
        assert_eq!(breakdown.values(), vec![15.0, 0.0, 20.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(breakdown.total(), 35.0);
        assert!(!breakdown.is_empty());
    }

    #[test]
    fn test_breakdown_keeps_zero_slices() {
        let breakdown = CategoryBreakdown::from_entries(&[]);
        assert_eq!(breakdown.slices.len(), Category::ALL.len());
        assert!(breakdown.is_empty());
    }

    #[test]
    fn test_negative_slices_are_left_out_of_the_pie() {
        let entries = vec![
            entry(30.0, Category::Food, EntryType::Expense),
            entry(-10.0, Category::Bills, EntryType::Expense),
            entry(10.0, Category::Other, EntryType::Expense),
        ];
        let breakdown = CategoryBreakdown::from_entries(&entries);

        assert_eq!(breakdown.total(), 30.0);
        assert_eq!(breakdown.drawable_total(), 40.0);
        assert!(!breakdown.is_empty());
    }

    #[test]
    fn test_only_negative_slices_is_empty() {
        let breakdown = CategoryBreakdown::from_entries(&[entry(-5.0, Category::Food, EntryType::Expense)]);
        assert!(breakdown.is_empty());
    }

    #[test]
    fn test_redraw_releases_previous_before_building() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = ChartSlot::new();

        slot.redraw(|| build(1, &log)).unwrap();
        slot.redraw(|| build(2, &log)).unwrap();

        assert_eq!(*log.borrow(), vec!["build 1", "release 1", "build 2"]);
        assert_eq!(slot.handle().map(|h| h.name), Some(2));
    }

    #[test]
    fn test_drop_releases_live_handle() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut slot = ChartSlot::new();
            slot.redraw(|| build(1, &log)).unwrap();
        }
        assert_eq!(*log.borrow(), vec!["build 1", "release 1"]);
    }

    #[test]
    fn test_failed_build_leaves_slot_empty() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = ChartSlot::new();
        slot.redraw(|| build(1, &log)).unwrap();

        let result: Result<(), &str> = slot.redraw(|| Err("no canvas"));

        assert!(result.is_err());
        assert!(!slot.is_live());
        assert_eq!(*log.borrow(), vec!["build 1", "release 1"]);
    }

    #[test]
    fn test_release_is_idempotent() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = ChartSlot::new();
        slot.redraw(|| build(1, &log)).unwrap();
        slot.release();
        slot.release();
        drop(slot);
        assert_eq!(*log.borrow(), vec!["build 1", "release 1"]);
    }
}

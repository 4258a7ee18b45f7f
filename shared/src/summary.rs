//! Income, expense and balance totals plus money formatting.

use crate::Entry;

/// Totals over the full (unfiltered) collection
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

impl Summary {
    pub fn from_entries(entries: &[Entry]) -> Self {
        let total_income: f64 = entries.iter().filter(|e| e.is_income()).map(|e| e.amount).sum();
        let total_expense: f64 = entries.iter().filter(|e| e.is_expense()).map(|e| e.amount).sum();
        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }
}

/// Format a value with grouped thousands and two decimals, e.g. "₹1,234.50".
/// Negative values get a leading minus: "-₹50.00". The sign follows the
/// rounded value, so float noise around zero prints as "₹0.00".
pub fn format_money(value: f64, symbol: &str) -> String {
    let rounded = round_cents(value);
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, group_thousands(rounded.abs()))
}

/// Row amount with an explicit direction: "+₹100.00" or "-₹40.00".
/// A negative stored amount keeps its own sign after the symbol: "+₹-5.00".
pub fn format_signed(entry: &Entry, symbol: &str) -> String {
    let direction = if entry.is_income() { "+" } else { "-" };
    format!("{}{}{}", direction, symbol, signed_amount(entry.amount))
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Two-decimal grouped number with a leading minus when it rounds below zero
fn signed_amount(value: f64) -> String {
    let rounded = round_cents(value);
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(rounded.abs()))
}

fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{}.{}", grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, EntryType};

    fn entry(amount: f64, entry_type: EntryType) -> Entry {
        Entry {
            id: format!("{}-{}", amount, entry_type),
            title: "x".to_string(),
            amount,
            category: Category::Other,
            entry_type,
            date: "2025-06-15T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_summary_totals() {
        let entries = vec![
            entry(100.0, EntryType::Income),
            entry(40.0, EntryType::Expense),
            entry(10.0, EntryType::Expense),
        ];
        let summary = Summary::from_entries(&entries);
        assert_eq!(summary.total_income, 100.0);
        assert_eq!(summary.total_expense, 50.0);
        assert_eq!(summary.balance, 50.0);
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(Summary::from_entries(&[]), Summary::default());
    }

    #[test]
    fn test_summary_negative_balance() {
        let entries = vec![entry(10.0, EntryType::Income), entry(25.0, EntryType::Expense)];
        assert_eq!(Summary::from_entries(&entries).balance, -15.0);
    }

    #[test]
    fn test_format_money_grouping() {
        assert_eq!(format_money(0.0, "₹"), "₹0.00");
        assert_eq!(format_money(999.0, "₹"), "₹999.00");
        assert_eq!(format_money(1234.5, "₹"), "₹1,234.50");
        assert_eq!(format_money(1234567.891, "$"), "$1,234,567.89");
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!(format_money(-50.0, "₹"), "-₹50.00");
        assert_eq!(format_money(-1500.0, "₹"), "-₹1,500.00");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(&entry(100.0, EntryType::Income), "₹"), "+₹100.00");
        assert_eq!(format_signed(&entry(40.0, EntryType::Expense), "₹"), "-₹40.00");
    }

    #[test]
    fn test_balance_near_zero_prints_without_minus() {
        let entries = vec![
            entry(0.3, EntryType::Income),
            entry(0.1, EntryType::Expense),
            entry(0.2, EntryType::Expense),
        ];
        let summary = Summary::from_entries(&entries);
        assert!(summary.balance < 0.0);
        assert_eq!(format_money(summary.balance, "₹"), "₹0.00");
        assert_eq!(format_money(-0.004, "₹"), "₹0.00");
        assert_eq!(format_money(-0.005, "₹"), "-₹0.01");
    }

    #[test]
    fn test_format_signed_negative_amount_agrees_with_totals() {
        let refund = entry(-5.0, EntryType::Income);
        let summary = Summary::from_entries(std::slice::from_ref(&refund));

        assert_eq!(format_signed(&refund, "₹"), "+₹-5.00");
        assert_eq!(format_money(summary.total_income, "₹"), "-₹5.00");
        assert_eq!(format_signed(&entry(-1234.5, EntryType::Expense), "$"), "-$-1,234.50");
    }
}

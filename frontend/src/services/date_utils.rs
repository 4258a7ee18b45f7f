use chrono::NaiveDate;

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Format a stored timestamp for the entry list (e.g., "Jun 15, 2025")
pub fn format_entry_date(stored: &str) -> String {
    let day = stored.get(..10).unwrap_or(stored);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => stored.to_string(),
    }
}


#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_today_matches_browser_local_date() {
        use chrono::Datelike;

        let now = js_sys::Date::new_0();
        let date = today();

        assert_eq!(date.year(), now.get_full_year() as i32);
        assert_eq!(date.month(), now.get_month() + 1);
        assert_eq!(date.day(), now.get_date());
    }
}

//! Date helper functions

use chrono::NaiveDate;

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`)
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Format a date in long en-US form (like "February 18, 2026")
pub fn full_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a date in ISO 8601 form
pub fn iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

//! Terminal display formatting
//!
//! Plain-string rendering of core data for the CLI. The core returns raw
//! values; all rounding and clamping for presentation happens here.

pub mod budget;
pub mod report;
pub mod transaction;

use chrono::{Datelike, NaiveDate};

use crate::models::Settings;

/// Format an amount with the configured currency symbol, two decimals
pub fn format_amount(settings: &Settings, amount: f64) -> String {
    format!("{}{:.2}", settings.currency, amount)
}

/// Format a date according to the configured display pattern
///
/// Supports the DD, MM, and YYYY tokens; unknown patterns fall back to
/// DD/MM/YYYY.
pub fn format_date(settings: &Settings, date: NaiveDate) -> String {
    let pattern = settings.date_format.as_str();
    if !(pattern.contains("DD") && pattern.contains("MM") && pattern.contains("YYYY")) {
        return format_date_with(date, "DD/MM/YYYY");
    }
    format_date_with(date, pattern)
}

fn format_date_with(date: NaiveDate, pattern: &str) -> String {
    pattern
        .replace("DD", &format!("{:02}", date.day()))
        .replace("MM", &format!("{:02}", date.month()))
        .replace("YYYY", &date.year().to_string())
}

/// Truncate a string to a maximum width, appending an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

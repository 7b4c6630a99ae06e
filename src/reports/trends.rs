//! Monthly income/expense trends
//!
//! A fixed-width window of consecutive calendar months ending at the
//! reference month, oldest first. Empty months contribute zero entries, so
//! the output length is always the requested window size.

use chrono::{Datelike, Months, NaiveDate};

use crate::ledger::Ledger;
use crate::models::TransactionType;

/// Default trend window, in months
pub const DEFAULT_TREND_MONTHS: u32 = 6;

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTrend {
    /// Display label, e.g. "Aug 2025"
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub income: f64,
    pub expense: f64,
}

/// Trends for `months_back` consecutive months ending at `today`'s month
///
/// The result always has exactly `months_back` entries, in chronological
/// ascending order (current month last).
pub fn monthly_trends(ledger: &Ledger, today: NaiveDate, months_back: u32) -> Vec<MonthlyTrend> {
    let mut trends = Vec::with_capacity(months_back as usize);

    for offset in (0..months_back).rev() {
        let month_start = today
            .with_day(1)
            .and_then(|d| d.checked_sub_months(Months::new(offset)))
            .unwrap_or(today);

        let (year, month) = (month_start.year(), month_start.month());

        let mut income = 0.0;
        let mut expense = 0.0;
        for txn in ledger
            .transactions
            .iter()
            .filter(|t| t.date.year() == year && t.date.month() == month)
        {
            match txn.kind {
                TransactionType::Income => income += txn.amount,
                TransactionType::Expense => expense += txn.amount,
            }
        }

        trends.push(MonthlyTrend {
            label: month_start.format("%b %Y").to_string(),
            year,
            month,
            income,
            expense,
        });
    }

    trends
}

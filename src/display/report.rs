//! Dashboard and report display formatting

use crate::models::Settings;
use crate::reports::{CategoryTotal, MonthlyTrend};

use super::format_amount;

/// Format the dashboard totals block
pub fn format_totals(settings: &Settings, income: f64, expense: f64, balance: f64) -> String {
    format!(
        "Income:  {}\nExpense: {}\nBalance: {}\n",
        format_amount(settings, income),
        format_amount(settings, expense),
        format_amount(settings, balance),
    )
}

/// Format the all-time expense breakdown by category
pub fn format_category_breakdown(settings: &Settings, breakdown: &[CategoryTotal]) -> String {
    if breakdown.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let total: f64 = breakdown.iter().map(|entry| entry.total).sum();

    let mut output = String::new();
    for entry in breakdown {
        let share = if total > 0.0 {
            entry.total / total * 100.0
        } else {
            0.0
        };
        output.push_str(&format!(
            "{:16} {:>12} {:>6.1}%\n",
            entry.category,
            format_amount(settings, entry.total),
            share,
        ));
    }
    output
}

/// Format the monthly trends table, oldest month first
pub fn format_trends(settings: &Settings, trends: &[MonthlyTrend]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:>12} {:>12} {:>12}\n",
        "Month", "Income", "Expense", "Net"
    ));
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for trend in trends {
        output.push_str(&format!(
            "{:10} {:>12} {:>12} {:>12}\n",
            trend.label,
            format_amount(settings, trend.income),
            format_amount(settings, trend.expense),
            format_amount(settings, trend.income - trend.expense),
        ));
    }

    output
}

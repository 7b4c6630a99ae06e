//! Budget display formatting
//!
//! Renders budget consumption with a progress bar. The raw percentage is
//! uncapped; only the bar width is clamped to 100%.

use crate::models::{BudgetStatus, BudgetTier, Settings};

use super::format_amount;

const BAR_WIDTH: usize = 20;

/// Format one category's budget status line with a progress bar
pub fn format_budget_line(settings: &Settings, category: &str, status: &BudgetStatus) -> String {
    let clamped = status.percentage.clamp(0.0, 100.0);
    let filled = (clamped / 100.0 * BAR_WIDTH as f64).round() as usize;
    let bar: String = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled);

    let marker = match status.tier() {
        BudgetTier::Ok => ' ',
        BudgetTier::Warning => '!',
        BudgetTier::Danger => '‼',
    };

    format!(
        "{:16} [{}] {:>6.1}% {} spent {} / {}, remaining {}",
        category,
        bar,
        status.percentage,
        marker,
        format_amount(settings, status.spent),
        format_amount(settings, status.limit),
        format_amount(settings, status.remaining),
    )
}

/// Format the full budget overview
pub fn format_budget_overview(
    settings: &Settings,
    overview: &[(String, BudgetStatus)],
) -> String {
    if overview.is_empty() {
        return "No expense categories defined.\n".to_string();
    }

    let mut output = String::new();
    for (category, status) in overview {
        output.push_str(&format_budget_line(settings, category, status));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_percentage_shown_uncapped() {
        let settings = Settings::default();
        let status = BudgetStatus::new(3000.0, 2000.0);

        let line = format_budget_line(&settings, "Food", &status);
        assert!(line.contains("150.0%"));
        // Bar itself is clamped to full
        assert!(line.contains(&"█".repeat(20)));
    }

    #[test]
    fn test_tier_markers() {
        let settings = Settings::default();

        let warning = format_budget_line(&settings, "Bills", &BudgetStatus::new(80.0, 100.0));
        assert!(warning.contains('!'));

        let danger = format_budget_line(&settings, "Bills", &BudgetStatus::new(95.0, 100.0));
        assert!(danger.contains('‼'));
    }

    #[test]
    fn test_overview_lists_every_category() {
        let settings = Settings::default();
        let overview = vec![
            ("Food".to_string(), BudgetStatus::new(450.0, 2000.0)),
            ("Bills".to_string(), BudgetStatus::new(0.0, 3000.0)),
        ];

        let output = format_budget_overview(&settings, &overview);
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("Food"));
        assert!(output.contains("22.5%"));
    }
}

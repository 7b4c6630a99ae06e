//! Budget model
//!
//! Monthly spending limits per expense category, plus the computed status
//! of a category against its limit for a given month.

use std::collections::BTreeMap;

/// Monthly limits keyed by expense-category name
///
/// Entries are independent of category membership: a budget may outlive its
/// category, and a category with no entry is treated as limit 0 (any spend
/// shows as over budget).
pub type Budgets = BTreeMap<String, f64>;

/// The default monthly limits, seeded at first run
pub fn default_budgets() -> Budgets {
    [
        ("Food", 2000.0),
        ("Transportation", 800.0),
        ("Shopping", 1500.0),
        ("Entertainment", 1000.0),
        ("Bills", 3000.0),
        ("Healthcare", 500.0),
        ("Education", 1000.0),
        ("Others", 1000.0),
    ]
    .into_iter()
    .map(|(name, limit)| (name.to_string(), limit))
    .collect()
}

/// Consumption tier for a budget, derived from the raw percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTier {
    Ok,
    Warning,
    Danger,
}

/// A category's spending measured against its monthly limit
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    /// Expense total for the category in the evaluated month
    pub spent: f64,
    /// The configured monthly limit (0 when no budget entry exists)
    pub limit: f64,
    /// `limit - spent`; negative when over budget
    pub remaining: f64,
    /// `spent / limit * 100`, or 0 when the limit is 0. Not capped at 100;
    /// display layers clamp the progress bar width, not the value.
    pub percentage: f64,
}

impl BudgetStatus {
    /// Compute the status from a spent total and a limit
    pub fn new(spent: f64, limit: f64) -> Self {
        let percentage = if limit > 0.0 {
            spent / limit * 100.0
        } else {
            0.0
        };
        Self {
            spent,
            limit,
            remaining: limit - spent,
            percentage,
        }
    }

    /// Tier thresholds: >= 90% is danger, >= 75% is warning
    pub fn tier(&self) -> BudgetTier {
        if self.percentage >= 90.0 {
            BudgetTier::Danger
        } else if self.percentage >= 75.0 {
            BudgetTier::Warning
        } else {
            BudgetTier::Ok
        }
    }

    /// Whether spending exceeds the limit
    pub fn is_over(&self) -> bool {
        self.remaining < 0.0
    }
}

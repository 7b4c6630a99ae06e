//! Budget service
//!
//! Budget assignment per expense category and month-scoped consumption.
//! Status evaluation takes the reference date explicitly so callers (and
//! tests) control which month "current" means.

use chrono::{Datelike, NaiveDate};

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::LedgerStore;
use crate::models::{BudgetStatus, TransactionType};

/// Service for budget management
pub struct BudgetService<'a> {
    store: &'a mut LedgerStore,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a mut LedgerStore) -> Self {
        Self { store }
    }

    /// Set (or replace) the monthly limit for a category
    ///
    /// An unconditional upsert: the category does not have to exist in the
    /// category list, and existing entries are overwritten.
    pub fn set_budget(&mut self, category: &str, amount: f64) -> LedgerResult<()> {
        if !(amount > 0.0) {
            return Err(LedgerError::Validation(
                "Budget amount must be positive".into(),
            ));
        }

        self.store
            .ledger_mut()
            .budgets
            .insert(category.to_string(), amount);
        self.store.save();

        Ok(())
    }

    /// Consumption of one category's budget in `today`'s calendar month
    ///
    /// Sums expense transactions for the category whose date falls in the
    /// same month and year as `today`. A category with no budget entry has
    /// limit 0, so any spend shows as over budget.
    pub fn budget_status(&self, category: &str, today: NaiveDate) -> BudgetStatus {
        let ledger = self.store.ledger();

        let spent: f64 = ledger
            .transactions
            .iter()
            .filter(|t| {
                t.kind == TransactionType::Expense
                    && t.category == category
                    && t.date.year() == today.year()
                    && t.date.month() == today.month()
            })
            .map(|t| t.amount)
            .sum();

        let limit = ledger.budgets.get(category).copied().unwrap_or(0.0);
        BudgetStatus::new(spent, limit)
    }

    /// Status for every expense category, in category display order
    pub fn overview(&self, today: NaiveDate) -> Vec<(String, BudgetStatus)> {
        let categories = self.store.ledger().categories.expense.clone();
        categories
            .into_iter()
            .map(|category| {
                let status = self.budget_status(&category, today);
                (category, status)
            })
            .collect()
    }
}

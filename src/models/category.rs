//! Category set model
//!
//! Two ordered lists of unique category names, one per transaction type.
//! Order is user-visible (it drives list rendering and chart colors), so the
//! lists stay in insertion order rather than being sorted.

use serde::{Deserialize, Serialize};

use super::transaction::TransactionType;

/// Default expense categories, seeded at first run
pub const DEFAULT_EXPENSE_CATEGORIES: [&str; 8] = [
    "Food",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills",
    "Healthcare",
    "Education",
    "Others",
];

/// Default income categories, seeded at first run
pub const DEFAULT_INCOME_CATEGORIES: [&str; 5] =
    ["Salary", "Freelance", "Business", "Investment", "Others"];

/// The category lists for both transaction types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySet {
    pub expense: Vec<String>,
    pub income: Vec<String>,
}

impl CategorySet {
    /// The ordered category list for a transaction type
    pub fn for_kind(&self, kind: TransactionType) -> &[String] {
        match kind {
            TransactionType::Expense => &self.expense,
            TransactionType::Income => &self.income,
        }
    }

    /// Mutable access to the list for a transaction type
    pub fn for_kind_mut(&mut self, kind: TransactionType) -> &mut Vec<String> {
        match kind {
            TransactionType::Expense => &mut self.expense,
            TransactionType::Income => &mut self.income,
        }
    }

    /// Exact (case-sensitive) membership check within one type's list
    pub fn contains(&self, kind: TransactionType, name: &str) -> bool {
        self.for_kind(kind).iter().any(|c| c == name)
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            expense: DEFAULT_EXPENSE_CATEGORIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            income: DEFAULT_INCOME_CATEGORIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

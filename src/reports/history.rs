//! Recency ordering and history filtering
//!
//! Both views sort by the system-assigned creation timestamp, not the
//! user-assigned transaction date: a transaction dated last week but entered
//! today is still the most recent.

use crate::ledger::Ledger;
use crate::models::{Transaction, TransactionType};

/// Filter criteria for the transaction history view
///
/// Empty/absent criteria match everything, so the default filter returns the
/// full history.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Case-insensitive substring matched against description or category
    pub search: String,
    /// Restrict to one transaction type
    pub kind: Option<TransactionType>,
    /// Restrict to an exact category name
    pub category: Option<String>,
}

impl TransactionFilter {
    fn matches(&self, txn: &Transaction) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            txn.description.to_lowercase().contains(&needle)
                || txn.category.to_lowercase().contains(&needle)
        };
        let matches_kind = self.kind.map_or(true, |kind| txn.kind == kind);
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| txn.category == category);

        matches_search && matches_kind && matches_category
    }
}

/// The `n` most recently recorded transactions, newest first
pub fn recent_transactions(ledger: &Ledger, n: usize) -> Vec<Transaction> {
    let mut transactions = ledger.transactions.clone();
    transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    transactions.truncate(n);
    transactions
}

/// Transactions matching the filter, newest first by creation time
pub fn filter_transactions(ledger: &Ledger, filter: &TransactionFilter) -> Vec<Transaction> {
    let mut transactions: Vec<Transaction> = ledger
        .transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();
    transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    transactions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{generate_id, seed_transactions};
    use chrono::NaiveDate;

    fn seeded_ledger() -> Ledger {
        Ledger {
            transactions: seed_transactions(),
            ..Ledger::default()
        }
    }

    #[test]
    fn test_recent_sorts_by_created_at_not_date() {
        let mut ledger = seeded_ledger();

        // Dated back in July but entered after everything else
        ledger.transactions.push(Transaction {
            id: generate_id(),
            kind: TransactionType::Expense,
            amount: 25.0,
            category: "Food".into(),
            date: NaiveDate::from_ymd_opt(2025, 7, 2).unwrap(),
            description: "Late entry".into(),
            payment_method: "Cash".into(),
            created_at: "2025-09-01T12:00:00Z".parse().unwrap(),
        });

        let recent = recent_transactions(&ledger, 5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].description, "Late entry");
        // Next newest by creation time is the Aug 30 grocery run
        assert_eq!(recent[1].description, "Grocery shopping");
    }

    #[test]
    fn test_recent_truncates() {
        let ledger = seeded_ledger();
        assert_eq!(recent_transactions(&ledger, 3).len(), 3);
        assert_eq!(recent_transactions(&ledger, 50).len(), 5);
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let ledger = seeded_ledger();
        let all = filter_transactions(&ledger, &TransactionFilter::default());
        assert_eq!(all.len(), 5);
        // Newest creation timestamp first
        assert_eq!(all[0].description, "Grocery shopping");
    }

    #[test]
    fn test_search_is_case_insensitive_over_description_and_category() {
        let ledger = seeded_ledger();

        let by_description = filter_transactions(
            &ledger,
            &TransactionFilter {
                search: "UBER".into(),
                ..Default::default()
            },
        );
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].category, "Transportation");

        let by_category = filter_transactions(
            &ledger,
            &TransactionFilter {
                search: "sal".into(),
                ..Default::default()
            },
        );
        // Matches both the "Salary" category and "Monthly salary" description
        assert_eq!(by_category.len(), 1);
    }

    #[test]
    fn test_kind_and_category_filters_combine() {
        let ledger = seeded_ledger();

        let expenses = filter_transactions(
            &ledger,
            &TransactionFilter {
                kind: Some(TransactionType::Expense),
                ..Default::default()
            },
        );
        assert_eq!(expenses.len(), 4);

        let food_expenses = filter_transactions(
            &ledger,
            &TransactionFilter {
                kind: Some(TransactionType::Expense),
                category: Some("Food".into()),
                ..Default::default()
            },
        );
        assert_eq!(food_expenses.len(), 1);

        let no_match = filter_transactions(
            &ledger,
            &TransactionFilter {
                search: "salary".into(),
                kind: Some(TransactionType::Expense),
                ..Default::default()
            },
        );
        assert!(no_match.is_empty());
    }

    #[test]
    fn test_category_filter_is_exact() {
        let ledger = seeded_ledger();
        let result = filter_transactions(
            &ledger,
            &TransactionFilter {
                category: Some("food".into()),
                ..Default::default()
            },
        );
        assert!(result.is_empty());
    }
}

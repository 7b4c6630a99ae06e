//! Expense breakdown by category
//!
//! All-time totals, unlike budget status which is month-scoped. The result
//! keeps first-encountered scan order: chart colors are assigned by position,
//! so the order has to be deterministic across renders.

use crate::ledger::Ledger;
use crate::models::TransactionType;

/// One category's all-time expense total
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Summed expense amounts per category, in first-encountered order
pub fn expenses_by_category(ledger: &Ledger) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for txn in ledger
        .transactions
        .iter()
        .filter(|t| t.kind == TransactionType::Expense)
    {
        match totals.iter_mut().find(|entry| entry.category == txn.category) {
            Some(entry) => entry.total += txn.amount,
            None => totals.push(CategoryTotal {
                category: txn.category.clone(),
                total: txn.amount,
            }),
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::seed_transactions;
    use crate::reports::total_by_type;

    fn seeded_ledger() -> Ledger {
        Ledger {
            transactions: seed_transactions(),
            ..Ledger::default()
        }
    }

    #[test]
    fn test_breakdown_excludes_income() {
        let ledger = seeded_ledger();
        let breakdown = expenses_by_category(&ledger);

        assert!(breakdown.iter().all(|entry| entry.category != "Salary"));
    }

    #[test]
    fn test_breakdown_sums_to_expense_total() {
        let ledger = seeded_ledger();
        let breakdown = expenses_by_category(&ledger);

        let sum: f64 = breakdown.iter().map(|entry| entry.total).sum();
        assert_eq!(sum, total_by_type(&ledger, TransactionType::Expense));
    }

    #[test]
    fn test_first_encountered_order() {
        let ledger = seeded_ledger();
        let breakdown = expenses_by_category(&ledger);

        // Fixture scan order: Food, Transportation, Bills, Entertainment
        let order: Vec<_> = breakdown.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(order, ["Food", "Transportation", "Bills", "Entertainment"]);
    }

    #[test]
    fn test_repeat_categories_accumulate() {
        let mut ledger = seeded_ledger();
        let mut extra = ledger.transactions[0].clone();
        extra.id = "extra".into();
        extra.amount = 50.0;
        ledger.transactions.push(extra);

        let breakdown = expenses_by_category(&ledger);
        assert_eq!(breakdown[0].category, "Food");
        assert_eq!(breakdown[0].total, 500.0);
        // No duplicate Food entry appended
        assert_eq!(breakdown.len(), 4);
    }

    #[test]
    fn test_empty_ledger() {
        assert!(expenses_by_category(&Ledger::default()).is_empty());
    }
}

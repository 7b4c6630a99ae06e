//! Income, expense, and balance totals

use crate::ledger::Ledger;
use crate::models::TransactionType;

/// Sum of amounts over all transactions of one type
pub fn total_by_type(ledger: &Ledger, kind: TransactionType) -> f64 {
    ledger
        .transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Current balance: income total minus expense total
pub fn balance(ledger: &Ledger) -> f64 {
    total_by_type(ledger, TransactionType::Income) - total_by_type(ledger, TransactionType::Expense)
}

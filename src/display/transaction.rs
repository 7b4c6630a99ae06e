//! Transaction display formatting

use crate::models::{Settings, Transaction, TransactionType};

use super::{format_amount, format_date, truncate};

/// Format a single transaction as a history row
pub fn format_transaction_row(settings: &Settings, txn: &Transaction) -> String {
    let sign = match txn.kind {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    };

    format!(
        "{:10} {:24} {:16} {:>12}",
        format_date(settings, txn.date),
        truncate(&txn.description, 24),
        truncate(&txn.category, 16),
        format!("{}{}", sign, format_amount(settings, txn.amount)),
    )
}

/// Format a list of transactions as a history view
pub fn format_transaction_list(settings: &Settings, transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:24} {:16} {:>12}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(66));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(settings, txn));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::seed_transactions;

    #[test]
    fn test_row_sign_follows_type() {
        let settings = Settings::default();
        let seeds = seed_transactions();

        let expense_row = format_transaction_row(&settings, &seeds[0]);
        assert!(expense_row.contains("-₹450.00"));

        let income_row = format_transaction_row(&settings, &seeds[1]);
        assert!(income_row.contains("+₹5000.00"));
    }

    #[test]
    fn test_empty_list() {
        let settings = Settings::default();
        assert_eq!(
            format_transaction_list(&settings, &[]),
            "No transactions found.\n"
        );
    }

    #[test]
    fn test_list_has_header_and_rows() {
        let settings = Settings::default();
        let output = format_transaction_list(&settings, &seed_transactions());

        assert!(output.starts_with("Date"));
        // Header + separator + 5 rows
        assert_eq!(output.lines().count(), 7);
    }
}

//! The ledger aggregate root
//!
//! Owns the four persisted collections: transactions, categories, budgets,
//! and settings. The whole state is the unit of persistence, serialized as
//! four independently keyed blobs by [`store::LedgerStore`].

pub mod store;

pub use store::LedgerStore;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{default_budgets, Budgets, CategorySet, Settings, Transaction, TransactionType};

/// All financial state of a single user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,
    pub categories: CategorySet,
    pub budgets: Budgets,
    pub settings: Settings,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            categories: CategorySet::default(),
            budgets: default_budgets(),
            settings: Settings::default(),
        }
    }
}

impl Ledger {
    /// Whether any transaction (of either type) references `category`
    pub fn category_in_use(&self, category: &str) -> bool {
        self.transactions.iter().any(|t| t.category == category)
    }
}

/// Generate a fresh transaction identifier
///
/// Only uniqueness over the store's practical lifetime matters; collisions
/// are treated as impossible rather than defended against.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

fn seed_transaction(
    kind: TransactionType,
    amount: f64,
    category: &str,
    date: (i32, u32, u32),
    description: &str,
    payment_method: &str,
    created_at: &str,
) -> Transaction {
    let (year, month, day) = date;
    Transaction {
        id: generate_id(),
        kind,
        amount,
        category: category.to_string(),
        // Literal fixture dates; in-range by construction
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        description: description.to_string(),
        payment_method: payment_method.to_string(),
        created_at: created_at
            .parse::<DateTime<Utc>>()
            .unwrap_or_else(|_| Utc::now()),
    }
}

/// The fixture transactions installed on a fresh store
///
/// Literal values are part of the behavioral contract; downstream parity
/// tests depend on these exact dates and amounts.
pub fn seed_transactions() -> Vec<Transaction> {
    vec![
        seed_transaction(
            TransactionType::Expense,
            450.00,
            "Food",
            (2025, 8, 30),
            "Grocery shopping",
            "Credit Card",
            "2025-08-30T10:30:00Z",
        ),
        seed_transaction(
            TransactionType::Income,
            5000.00,
            "Salary",
            (2025, 8, 1),
            "Monthly salary",
            "Bank Transfer",
            "2025-08-01T09:00:00Z",
        ),
        seed_transaction(
            TransactionType::Expense,
            80.00,
            "Transportation",
            (2025, 8, 29),
            "Uber ride to office",
            "Digital Wallet",
            "2025-08-29T08:15:00Z",
        ),
        seed_transaction(
            TransactionType::Expense,
            1200.00,
            "Bills",
            (2025, 8, 15),
            "Electricity bill",
            "Bank Transfer",
            "2025-08-15T14:20:00Z",
        ),
        seed_transaction(
            TransactionType::Expense,
            350.00,
            "Entertainment",
            (2025, 8, 28),
            "Movie and dinner",
            "Credit Card",
            "2025-08-28T19:30:00Z",
        ),
    ]
}

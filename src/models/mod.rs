//! Core data models for Money Buddy
//!
//! Fixed-field record types for transactions, categories, budgets, and
//! settings. All types carry serde derives so the whole ledger can round-trip
//! through the storage layer.

pub mod budget;
pub mod category;
pub mod settings;
pub mod transaction;

pub use budget::{default_budgets, BudgetStatus, BudgetTier, Budgets};
pub use category::CategorySet;
pub use settings::{Settings, Theme};
pub use transaction::{Transaction, TransactionInput, TransactionType};

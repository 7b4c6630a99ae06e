//! Storage layer for Money Buddy
//!
//! The persistence seam is a synchronous key-value string store: the ledger
//! serializes each of its collections to a JSON string and hands it to the
//! store under a fixed key. Two implementations are provided: a file-backed
//! store with atomic writes, and an in-memory store for tests.

pub mod file_store;
pub mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use crate::error::LedgerResult;

/// Storage key for the transaction sequence
pub const KEY_TRANSACTIONS: &str = "transactions";
/// Storage key for the category lists
pub const KEY_CATEGORIES: &str = "categories";
/// Storage key for the budget limits
pub const KEY_BUDGETS: &str = "budgets";
/// Storage key for user settings
pub const KEY_SETTINGS: &str = "settings";

/// All keys the ledger persists under, in load order
pub const ALL_KEYS: [&str; 4] = [KEY_TRANSACTIONS, KEY_CATEGORIES, KEY_BUDGETS, KEY_SETTINGS];

/// Synchronous key-value string storage
///
/// The ledger store treats this as an external collaborator: any error it
/// returns is reported as a diagnostic, never propagated into user flows.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if absent
    fn get(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()>;

    /// Remove the value stored under `key`; removing an absent key is a no-op
    fn remove(&mut self, key: &str) -> LedgerResult<()>;
}

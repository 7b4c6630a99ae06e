//! Ledger store: in-memory state plus the persistence round-trip
//!
//! The store owns the [`Ledger`] and a [`KeyValueStore`] and keeps them in
//! sync with a write-through policy: every mutating operation persists before
//! returning, so the stored copy never lags more than one operation behind
//! memory.
//!
//! Persistence failures are deliberately non-fatal. A blob that is missing or
//! fails to parse on load leaves the in-memory default in place; a failed
//! write is logged and the mutation stands. Memory is always the source of
//! truth.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Transaction, TransactionInput};
use crate::storage::{
    KeyValueStore, ALL_KEYS, KEY_BUDGETS, KEY_CATEGORIES, KEY_SETTINGS, KEY_TRANSACTIONS,
};

use super::{generate_id, seed_transactions, Ledger};

/// Owns the ledger and its backing key-value store
pub struct LedgerStore {
    ledger: Ledger,
    store: Box<dyn KeyValueStore>,
}

impl LedgerStore {
    /// Create a store with default (unseeded) in-memory state
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            ledger: Ledger::default(),
            store,
        }
    }

    /// Create, load persisted state, and seed the fixture if empty
    ///
    /// This is the standard startup sequence.
    pub fn open(store: Box<dyn KeyValueStore>) -> Self {
        let mut ledger_store = Self::new(store);
        ledger_store.load();
        ledger_store.seed_if_empty();
        ledger_store
    }

    /// Read-only view of the current state
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Mutable access for the service layer; callers persist via [`save`](Self::save)
    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Load all four collections from the store
    ///
    /// Each blob is loaded independently: one that is absent or malformed
    /// leaves the current in-memory value untouched and does not block the
    /// others. Problems are logged, never surfaced.
    pub fn load(&mut self) {
        if let Some(transactions) = self.load_blob(KEY_TRANSACTIONS) {
            self.ledger.transactions = transactions;
        }
        if let Some(categories) = self.load_blob(KEY_CATEGORIES) {
            self.ledger.categories = categories;
        }
        if let Some(budgets) = self.load_blob(KEY_BUDGETS) {
            self.ledger.budgets = budgets;
        }
        if let Some(settings) = self.load_blob(KEY_SETTINGS) {
            self.ledger.settings = settings;
        }
    }

    fn load_blob<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(key, error = %e, "ignoring malformed stored blob");
                    None
                }
            },
            Ok(None) => {
                debug!(key, "no stored blob, keeping defaults");
                None
            }
            Err(e) => {
                warn!(key, error = %e, "failed to read stored blob");
                None
            }
        }
    }

    /// Persist all four collections
    ///
    /// Write failures are logged and swallowed; the in-memory state remains
    /// authoritative and the caller's flow continues.
    pub fn save(&mut self) {
        let blobs = [
            (KEY_TRANSACTIONS, serialize_blob(&self.ledger.transactions)),
            (KEY_CATEGORIES, serialize_blob(&self.ledger.categories)),
            (KEY_BUDGETS, serialize_blob(&self.ledger.budgets)),
            (KEY_SETTINGS, serialize_blob(&self.ledger.settings)),
        ];

        for (key, raw) in blobs {
            let Some(raw) = raw else { continue };
            if let Err(e) = self.store.set(key, &raw) {
                warn!(key, error = %e, "failed to persist blob");
            }
        }
    }

    /// Install the fixture transactions on a fresh store
    ///
    /// Runs once per fresh store: when the transaction collection is already
    /// non-empty this is a no-op, so existing data is never overwritten.
    pub fn seed_if_empty(&mut self) {
        if !self.ledger.transactions.is_empty() {
            return;
        }

        debug!("seeding fresh store with fixture transactions");
        self.ledger.transactions = seed_transactions();
        self.save();
    }

    /// Validate and record a new transaction
    ///
    /// Validates one field at a time in entry order, assigns a fresh id and
    /// the current timestamp, appends, and persists. Returns the stored
    /// transaction.
    pub fn add_transaction(&mut self, input: TransactionInput) -> LedgerResult<Transaction> {
        input
            .validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        let transaction = Transaction {
            id: generate_id(),
            kind: input.kind,
            amount: input.amount,
            category: input.category.clone(),
            // validate() guarantees the date is present
            date: input.date.ok_or_else(|| {
                LedgerError::Validation("Please select a date".into())
            })?,
            description: input.effective_description(),
            payment_method: input.payment_method.clone(),
            created_at: Utc::now(),
        };

        self.ledger.transactions.push(transaction.clone());
        self.save();

        Ok(transaction)
    }

    /// Remove a transaction by id
    pub fn remove_transaction(&mut self, id: &str) -> LedgerResult<Transaction> {
        let index = self
            .ledger
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| LedgerError::transaction_not_found(id))?;

        let removed = self.ledger.transactions.remove(index);
        self.save();

        Ok(removed)
    }

    /// Remove all stored blobs and restore in-memory defaults
    pub fn reset(&mut self) {
        for key in ALL_KEYS {
            if let Err(e) = self.store.remove(key) {
                warn!(key, error = %e, "failed to remove stored blob");
            }
        }
        self.ledger = Ledger::default();
    }
}

fn serialize_blob<T: Serialize>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(raw) => Some(raw),
        Err(e) => {
            warn!(error = %e, "failed to serialize blob");
            None
        }
    }
}

//! In-memory key-value store
//!
//! Used in tests and anywhere persistence should stay process-local. Also
//! supports simulating storage failures to exercise the diagnostic-only
//! error policy of the ledger store.

use std::collections::HashMap;

use crate::error::{LedgerError, LedgerResult};

use super::KeyValueStore;

/// Key-value store held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail, simulating quota exhaustion
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> LedgerResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> LedgerResult<()> {
        if self.fail_writes {
            return Err(LedgerError::Storage("write quota exceeded".into()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> LedgerResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

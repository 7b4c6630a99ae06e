//! Category service
//!
//! Enforces category uniqueness and referential integrity: names are unique
//! within a type's list, and a category referenced by any transaction cannot
//! be deleted.

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::LedgerStore;
use crate::models::TransactionType;

/// Service for category management
pub struct CategoryService<'a> {
    store: &'a mut LedgerStore,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(store: &'a mut LedgerStore) -> Self {
        Self { store }
    }

    /// List the categories for a transaction type, in display order
    pub fn list(&self, kind: TransactionType) -> Vec<String> {
        self.store.ledger().categories.for_kind(kind).to_vec()
    }

    /// Add a category to a type's list
    ///
    /// The name is trimmed first. Fails with a duplicate error when the exact
    /// name is already present; the list is left unchanged.
    pub fn add_category(&mut self, kind: TransactionType, name: &str) -> LedgerResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        if self.store.ledger().categories.contains(kind, name) {
            return Err(LedgerError::duplicate_category(name));
        }

        self.store
            .ledger_mut()
            .categories
            .for_kind_mut(kind)
            .push(name.to_string());
        self.store.save();

        Ok(name.to_string())
    }

    /// Delete a category from a type's list
    ///
    /// Blocked while any transaction references the name. The check spans
    /// both transaction types, not just `kind`.
    pub fn delete_category(&mut self, kind: TransactionType, name: &str) -> LedgerResult<()> {
        if self.store.ledger().category_in_use(name) {
            return Err(LedgerError::category_in_use(name));
        }

        let list = self.store.ledger_mut().categories.for_kind_mut(kind);
        let before = list.len();
        list.retain(|c| c != name);

        if list.len() == before {
            return Err(LedgerError::NotFound {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        self.store.save();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionInput;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn fresh_store() -> LedgerStore {
        LedgerStore::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_add_category_trims_and_appends() {
        let mut store = fresh_store();
        let mut service = CategoryService::new(&mut store);

        let added = service
            .add_category(TransactionType::Expense, "  Subscriptions  ")
            .unwrap();
        assert_eq!(added, "Subscriptions");

        let list = service.list(TransactionType::Expense);
        assert_eq!(list.last().map(String::as_str), Some("Subscriptions"));
    }

    #[test]
    fn test_add_duplicate_leaves_list_unchanged() {
        let mut store = fresh_store();
        let mut service = CategoryService::new(&mut store);

        let before = service.list(TransactionType::Expense);
        let err = service
            .add_category(TransactionType::Expense, "Food")
            .unwrap_err();
        assert!(matches!(err, LedgerError::Duplicate { .. }));
        assert_eq!(service.list(TransactionType::Expense), before);
    }

    #[test]
    fn test_add_empty_name_rejected() {
        let mut store = fresh_store();
        let mut service = CategoryService::new(&mut store);

        let err = service
            .add_category(TransactionType::Income, "   ")
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_delete_unused_category() {
        let mut store = fresh_store();
        let mut service = CategoryService::new(&mut store);

        service
            .delete_category(TransactionType::Expense, "Healthcare")
            .unwrap();
        assert!(!service
            .list(TransactionType::Expense)
            .contains(&"Healthcare".to_string()));
    }

    #[test]
    fn test_delete_referenced_category_blocked() {
        let mut store = fresh_store();
        store.seed_if_empty();
        let mut service = CategoryService::new(&mut store);

        let err = service
            .delete_category(TransactionType::Expense, "Food")
            .unwrap_err();
        assert!(matches!(err, LedgerError::InUse { .. }));
        assert!(service
            .list(TransactionType::Expense)
            .contains(&"Food".to_string()));
    }

    #[test]
    fn test_delete_succeeds_after_references_removed() {
        let mut store = fresh_store();
        let txn = store
            .add_transaction(TransactionInput {
                kind: TransactionType::Expense,
                amount: 50.0,
                category: "Shopping".into(),
                date: NaiveDate::from_ymd_opt(2025, 9, 1),
                description: String::new(),
                payment_method: "Cash".into(),
            })
            .unwrap();

        {
            let mut service = CategoryService::new(&mut store);
            assert!(service
                .delete_category(TransactionType::Expense, "Shopping")
                .is_err());
        }

        store.remove_transaction(&txn.id).unwrap();

        let mut service = CategoryService::new(&mut store);
        service
            .delete_category(TransactionType::Expense, "Shopping")
            .unwrap();
    }

    #[test]
    fn test_delete_unknown_category() {
        let mut store = fresh_store();
        let mut service = CategoryService::new(&mut store);

        let err = service
            .delete_category(TransactionType::Expense, "Nonexistent")
            .unwrap_err();
        assert!(err.is_not_found());
    }
}

//! Settings service
//!
//! Explicit setters for the persisted display preferences. Every setter
//! persists immediately, matching the write-through policy.

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::LedgerStore;
use crate::models::{Settings, Theme};

/// Service for user settings
pub struct SettingsService<'a> {
    store: &'a mut LedgerStore,
}

impl<'a> SettingsService<'a> {
    /// Create a new settings service
    pub fn new(store: &'a mut LedgerStore) -> Self {
        Self { store }
    }

    /// The current settings
    pub fn settings(&self) -> &Settings {
        &self.store.ledger().settings
    }

    /// Set the currency symbol
    pub fn set_currency(&mut self, symbol: &str) -> LedgerResult<()> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(LedgerError::Validation(
                "Currency symbol cannot be empty".into(),
            ));
        }

        self.store.ledger_mut().settings.currency = symbol.to_string();
        self.store.save();
        Ok(())
    }

    /// Set the date display format
    pub fn set_date_format(&mut self, format: &str) -> LedgerResult<()> {
        let format = format.trim();
        if format.is_empty() {
            return Err(LedgerError::Validation(
                "Date format cannot be empty".into(),
            ));
        }

        self.store.ledger_mut().settings.date_format = format.to_string();
        self.store.save();
        Ok(())
    }

    /// Set the theme
    pub fn set_theme(&mut self, theme: Theme) {
        self.store.ledger_mut().settings.theme = theme;
        self.store.save();
    }

    /// Flip between light and dark
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.store.ledger().settings.theme.toggled();
        self.set_theme(theme);
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn fresh_store() -> LedgerStore {
        LedgerStore::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_set_currency() {
        let mut store = fresh_store();
        let mut service = SettingsService::new(&mut store);

        service.set_currency("$").unwrap();
        assert_eq!(service.settings().currency, "$");

        assert!(service.set_currency("  ").is_err());
    }

    #[test]
    fn test_toggle_theme() {
        let mut store = fresh_store();
        let mut service = SettingsService::new(&mut store);

        assert_eq!(service.settings().theme, Theme::Light);
        assert_eq!(service.toggle_theme(), Theme::Dark);
        assert_eq!(service.toggle_theme(), Theme::Light);
    }
}

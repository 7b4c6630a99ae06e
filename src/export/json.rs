//! JSON export document

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::Ledger;
use crate::models::{Budgets, CategorySet, Settings, Transaction};

/// The complete exported state
///
/// Field names match the persisted wire format so an export reads the same
/// as the stored blobs, with `exportDate` appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub transactions: Vec<Transaction>,
    pub categories: CategorySet,
    pub budgets: Budgets,
    pub settings: Settings,
    #[serde(rename = "exportDate")]
    pub export_date: DateTime<Utc>,
}

impl FullExport {
    /// Snapshot the ledger for export
    pub fn from_ledger(ledger: &Ledger, export_date: DateTime<Utc>) -> Self {
        Self {
            transactions: ledger.transactions.clone(),
            categories: ledger.categories.clone(),
            budgets: ledger.budgets.clone(),
            settings: ledger.settings.clone(),
            export_date,
        }
    }

    /// Render as pretty-printed JSON
    pub fn to_pretty_json(&self) -> LedgerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Export(format!("Failed to serialize export: {}", e)))
    }
}

/// Default artifact name for an export taken on `date`
pub fn export_filename(date: NaiveDate) -> String {
    format!("money-buddy-export-{}.json", date.format("%Y-%m-%d"))
}

/// Write a full export of the ledger to `path`
pub fn write_export(ledger: &Ledger, path: &Path) -> LedgerResult<()> {
    let export = FullExport::from_ledger(ledger, Utc::now());
    let json = export.to_pretty_json()?;

    let mut file = std::fs::File::create(path)
        .map_err(|e| LedgerError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    file.write_all(json.as_bytes())
        .map_err(|e| LedgerError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    Ok(())
}

//! Export and reset CLI commands

use std::path::PathBuf;

use chrono::Local;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_filename, write_export};
use crate::ledger::LedgerStore;

/// Handle `money-buddy export [path]`
pub fn handle_export(store: &LedgerStore, path: Option<PathBuf>) -> LedgerResult<()> {
    let path =
        path.unwrap_or_else(|| PathBuf::from(export_filename(Local::now().date_naive())));

    write_export(store.ledger(), &path)?;
    println!("Exported data to {}", path.display());

    Ok(())
}

/// Handle `money-buddy reset`
///
/// Destructive; requires the --yes flag rather than an interactive prompt.
pub fn handle_reset(store: &mut LedgerStore, yes: bool) -> LedgerResult<()> {
    if !yes {
        return Err(LedgerError::Validation(
            "Refusing to reset without --yes".into(),
        ));
    }

    store.reset();
    println!("All data removed; defaults restored.");

    Ok(())
}

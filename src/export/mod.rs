//! Full-state JSON export
//!
//! A one-way dump of all four collections plus an export timestamp. There is
//! deliberately no import path: loading exported data back in would bypass
//! the validation that `add_transaction`/`add_category` enforce.

pub mod json;

pub use json::{export_filename, write_export, FullExport};

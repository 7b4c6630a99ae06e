//! Business logic layer
//!
//! Services borrow the ledger store, validate input, apply the mutation, and
//! persist. They return plain data for the display layer to render.

pub mod budget;
pub mod category;
pub mod settings;

pub use budget::BudgetService;
pub use category::CategoryService;
pub use settings::SettingsService;

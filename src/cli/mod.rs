//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Handlers print
//! formatted output; all business rules live below in services and reports.

pub mod budget;
pub mod category;
pub mod report;
pub mod settings;
pub mod system;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use report::{handle_dashboard, handle_report_command, ReportCommands};
pub use settings::{handle_settings_command, SettingsCommands};
pub use system::{handle_export, handle_reset};
pub use transaction::{handle_add, handle_history, AddArgs, HistoryArgs};

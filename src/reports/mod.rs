//! Aggregation engine
//!
//! Pure, side-effect-free functions over a ledger snapshot. Nothing here
//! mutates state or touches storage; rounding is left to the display layer.

pub mod categories;
pub mod history;
pub mod totals;
pub mod trends;

pub use categories::{expenses_by_category, CategoryTotal};
pub use history::{filter_transactions, recent_transactions, TransactionFilter};
pub use totals::{balance, total_by_type};
pub use trends::{monthly_trends, MonthlyTrend};

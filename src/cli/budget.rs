//! Budget CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::display::budget::{format_budget_line, format_budget_overview};
use crate::error::LedgerResult;
use crate::ledger::LedgerStore;
use crate::services::BudgetService;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly limit for a category
    Set {
        /// Expense category name
        category: String,
        /// Monthly limit
        amount: f64,
    },

    /// Show budget consumption for the current month
    Status {
        /// Show a single category instead of the full overview
        category: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(store: &mut LedgerStore, cmd: BudgetCommands) -> LedgerResult<()> {
    let today = Local::now().date_naive();

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let mut service = BudgetService::new(store);
            service.set_budget(&category, amount)?;
            println!("Budget for '{}' set to {:.2}", category, amount);
        }

        BudgetCommands::Status { category } => {
            let service = BudgetService::new(store);
            match category {
                Some(category) => {
                    let status = service.budget_status(&category, today);
                    println!(
                        "{}",
                        format_budget_line(&store.ledger().settings, &category, &status)
                    );
                }
                None => {
                    let overview = service.overview(today);
                    print!(
                        "{}",
                        format_budget_overview(&store.ledger().settings, &overview)
                    );
                }
            }
        }
    }

    Ok(())
}

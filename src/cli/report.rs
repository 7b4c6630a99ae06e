//! Dashboard and report CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::display::report::{format_category_breakdown, format_totals, format_trends};
use crate::display::transaction::format_transaction_list;
use crate::error::LedgerResult;
use crate::ledger::LedgerStore;
use crate::models::TransactionType;
use crate::reports::{
    balance, expenses_by_category, monthly_trends, recent_transactions, total_by_type,
    trends::DEFAULT_TREND_MONTHS,
};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Monthly income/expense trends
    Trends {
        /// Window size in months
        #[arg(short, long, default_value_t = DEFAULT_TREND_MONTHS)]
        months: u32,
    },

    /// All-time expense breakdown by category
    Categories,
}

/// Handle `money-buddy dashboard`
pub fn handle_dashboard(store: &LedgerStore) -> LedgerResult<()> {
    let ledger = store.ledger();
    let settings = &ledger.settings;

    print!(
        "{}",
        format_totals(
            settings,
            total_by_type(ledger, TransactionType::Income),
            total_by_type(ledger, TransactionType::Expense),
            balance(ledger),
        )
    );

    println!("\nRecent transactions:");
    print!(
        "{}",
        format_transaction_list(settings, &recent_transactions(ledger, 5))
    );

    println!("\nExpenses by category:");
    print!(
        "{}",
        format_category_breakdown(settings, &expenses_by_category(ledger))
    );

    Ok(())
}

/// Handle a report command
pub fn handle_report_command(store: &LedgerStore, cmd: ReportCommands) -> LedgerResult<()> {
    let ledger = store.ledger();

    match cmd {
        ReportCommands::Trends { months } => {
            let today = Local::now().date_naive();
            let trends = monthly_trends(ledger, today, months);
            print!("{}", format_trends(&ledger.settings, &trends));
        }

        ReportCommands::Categories => {
            print!(
                "{}",
                format_category_breakdown(&ledger.settings, &expenses_by_category(ledger))
            );
        }
    }

    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use money_buddy::cli::{
    handle_add, handle_budget_command, handle_category_command, handle_dashboard, handle_export,
    handle_history, handle_report_command, handle_reset, handle_settings_command, AddArgs,
    BudgetCommands, CategoryCommands, HistoryArgs, ReportCommands, SettingsCommands,
};
use money_buddy::config::DataPaths;
use money_buddy::ledger::LedgerStore;
use money_buddy::storage::FileStore;

#[derive(Parser)]
#[command(
    name = "money-buddy",
    version,
    about = "Local-first daily expense and income tracker",
    long_about = "Money Buddy records income and expense transactions, tracks \
                  per-category monthly budgets, and keeps everything in local \
                  JSON files. Run without a subcommand to see the dashboard."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show totals, recent transactions, and the expense breakdown
    Dashboard,

    /// Record a new transaction
    Add(AddArgs),

    /// Browse and filter the transaction history
    History(HistoryArgs),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Reports over the full history
    #[command(subcommand)]
    Report(ReportCommands),

    /// Settings management commands
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Export all data as a single JSON document
    Export {
        /// Output path (defaults to money-buddy-export-<date>.json)
        path: Option<PathBuf>,
    },

    /// Remove all stored data and restore defaults
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = DataPaths::new()?;
    let file_store = FileStore::new(&paths)?;
    let mut store = LedgerStore::open(Box::new(file_store));

    match cli.command {
        None | Some(Commands::Dashboard) => handle_dashboard(&store)?,
        Some(Commands::Add(args)) => handle_add(&mut store, args)?,
        Some(Commands::History(args)) => handle_history(&store, args)?,
        Some(Commands::Category(cmd)) => handle_category_command(&mut store, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&mut store, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&store, cmd)?,
        Some(Commands::Settings(cmd)) => handle_settings_command(&mut store, cmd)?,
        Some(Commands::Export { path }) => handle_export(&store, path)?,
        Some(Commands::Reset { yes }) => handle_reset(&mut store, yes)?,
    }

    Ok(())
}

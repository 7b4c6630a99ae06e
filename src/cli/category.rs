//! Category CLI commands

use clap::Subcommand;

use crate::error::{LedgerError, LedgerResult};
use crate::ledger::LedgerStore;
use crate::models::TransactionType;
use crate::services::CategoryService;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories for both types
    List,

    /// Add a new category
    Add {
        /// Category name
        name: String,
        /// Transaction type: income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
    },

    /// Delete a category (blocked while transactions reference it)
    Delete {
        /// Category name
        name: String,
        /// Transaction type: income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
    },
}

fn parse_kind(s: &str) -> LedgerResult<TransactionType> {
    TransactionType::parse(s).ok_or_else(|| {
        LedgerError::Validation(format!(
            "Unknown transaction type '{}' (expected income or expense)",
            s
        ))
    })
}

/// Handle a category command
pub fn handle_category_command(store: &mut LedgerStore, cmd: CategoryCommands) -> LedgerResult<()> {
    let mut service = CategoryService::new(store);

    match cmd {
        CategoryCommands::List => {
            for kind in TransactionType::ALL {
                println!("{}:", kind);
                for name in service.list(kind) {
                    println!("  {}", name);
                }
            }
        }

        CategoryCommands::Add { name, kind } => {
            let kind = parse_kind(&kind)?;
            let added = service.add_category(kind, &name)?;
            println!("Added {} category '{}'", kind, added);
        }

        CategoryCommands::Delete { name, kind } => {
            let kind = parse_kind(&kind)?;
            service.delete_category(kind, &name)?;
            println!("Deleted {} category '{}'", kind, name);
        }
    }

    Ok(())
}

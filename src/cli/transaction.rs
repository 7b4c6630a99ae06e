//! Transaction CLI commands

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::display::transaction::format_transaction_list;
use crate::display::{format_amount, format_date};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::LedgerStore;
use crate::models::{TransactionInput, TransactionType};
use crate::reports::{filter_transactions, TransactionFilter};

/// Arguments for `money-buddy add`
#[derive(Args)]
pub struct AddArgs {
    /// Amount in currency units
    pub amount: f64,

    /// Category name (must exist for the transaction type)
    pub category: String,

    /// Transaction type: income or expense
    #[arg(short = 't', long = "type", default_value = "expense")]
    pub kind: String,

    /// Transaction date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Description (defaults to the category name)
    #[arg(long, default_value = "")]
    pub description: String,

    /// Payment method
    #[arg(short, long, default_value = "Cash")]
    pub method: String,
}

/// Arguments for `money-buddy history`
#[derive(Args)]
pub struct HistoryArgs {
    /// Case-insensitive search over description and category
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Filter by type: income or expense
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,

    /// Filter by exact category name
    #[arg(short, long)]
    pub category: Option<String>,
}

fn parse_kind(s: &str) -> LedgerResult<TransactionType> {
    TransactionType::parse(s).ok_or_else(|| {
        LedgerError::Validation(format!(
            "Unknown transaction type '{}' (expected income or expense)",
            s
        ))
    })
}

/// Handle `money-buddy add`
pub fn handle_add(store: &mut LedgerStore, args: AddArgs) -> LedgerResult<()> {
    let kind = parse_kind(&args.kind)?;

    // The UI flow validates category membership before submitting; the CLI
    // does the same check up front.
    if !store.ledger().categories.contains(kind, &args.category) {
        return Err(LedgerError::Validation(format!(
            "Unknown {} category '{}'",
            kind, args.category
        )));
    }

    let input = TransactionInput {
        kind,
        amount: args.amount,
        category: args.category,
        date: Some(args.date.unwrap_or_else(|| Local::now().date_naive())),
        description: args.description,
        payment_method: args.method,
    };

    let txn = store.add_transaction(input)?;
    let settings = &store.ledger().settings;
    println!(
        "Added {} {} ({}) on {}",
        txn.kind,
        format_amount(settings, txn.amount),
        txn.category,
        format_date(settings, txn.date),
    );

    Ok(())
}

/// Handle `money-buddy history`
pub fn handle_history(store: &LedgerStore, args: HistoryArgs) -> LedgerResult<()> {
    let kind = args.kind.as_deref().map(parse_kind).transpose()?;

    let filter = TransactionFilter {
        search: args.search,
        kind,
        category: args.category,
    };

    let transactions = filter_transactions(store.ledger(), &filter);
    print!(
        "{}",
        format_transaction_list(&store.ledger().settings, &transactions)
    );

    Ok(())
}

//! Money Buddy - local-first daily expense and income tracker
//!
//! This library provides the ledger core behind the `money-buddy` CLI:
//! transactions, categories, budgets, and settings, persisted locally as
//! keyed JSON blobs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the local data directory
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, budgets, settings)
//! - `storage`: Key-value string storage (file-backed and in-memory)
//! - `ledger`: The aggregate root and its persistence round-trip
//! - `services`: Business logic layer (categories, budgets, settings)
//! - `reports`: Pure aggregation over a ledger snapshot
//! - `export`: One-way full-state JSON export
//! - `display`: Terminal formatting for the CLI
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust
//! use money_buddy::ledger::LedgerStore;
//! use money_buddy::models::TransactionType;
//! use money_buddy::reports::total_by_type;
//! use money_buddy::storage::MemoryStore;
//!
//! let store = LedgerStore::open(Box::new(MemoryStore::new()));
//! let income = total_by_type(store.ledger(), TransactionType::Income);
//! assert_eq!(income, 5000.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};

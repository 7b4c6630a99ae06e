//! Transaction model
//!
//! Represents a single recorded income or expense event, together with the
//! unvalidated input shape used when recording a new one.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    #[default]
    Expense,
}

impl TransactionType {
    /// All known transaction types
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    /// Parse from the lowercase wire form ("income" / "expense")
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A recorded income or expense event
///
/// Serialized field names follow the persisted wire format
/// (`type`, `paymentMethod`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier (opaque string)
    pub id: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Amount in currency units; always positive
    pub amount: f64,

    /// Category name; a member of the category list for `kind` at creation time
    pub category: String,

    /// User-assigned calendar date, used for period bucketing
    pub date: NaiveDate,

    /// Free-form description; defaults to the category name when left empty
    #[serde(default)]
    pub description: String,

    /// How the transaction was paid
    pub payment_method: String,

    /// System-assigned creation timestamp; immutable, used for recency ordering
    pub created_at: DateTime<Utc>,
}

/// Validation failure while recording a transaction
///
/// Mirrors the single-error-at-a-time entry flow: only the first problem
/// is reported, and the caller retries after fixing it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionInputError {
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Please select a category")]
    MissingCategory,
    #[error("Please select a date")]
    MissingDate,
    #[error("Please select a payment method")]
    MissingPaymentMethod,
}

/// Unvalidated input for a new transaction
///
/// The ledger store assigns the id and creation timestamp when the input
/// passes validation.
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    pub kind: TransactionType,
    pub amount: f64,
    pub category: String,
    pub date: Option<NaiveDate>,
    pub description: String,
    pub payment_method: String,
}

impl TransactionInput {
    /// Validate required fields, one at a time in entry order
    pub fn validate(&self) -> Result<(), TransactionInputError> {
        if !(self.amount > 0.0) {
            return Err(TransactionInputError::InvalidAmount);
        }
        if self.category.is_empty() {
            return Err(TransactionInputError::MissingCategory);
        }
        if self.date.is_none() {
            return Err(TransactionInputError::MissingDate);
        }
        if self.payment_method.is_empty() {
            return Err(TransactionInputError::MissingPaymentMethod);
        }
        Ok(())
    }

    /// The description to store: falls back to the category name when empty
    pub fn effective_description(&self) -> String {
        if self.description.is_empty() {
            self.category.clone()
        } else {
            self.description.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> TransactionInput {
        TransactionInput {
            kind: TransactionType::Expense,
            amount: 120.0,
            category: "Food".into(),
            date: NaiveDate::from_ymd_opt(2025, 8, 20),
            description: "Lunch".into(),
            payment_method: "Cash".into(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert_eq!(valid_input().validate(), Ok(()));
    }

    #[test]
    fn test_zero_amount_rejected_first() {
        let mut input = valid_input();
        input.amount = 0.0;
        input.category = String::new();
        // Only the first failing field is reported
        assert_eq!(input.validate(), Err(TransactionInputError::InvalidAmount));
    }

    #[test]
    fn test_negative_and_nan_amounts_rejected() {
        let mut input = valid_input();
        input.amount = -5.0;
        assert_eq!(input.validate(), Err(TransactionInputError::InvalidAmount));
        input.amount = f64::NAN;
        assert_eq!(input.validate(), Err(TransactionInputError::InvalidAmount));
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let mut input = valid_input();
        input.category = String::new();
        assert_eq!(input.validate(), Err(TransactionInputError::MissingCategory));

        let mut input = valid_input();
        input.date = None;
        assert_eq!(input.validate(), Err(TransactionInputError::MissingDate));

        let mut input = valid_input();
        input.payment_method = String::new();
        assert_eq!(
            input.validate(),
            Err(TransactionInputError::MissingPaymentMethod)
        );
    }

    #[test]
    fn test_description_defaults_to_category() {
        let mut input = valid_input();
        input.description = String::new();
        assert_eq!(input.effective_description(), "Food");
    }

    #[test]
    fn test_wire_format_field_names() {
        let txn = Transaction {
            id: "abc123".into(),
            kind: TransactionType::Expense,
            amount: 450.0,
            category: "Food".into(),
            date: NaiveDate::from_ymd_opt(2025, 8, 30).unwrap(),
            description: "Grocery shopping".into(),
            payment_method: "Credit Card".into(),
            created_at: "2025-08-30T10:30:00Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["paymentMethod"], "Credit Card");
        assert_eq!(json["createdAt"], "2025-08-30T10:30:00Z");
        assert_eq!(json["date"], "2025-08-30");

        let back: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(back, txn);
    }
}

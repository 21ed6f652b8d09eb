//! Ledger transaction model.
//!
//! # Responsibility
//! - Define income/expense records and their sign convention.
//! - Parse user-entered amount text into exact decimals.
//!
//! # Invariants
//! - Stored `amount` is strictly positive; the sign is carried by `kind`.
//! - A transaction is never mutated after creation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Row id assigned by storage on insert.
pub type TransactionId = i64;

/// Direction of a cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Applies this kind's sign to a positive stored amount.
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = TransactionValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(TransactionValidationError::UnknownKind(value.to_string())),
        }
    }
}

/// Persisted ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    /// Contribution of this entry to the running balance.
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }
}

/// Insert payload; storage assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Decimal,
    pub description: String,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount <= Decimal::ZERO {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

/// Totals over a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub income_total: Decimal,
    pub expense_total: Decimal,
    pub net: Decimal,
    pub count: usize,
}

impl PeriodSummary {
    /// Totals `transactions`; `None` when a total overflows `Decimal`.
    pub fn from_transactions<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
    ) -> Option<Self> {
        let mut summary = Self::default();
        for transaction in transactions {
            let total = match transaction.kind {
                TransactionKind::Income => &mut summary.income_total,
                TransactionKind::Expense => &mut summary.expense_total,
            };
            *total = total.checked_add(transaction.amount)?;
            summary.count += 1;
        }
        summary.net = summary.income_total.checked_sub(summary.expense_total)?;
        Some(summary)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    /// Amount text is empty or not a number.
    NotNumeric(String),
    /// Amount is zero or negative.
    NonPositiveAmount(Decimal),
    /// Kind text is neither `income` nor `expense`.
    UnknownKind(String),
}

impl Display for TransactionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotNumeric(value) => write!(f, "amount `{value}` is not a number"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "amount must be greater than zero, got {amount}")
            }
            Self::UnknownKind(value) => {
                write!(f, "unknown transaction kind `{value}`; expected income|expense")
            }
        }
    }
}

impl Error for TransactionValidationError {}

/// Parses a user-entered amount.
///
/// Accepts surrounding whitespace and a comma as decimal separator
/// (`"12,50"`). Rejects zero and negative values.
pub fn parse_amount(text: &str) -> Result<Decimal, TransactionValidationError> {
    let normalized = text.trim().replace(',', ".");
    let amount = Decimal::from_str(&normalized)
        .map_err(|_| TransactionValidationError::NotNumeric(text.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(TransactionValidationError::NonPositiveAmount(amount));
    }
    Ok(amount.normalize())
}

//! Transaction repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Append ledger entries and read them back in display order.
//!
//! # Invariants
//! - There is no update or delete path; the ledger is append-only.
//! - Amounts are stored as canonical decimal text and dates as `YYYY-MM-DD`.
//! - List order is `tx_date DESC, id DESC`, stable for a given database.

use crate::model::transaction::{NewTransaction, Transaction, TransactionId, TransactionKind};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use rust_decimal::Decimal;
use std::str::FromStr;

const TRANSACTION_SELECT_SQL: &str = "SELECT
    id,
    kind,
    category,
    amount,
    description,
    tx_date
FROM transactions";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Repository interface for the append-only ledger.
pub trait TransactionRepository {
    fn create_transaction(&self, transaction: &NewTransaction) -> RepoResult<TransactionId>;
    fn get_transaction(&self, id: TransactionId) -> RepoResult<Option<Transaction>>;
    /// Lists entries dated on or after `since` (all entries when `None`).
    fn list_transactions(&self, since: Option<NaiveDate>) -> RepoResult<Vec<Transaction>>;
}

/// SQLite-backed transaction repository.
pub struct SqliteTransactionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTransactionRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "transactions")?;
        Ok(Self { conn })
    }
}

impl TransactionRepository for SqliteTransactionRepository<'_> {
    fn create_transaction(&self, transaction: &NewTransaction) -> RepoResult<TransactionId> {
        transaction.validate()?;

        self.conn.execute(
            "INSERT INTO transactions (
                kind,
                category,
                amount,
                description,
                tx_date
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                transaction.kind.as_str(),
                transaction.category.as_str(),
                transaction.amount.to_string(),
                transaction.description.as_str(),
                transaction.date.format(DATE_FORMAT).to_string(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get_transaction(&self, id: TransactionId) -> RepoResult<Option<Transaction>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TRANSACTION_SELECT_SQL} WHERE id = ?1;"))?;
        match stmt.query_row([id], read_raw_row).optional()? {
            Some(raw) => Ok(Some(raw.into_transaction()?)),
            None => Ok(None),
        }
    }

    fn list_transactions(&self, since: Option<NaiveDate>) -> RepoResult<Vec<Transaction>> {
        let since_text = since.map(|date| date.format(DATE_FORMAT).to_string());
        let mut stmt = self.conn.prepare(&format!(
            "{TRANSACTION_SELECT_SQL}
             WHERE (?1 IS NULL OR tx_date >= ?1)
             ORDER BY tx_date DESC, id DESC;"
        ))?;

        let mut rows = stmt.query(params![since_text])?;
        let mut transactions = Vec::new();
        while let Some(row) = rows.next()? {
            transactions.push(read_raw_row(row)?.into_transaction()?);
        }

        Ok(transactions)
    }
}

struct RawTransactionRow {
    id: TransactionId,
    kind: String,
    category: String,
    amount: String,
    description: String,
    date: String,
}

fn read_raw_row(row: &Row<'_>) -> rusqlite::Result<RawTransactionRow> {
    Ok(RawTransactionRow {
        id: row.get("id")?,
        kind: row.get("kind")?,
        category: row.get("category")?,
        amount: row.get("amount")?,
        description: row.get("description")?,
        date: row.get("tx_date")?,
    })
}

impl RawTransactionRow {
    fn into_transaction(self) -> RepoResult<Transaction> {
        let kind = parse_kind(&self.kind).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid kind `{}` in transactions.kind",
                self.kind
            ))
        })?;

        let amount = Decimal::from_str(&self.amount).map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid amount `{}` in transactions.amount",
                self.amount
            ))
        })?;
        if amount <= Decimal::ZERO {
            return Err(RepoError::InvalidData(format!(
                "non-positive amount `{amount}` in transactions.amount"
            )));
        }

        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|_| {
            RepoError::InvalidData(format!(
                "invalid date `{}` in transactions.tx_date",
                self.date
            ))
        })?;

        Ok(Transaction {
            id: self.id,
            kind,
            category: self.category,
            amount,
            description: self.description,
            date,
        })
    }
}

fn parse_kind(value: &str) -> Option<TransactionKind> {
    match value {
        "income" => Some(TransactionKind::Income),
        "expense" => Some(TransactionKind::Expense),
        _ => None,
    }
}

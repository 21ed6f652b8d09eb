//! Ledger use-case service.
//!
//! # Responsibility
//! - Record income/expense entries stamped with today's date.
//! - Derive the running balance and the current-month view.
//!
//! # Invariants
//! - `balance()` always equals the signed sum of every stored entry.
//! - An empty ledger has balance zero.
//! - The current period starts on the first day of the clock's month.

use crate::clock::{first_day_of_month, Clock};
use crate::model::transaction::{
    NewTransaction, PeriodSummary, Transaction, TransactionId, TransactionKind,
};
use crate::repo::transaction_repo::TransactionRepository;
use crate::repo::{RepoError, RepoResult};
use chrono::NaiveDate;
use log::{info, warn};
use rust_decimal::Decimal;

pub struct LedgerService<R: TransactionRepository, C: Clock> {
    repo: R,
    clock: C,
}

impl<R: TransactionRepository, C: Clock> LedgerService<R, C> {
    pub fn new(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Appends a new entry dated today.
    ///
    /// # Errors
    /// - `RepoError::Validation` when `amount <= 0`.
    pub fn record_transaction(
        &self,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Decimal,
        description: impl Into<String>,
    ) -> RepoResult<TransactionId> {
        let transaction = NewTransaction {
            kind,
            category: category.into(),
            amount,
            description: description.into(),
            date: self.clock.today(),
        };

        match self.repo.create_transaction(&transaction) {
            Ok(id) => {
                info!(
                    "event=transaction_recorded module=ledger status=ok id={id} kind={kind} date={}",
                    transaction.date
                );
                Ok(id)
            }
            Err(err) => {
                warn!("event=transaction_recorded module=ledger status=error kind={kind} error={err}");
                Err(err)
            }
        }
    }

    /// Income minus expenses over the whole ledger.
    ///
    /// # Errors
    /// - `RepoError::AmountOverflow` when the running sum leaves `Decimal` range.
    pub fn balance(&self) -> RepoResult<Decimal> {
        let transactions = self.repo.list_transactions(None)?;
        transactions
            .iter()
            .map(Transaction::signed_amount)
            .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
            .ok_or(RepoError::AmountOverflow)
    }

    /// First day of the month the clock is in.
    pub fn current_period_start(&self) -> NaiveDate {
        first_day_of_month(self.clock.today())
    }

    /// Entries dated in the current calendar month, most recent first.
    pub fn transactions_in_current_period(&self) -> RepoResult<Vec<Transaction>> {
        self.repo
            .list_transactions(Some(self.current_period_start()))
    }

    pub fn period_summary(&self) -> RepoResult<PeriodSummary> {
        let transactions = self.transactions_in_current_period()?;
        PeriodSummary::from_transactions(&transactions).ok_or(RepoError::AmountOverflow)
    }
}

//! Application façade for the presentation layer.
//!
//! # Responsibility
//! - Own the process-wide connection and the wizard session.
//! - Parse raw text input and map failures to `CoreError`.
//! - Compose ledger, progress, projector and wizard behind one API.
//!
//! # Invariants
//! - Lessons are seeded before the façade is handed out.
//! - Every call runs to completion synchronously; nothing is cached between
//!   calls except the wizard session.
//! - The connection is released when the façade is dropped or closed.

use crate::clock::{Clock, SystemClock};
use crate::config::CoreConfig;
use crate::db::{open_db, open_db_in_memory};
use crate::error::{CoreError, CoreResult};
use crate::logging::init_logging;
use crate::model::lesson::{Lesson, LessonId, LessonProgress};
use crate::model::transaction::{
    parse_amount, PeriodSummary, Transaction, TransactionId, TransactionKind,
};
use crate::projector::{self, Projection};
use crate::repo::lesson_repo::SqliteLessonRepository;
use crate::repo::transaction_repo::SqliteTransactionRepository;
use crate::repo::RepoError;
use crate::service::ledger_service::LedgerService;
use crate::service::progress_service::ProgressService;
use crate::wizard::{PlanSummary, PlanWizard, WizardState};
use log::info;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub struct BabylonApp {
    conn: Connection,
    clock: Box<dyn Clock>,
    wizard: PlanWizard,
}

impl BabylonApp {
    /// Starts logging when configured, opens the database file and seeds lessons.
    pub fn open(config: &CoreConfig) -> CoreResult<Self> {
        if let Some(log_dir) = &config.log_dir {
            let log_dir = log_dir.to_str().ok_or_else(|| {
                CoreError::Config(format!("log_dir `{}` is not UTF-8", log_dir.display()))
            })?;
            init_logging(&config.log_level, log_dir).map_err(CoreError::Config)?;
        }

        let conn = open_db(&config.db_path)?;
        Self::from_connection(conn, Box::new(SystemClock))
    }

    /// Same as [`Self::open`] on a throwaway in-memory database.
    pub fn open_in_memory() -> CoreResult<Self> {
        Self::from_connection(open_db_in_memory()?, Box::new(SystemClock))
    }

    /// Wraps an already migrated connection.
    pub fn from_connection(conn: Connection, clock: Box<dyn Clock>) -> CoreResult<Self> {
        let app = Self {
            conn,
            clock,
            wizard: PlanWizard::new(),
        };
        app.progress()?.seed_lessons_if_absent()?;
        Ok(app)
    }

    /// Replaces the date source used for new transactions and the current period.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Closes the connection, reporting errors that `Drop` would swallow.
    pub fn close(self) -> CoreResult<()> {
        self.conn
            .close()
            .map_err(|(_, err)| CoreError::from(RepoError::from(err)))?;
        info!("event=db_close module=app status=ok");
        Ok(())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn ledger(&self) -> CoreResult<LedgerService<SqliteTransactionRepository<'_>, &dyn Clock>> {
        let repo = SqliteTransactionRepository::try_new(&self.conn)?;
        Ok(LedgerService::new(repo, self.clock.as_ref()))
    }

    fn progress(&self) -> CoreResult<ProgressService<SqliteLessonRepository<'_>>> {
        let repo = SqliteLessonRepository::try_new(&self.conn)?;
        Ok(ProgressService::new(repo))
    }

    // Ledger

    /// Records a transaction dated today from form text.
    ///
    /// # Errors
    /// - `InvalidInput` when `kind` is neither `income` nor `expense`.
    /// - `InvalidAmount` when `amount` is not a number or is `<= 0`.
    pub fn record_transaction(
        &self,
        kind: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> CoreResult<TransactionId> {
        let kind = kind.parse::<TransactionKind>()?;
        let amount = parse_amount(amount)?;
        Ok(self
            .ledger()?
            .record_transaction(kind, category, amount, description)?)
    }

    pub fn balance(&self) -> CoreResult<Decimal> {
        Ok(self.ledger()?.balance()?)
    }

    pub fn transactions_in_current_period(&self) -> CoreResult<Vec<Transaction>> {
        Ok(self.ledger()?.transactions_in_current_period()?)
    }

    pub fn period_summary(&self) -> CoreResult<PeriodSummary> {
        Ok(self.ledger()?.period_summary()?)
    }

    // Lessons

    pub fn list_lessons(&self) -> CoreResult<Vec<Lesson>> {
        Ok(self.progress()?.list_lessons()?)
    }

    /// Marks a lesson completed; unknown ids are ignored.
    pub fn complete_lesson(&self, id: LessonId) -> CoreResult<()> {
        Ok(self.progress()?.complete_lesson(id)?)
    }

    /// Marks a lesson completed; unknown ids fail with `LessonNotFound`.
    pub fn try_complete_lesson(&self, id: LessonId) -> CoreResult<()> {
        Ok(self.progress()?.try_complete_lesson(id)?)
    }

    pub fn lesson_progress(&self) -> CoreResult<LessonProgress> {
        Ok(self.progress()?.progress()?)
    }

    // Investment projection

    /// Projects growth with `annual_rate` given as a fraction (`"0.125"`).
    pub fn project(
        &self,
        principal: &str,
        annual_rate: &str,
        term_label: Option<&str>,
    ) -> CoreResult<Projection> {
        Ok(projector::project_text(principal, annual_rate, term_label)?)
    }

    /// Projects growth with `annual_rate_percent` given in percent (`"12,5"`).
    pub fn project_with_percent_rate(
        &self,
        principal: &str,
        annual_rate_percent: &str,
        term_label: Option<&str>,
    ) -> CoreResult<Projection> {
        let principal = projector::parse_number(principal, "principal")?;
        let annual_rate = projector::parse_percent_rate(annual_rate_percent)?;
        let term = projector::parse_term(term_label)?;
        Ok(projector::project(principal, annual_rate, term)?)
    }

    // Business plan wizard

    pub fn wizard(&self) -> &PlanWizard {
        &self.wizard
    }

    pub fn advance(&mut self, text: &str) -> WizardState {
        self.wizard.advance(text)
    }

    pub fn back(&mut self) -> WizardState {
        self.wizard.back()
    }

    pub fn reset(&mut self) {
        self.wizard.reset();
    }

    pub fn summary(&self) -> Option<PlanSummary> {
        self.wizard.summary()
    }
}

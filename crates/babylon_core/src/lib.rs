//! Core domain logic for Babylon Wealth.
//!
//! Ledger, lesson progress, investment projection and the business plan
//! wizard live here; the UI is an external caller of [`BabylonApp`].

pub mod app;
pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod projector;
pub mod repo;
pub mod service;
pub mod wizard;

pub use app::BabylonApp;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::lesson::{Lesson, LessonId, LessonProgress, SEED_LESSONS};
pub use model::transaction::{
    parse_amount, NewTransaction, PeriodSummary, Transaction, TransactionId, TransactionKind,
    TransactionValidationError,
};
pub use projector::{project, project_text, Projection, ProjectionError, TermBucket};
pub use repo::lesson_repo::{LessonRepository, SqliteLessonRepository};
pub use repo::transaction_repo::{SqliteTransactionRepository, TransactionRepository};
pub use repo::{RepoError, RepoResult};
pub use service::ledger_service::LedgerService;
pub use service::progress_service::ProgressService;
pub use wizard::{PlanSummary, PlanWizard, SummaryEntry, WizardProgress, WizardState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

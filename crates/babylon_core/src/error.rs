//! Error surfaced by the application façade.

use crate::model::lesson::LessonId;
use crate::model::transaction::TransactionValidationError;
use crate::projector::ProjectionError;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug)]
pub enum CoreError {
    /// Transaction amount is not a number or is not greater than zero.
    InvalidAmount(String),
    /// Text input other than an amount could not be parsed.
    InvalidInput(String),
    LessonNotFound(LessonId),
    Storage(RepoError),
    Config(String),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAmount(reason) => write!(f, "invalid amount: {reason}"),
            Self::InvalidInput(reason) => write!(f, "invalid input: {reason}"),
            Self::LessonNotFound(id) => write!(f, "lesson not found: {id}"),
            Self::Storage(err) => write!(f, "storage error: {err}"),
            Self::Config(reason) => write!(f, "configuration error: {reason}"),
        }
    }
}

impl Error for CoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::InvalidAmount(_)
            | Self::InvalidInput(_)
            | Self::LessonNotFound(_)
            | Self::Config(_) => None,
        }
    }
}

impl From<TransactionValidationError> for CoreError {
    fn from(value: TransactionValidationError) -> Self {
        match value {
            TransactionValidationError::UnknownKind(_) => Self::InvalidInput(value.to_string()),
            TransactionValidationError::NotNumeric(_)
            | TransactionValidationError::NonPositiveAmount(_) => {
                Self::InvalidAmount(value.to_string())
            }
        }
    }
}

impl From<ProjectionError> for CoreError {
    fn from(value: ProjectionError) -> Self {
        match value {
            ProjectionError::InvalidInput(reason) => Self::InvalidInput(reason),
        }
    }
}

impl From<RepoError> for CoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => err.into(),
            RepoError::LessonNotFound(id) => Self::LessonNotFound(id),
            RepoError::AmountOverflow => {
                Self::InvalidAmount(RepoError::AmountOverflow.to_string())
            }
            other => Self::Storage(other),
        }
    }
}

impl From<crate::db::DbError> for CoreError {
    fn from(value: crate::db::DbError) -> Self {
        Self::Storage(RepoError::Db(value))
    }
}

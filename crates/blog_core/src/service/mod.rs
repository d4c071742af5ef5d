//! Per-entity managers.
//!
//! # Responsibility
//! - Validate DTO input, map it onto entities and persist through [`UnitOfWork`].
//! - Wrap every outcome in [`OpResult`] / [`DataResult`] with Turkish messages.
//!
//! # Invariants
//! - "Not found" and validation failures are `Error` results, never `Err`.
//! - Infrastructure failures propagate as `Err(ServiceError)`.
//! - Each write operation commits exactly one transaction.
//!
//! [`UnitOfWork`]: crate::repo::UnitOfWork

pub mod article_service;
pub mod category_service;
pub mod password;
pub mod result;
pub mod role_service;
pub mod user_service;

use crate::model::EntityValidationError;
use crate::repo::{RepoError, RepoResult};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use result::{DataResult, OpResult, ResultStatus};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Infrastructure failure raised by a manager.
#[derive(Debug)]
pub enum ServiceError {
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Password hashing backend failure.
    PasswordHash(String),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::PasswordHash(message) => write!(f, "password hashing failed: {message}"),
            Self::InconsistentState(details) => write!(f, "inconsistent blog state: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<rusqlite::Error> for ServiceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Repo(value.into())
    }
}

/// Splits a repository write outcome into the stored value or, for entity
/// constraint rejections, a user-facing message.
pub(crate) fn reject_invalid<T>(result: RepoResult<T>) -> ServiceResult<Result<T, String>> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(RepoError::Validation(err)) => {
            warn!("event=entity_rejected module=service status=rejected reason={err}");
            Ok(Err(entity_validation_message(&err)))
        }
        Err(err) => Err(err.into()),
    }
}

fn entity_validation_message(err: &EntityValidationError) -> String {
    match err {
        EntityValidationError::Required { field } => {
            format!("{field} alanı boş geçilmemelidir.")
        }
        EntityValidationError::TooLong { field, max } => {
            format!("{field} alanı {max} karakterden büyük olmamalıdır.")
        }
        EntityValidationError::Negative { field } => format!("{field} alanı negatif olamaz."),
    }
}

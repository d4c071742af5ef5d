//! Blog domain model.
//!
//! # Responsibility
//! - Define the canonical records persisted by the blog core.
//! - Own column-level constraints shared by schema and repository writes.
//!
//! # Invariants
//! - Every entity carries an integer `id` and one shared [`Audit`] record.
//! - `id == 0` marks an entity that has not been persisted yet.
//! - Deletion defaults to soft-delete via `Audit::is_deleted`.

pub mod article;
pub mod audit;
pub mod category;
pub mod role;
pub mod user;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub use audit::{now_epoch_ms, Audit, DEFAULT_ACTOR};

/// Primary key type shared by every table.
pub type EntityId = i64;

/// Common contract for persisted blog entities.
///
/// Repository implementations are generic over this trait; storage mapping
/// lives in `repo::mapping`.
pub trait Entity: Clone {
    /// Backing table name.
    const TABLE: &'static str;

    fn id(&self) -> EntityId;
    fn set_id(&mut self, id: EntityId);
    fn audit(&self) -> &Audit;
    fn audit_mut(&mut self) -> &mut Audit;

    /// Checks column constraints before persistence.
    fn validate(&self) -> Result<(), EntityValidationError>;
}

/// Column constraint violation detected before any SQL mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityValidationError {
    /// Field is required and must not be blank.
    Required { field: &'static str },
    /// Field exceeds its column length (counted in chars).
    TooLong { field: &'static str, max: usize },
    /// Counter field must not be negative.
    Negative { field: &'static str },
}

impl Display for EntityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required { field } => write!(f, "field `{field}` is required"),
            Self::TooLong { field, max } => {
                write!(f, "field `{field}` must be at most {max} characters")
            }
            Self::Negative { field } => write!(f, "field `{field}` must not be negative"),
        }
    }
}

impl Error for EntityValidationError {}

pub(crate) fn check_required(field: &'static str, value: &str) -> Result<(), EntityValidationError> {
    if value.trim().is_empty() {
        return Err(EntityValidationError::Required { field });
    }
    Ok(())
}

pub(crate) fn check_max_len(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), EntityValidationError> {
    if value.chars().count() > max {
        return Err(EntityValidationError::TooLong { field, max });
    }
    Ok(())
}

pub(crate) fn check_optional_max_len(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), EntityValidationError> {
    match value {
        Some(value) => check_max_len(field, value, max),
        None => Ok(()),
    }
}

pub(crate) fn check_non_negative(field: &'static str, value: i64) -> Result<(), EntityValidationError> {
    if value < 0 {
        return Err(EntityValidationError::Negative { field });
    }
    Ok(())
}

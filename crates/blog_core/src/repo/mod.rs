//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define one generic CRUD contract ([`Repository`]) usable for every entity.
//! - Isolate SQLite query details from manager orchestration.
//! - Group writes into explicit transactions through [`UnitOfWork`].
//!
//! # Invariants
//! - Repository writes call `Entity::validate()` before SQL mutations.
//! - Missing rows on update/delete surface as `RepoError::NotFound`.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod filter;
pub mod mapping;
pub mod sqlite_repo;
pub mod unit_of_work;

use crate::db::DbError;
use crate::model::{Entity, EntityId, EntityValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use filter::{Condition, Filter};
pub use mapping::SqlEntity;
pub use sqlite_repo::SqliteRepository;
pub use unit_of_work::{UnitOfWork, Work};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entity persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Entity violates a column constraint.
    Validation(EntityValidationError),
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// No row with `id` exists in `table`.
    NotFound { table: &'static str, id: EntityId },
    /// Unique, foreign key or check constraint rejected the write.
    Conflict { table: &'static str, message: String },
    /// Filter referenced a column outside the entity mapping.
    UnknownColumn {
        table: &'static str,
        column: &'static str,
    },
    /// Persisted data cannot be converted into a valid entity.
    InvalidData(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { table, id } => write!(f, "{table} row not found: {id}"),
            Self::Conflict { table, message } => {
                write!(f, "{table} constraint violation: {message}")
            }
            Self::UnknownColumn { table, column } => {
                write!(f, "unknown filter column `{column}` for table `{table}`")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EntityValidationError> for RepoError {
    fn from(value: EntityValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Generic CRUD contract shared by all entity repositories.
pub trait Repository<E: Entity> {
    /// Returns the first row (lowest id) matching `filter`.
    fn get(&self, filter: &Filter) -> RepoResult<Option<E>>;
    /// Returns all rows matching `filter`, ordered by id.
    fn get_all(&self, filter: &Filter) -> RepoResult<Vec<E>>;
    fn any(&self, filter: &Filter) -> RepoResult<bool>;
    fn count(&self, filter: &Filter) -> RepoResult<u64>;
    /// Inserts `entity` and returns it with the generated id.
    ///
    /// The incoming `id` is ignored.
    fn add(&self, entity: &E) -> RepoResult<E>;
    /// Replaces all columns of the row identified by `entity.id()`.
    fn update(&self, entity: &E) -> RepoResult<E>;
    /// Physically removes the row.
    fn delete(&self, id: EntityId) -> RepoResult<()>;
}

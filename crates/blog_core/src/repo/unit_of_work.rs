//! Unit of work over one SQLite connection.
//!
//! # Responsibility
//! - Own the connection and hand out per-entity repositories.
//! - Group writes into one transaction committed by [`Work::save`].
//!
//! # Invariants
//! - The connection is migrated to `latest_version()` before use.
//! - A [`Work`] dropped without `save()` rolls back every write it made.
//! - At most one [`Work`] is open at a time per unit of work.

use super::mapping::{write_columns, SqlEntity};
use super::{RepoError, RepoResult, SqliteRepository};
use crate::db::migrations::{current_user_version, latest_version};
use crate::db::open_db_in_memory;
use crate::model::article::Article;
use crate::model::category::Category;
use crate::model::role::Role;
use crate::model::user::User;
use rusqlite::{Connection, Transaction};

/// Connection owner and repository factory.
pub struct UnitOfWork {
    conn: Connection,
}

impl UnitOfWork {
    /// Wraps a migrated/ready connection.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        ensure_connection_ready(&conn)?;
        Ok(Self { conn })
    }

    /// Opens a fresh seeded in-memory database.
    pub fn open_in_memory() -> RepoResult<Self> {
        Self::try_new(open_db_in_memory()?)
    }

    pub fn articles(&self) -> SqliteRepository<'_, Article> {
        SqliteRepository::new(&self.conn)
    }

    pub fn categories(&self) -> SqliteRepository<'_, Category> {
        SqliteRepository::new(&self.conn)
    }

    pub fn users(&self) -> SqliteRepository<'_, User> {
        SqliteRepository::new(&self.conn)
    }

    pub fn roles(&self) -> SqliteRepository<'_, Role> {
        SqliteRepository::new(&self.conn)
    }

    /// Starts a transactional unit of work.
    pub fn begin(&self) -> RepoResult<Work<'_>> {
        Ok(Work {
            tx: self.conn.unchecked_transaction()?,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// Open transaction exposing the same repositories as [`UnitOfWork`].
pub struct Work<'conn> {
    tx: Transaction<'conn>,
}

impl Work<'_> {
    pub fn articles(&self) -> SqliteRepository<'_, Article> {
        SqliteRepository::new(&self.tx)
    }

    pub fn categories(&self) -> SqliteRepository<'_, Category> {
        SqliteRepository::new(&self.tx)
    }

    pub fn users(&self) -> SqliteRepository<'_, User> {
        SqliteRepository::new(&self.tx)
    }

    pub fn roles(&self) -> SqliteRepository<'_, Role> {
        SqliteRepository::new(&self.tx)
    }

    /// Commits every write made through this work.
    pub fn save(self) -> RepoResult<()> {
        self.tx.commit()?;
        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_user_version(conn)?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    ensure_table::<Role>(conn)?;
    ensure_table::<User>(conn)?;
    ensure_table::<Category>(conn)?;
    ensure_table::<Article>(conn)?;
    Ok(())
}

fn ensure_table<E: SqlEntity>(conn: &Connection) -> RepoResult<()> {
    let columns = table_columns(conn, E::TABLE)?;
    if columns.is_empty() {
        return Err(RepoError::MissingRequiredTable(E::TABLE));
    }

    for column in std::iter::once("id").chain(write_columns::<E>()) {
        if !columns.iter().any(|current| current == column) {
            return Err(RepoError::MissingRequiredColumn {
                table: E::TABLE,
                column,
            });
        }
    }
    Ok(())
}

fn table_columns(conn: &Connection, table: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    let mut columns = Vec::new();
    while let Some(row) = rows.next()? {
        columns.push(row.get::<_, String>(1)?);
    }
    Ok(columns)
}

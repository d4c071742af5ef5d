//! Generic SQLite repository.
//!
//! # Responsibility
//! - Implement [`Repository`] once for every [`SqlEntity`].
//! - Translate SQLite constraint failures into `RepoError::Conflict`.
//!
//! # Invariants
//! - Writes validate the entity before any SQL mutation.
//! - List results are ordered by `id ASC`.

use super::filter::Filter;
use super::mapping::{decode_row, select_list, write_columns, write_values, SqlEntity};
use super::{RepoError, RepoResult, Repository};
use crate::model::EntityId;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, ErrorCode};
use std::marker::PhantomData;

/// SQLite-backed repository for entity `E`.
///
/// Borrows either a plain connection or an open transaction (through deref).
pub struct SqliteRepository<'conn, E> {
    conn: &'conn Connection,
    _entity: PhantomData<E>,
}

impl<'conn, E: SqlEntity> SqliteRepository<'conn, E> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }

    fn query(&self, filter: &Filter, limit_one: bool) -> RepoResult<Vec<E>> {
        let (where_sql, values) = filter.to_sql::<E>()?;
        let mut sql = format!(
            "SELECT {} FROM {}{where_sql} ORDER BY id ASC",
            select_list::<E>(),
            E::TABLE
        );
        if limit_one {
            sql.push_str(" LIMIT 1");
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(values))?;
        let mut entities = Vec::new();
        while let Some(row) = rows.next()? {
            entities.push(decode_row::<E>(row)?);
        }
        Ok(entities)
    }
}

impl<E: SqlEntity> Repository<E> for SqliteRepository<'_, E> {
    fn get(&self, filter: &Filter) -> RepoResult<Option<E>> {
        Ok(self.query(filter, true)?.into_iter().next())
    }

    fn get_all(&self, filter: &Filter) -> RepoResult<Vec<E>> {
        self.query(filter, false)
    }

    fn any(&self, filter: &Filter) -> RepoResult<bool> {
        let (where_sql, values) = filter.to_sql::<E>()?;
        let exists: i64 = self.conn.query_row(
            &format!("SELECT EXISTS(SELECT 1 FROM {}{where_sql});", E::TABLE),
            params_from_iter(values),
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn count(&self, filter: &Filter) -> RepoResult<u64> {
        let (where_sql, values) = filter.to_sql::<E>()?;
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}{where_sql};", E::TABLE),
            params_from_iter(values),
            |row| row.get(0),
        )?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative row count {count}")))
    }

    fn add(&self, entity: &E) -> RepoResult<E> {
        entity.validate()?;

        let columns = write_columns::<E>();
        let placeholders = (1..=columns.len())
            .map(|index| format!("?{index}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders});",
            E::TABLE,
            columns.join(", ")
        );

        self.conn
            .execute(&sql, params_from_iter(write_values(entity)))
            .map_err(|err| map_write_error(E::TABLE, err))?;

        let mut added = entity.clone();
        added.set_id(self.conn.last_insert_rowid());
        Ok(added)
    }

    fn update(&self, entity: &E) -> RepoResult<E> {
        entity.validate()?;

        let columns = write_columns::<E>();
        let assignments = columns
            .iter()
            .enumerate()
            .map(|(index, column)| format!("{column} = ?{}", index + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {assignments} WHERE id = ?{};",
            E::TABLE,
            columns.len() + 1
        );

        let mut values = write_values(entity);
        values.push(Value::Integer(entity.id()));
        let changed = self
            .conn
            .execute(&sql, params_from_iter(values))
            .map_err(|err| map_write_error(E::TABLE, err))?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: E::TABLE,
                id: entity.id(),
            });
        }

        Ok(entity.clone())
    }

    fn delete(&self, id: EntityId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute(&format!("DELETE FROM {} WHERE id = ?1;", E::TABLE), [id])
            .map_err(|err| map_write_error(E::TABLE, err))?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                table: E::TABLE,
                id,
            });
        }

        Ok(())
    }
}

fn map_write_error(table: &'static str, err: rusqlite::Error) -> RepoError {
    match err {
        rusqlite::Error::SqliteFailure(failure, message)
            if failure.code == ErrorCode::ConstraintViolation =>
        {
            RepoError::Conflict {
                table,
                message: message.unwrap_or_else(|| failure.to_string()),
            }
        }
        other => other.into(),
    }
}

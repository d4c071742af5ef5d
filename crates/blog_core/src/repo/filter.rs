//! Typed query filters for the generic repository.
//!
//! A [`Filter`] is a conjunction of [`Condition`]s compiled into a SQL `WHERE`
//! clause with positional parameters. Column names come from `&'static str`
//! and are checked against the entity mapping before use.

use super::mapping::{SqlEntity, AUDIT_COLUMNS};
use super::{RepoError, RepoResult};
use crate::model::EntityId;
use rusqlite::types::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Id(EntityId),
    ExcludeId(EntityId),
    NotDeleted,
    Active,
    Eq { column: &'static str, value: Value },
}

/// Conjunctive row filter. The default filter matches every row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<Condition>,
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_id(id: EntityId) -> Self {
        Self::all().with(Condition::Id(id))
    }

    /// Rows that are neither soft-deleted nor deactivated.
    pub fn visible() -> Self {
        Self::all().not_deleted().active()
    }

    pub fn not_deleted(self) -> Self {
        self.with(Condition::NotDeleted)
    }

    pub fn active(self) -> Self {
        self.with(Condition::Active)
    }

    pub fn exclude_id(self, id: EntityId) -> Self {
        self.with(Condition::ExcludeId(id))
    }

    pub fn eq(self, column: &'static str, value: impl Into<Value>) -> Self {
        self.with(Condition::Eq {
            column,
            value: value.into(),
        })
    }

    pub fn with(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Compiles the filter into a `WHERE` clause and its bind values.
    pub(crate) fn to_sql<E: SqlEntity>(&self) -> RepoResult<(String, Vec<Value>)> {
        let mut sql = String::from(" WHERE 1 = 1");
        let mut values = Vec::with_capacity(self.conditions.len());

        for condition in &self.conditions {
            match condition {
                Condition::Id(id) => {
                    sql.push_str(" AND id = ?");
                    values.push(Value::Integer(*id));
                }
                Condition::ExcludeId(id) => {
                    sql.push_str(" AND id <> ?");
                    values.push(Value::Integer(*id));
                }
                Condition::NotDeleted => sql.push_str(" AND is_deleted = 0"),
                Condition::Active => sql.push_str(" AND is_active = 1"),
                Condition::Eq { column, value } => {
                    if !is_known_column::<E>(column) {
                        return Err(RepoError::UnknownColumn {
                            table: E::TABLE,
                            column: *column,
                        });
                    }
                    sql.push_str(&format!(" AND {column} = ?"));
                    values.push(value.clone());
                }
            }
        }

        Ok((sql, values))
    }
}

fn is_known_column<E: SqlEntity>(column: &str) -> bool {
    column == "id" || E::COLUMNS.contains(&column) || AUDIT_COLUMNS.contains(&column)
}

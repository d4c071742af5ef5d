//! Row ⇄ entity mappings for SQLite storage.
//!
//! # Responsibility
//! - Declare per-entity column lists in bind order.
//! - Encode entities into bind values and decode rows back into entities.
//!
//! # Invariants
//! - `COLUMNS` excludes `id` and the shared audit columns.
//! - `to_values()` yields exactly one value per entry of `COLUMNS`.
//! - Boolean flags are stored as `0`/`1`; any other value is invalid data.

use super::{RepoError, RepoResult};
use crate::model::article::Article;
use crate::model::category::Category;
use crate::model::role::Role;
use crate::model::user::User;
use crate::model::{Audit, Entity, EntityId};
use rusqlite::types::Value;
use rusqlite::Row;

/// Audit columns shared by every blog table, in bind order.
pub const AUDIT_COLUMNS: &[&str] = &[
    "created_date",
    "modified_date",
    "is_deleted",
    "is_active",
    "created_by_name",
    "modified_by_name",
    "note",
];

/// Storage mapping for an entity persisted in SQLite.
pub trait SqlEntity: Entity {
    const COLUMNS: &'static [&'static str];

    fn to_values(&self) -> Vec<Value>;

    fn from_row(row: &Row<'_>, id: EntityId, audit: Audit) -> RepoResult<Self>;
}

/// Comma separated `id, <entity columns>, <audit columns>` select list.
pub(crate) fn select_list<E: SqlEntity>() -> String {
    std::iter::once("id")
        .chain(E::COLUMNS.iter().copied())
        .chain(AUDIT_COLUMNS.iter().copied())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Entity columns followed by audit columns, as written on insert/update.
pub(crate) fn write_columns<E: SqlEntity>() -> Vec<&'static str> {
    E::COLUMNS
        .iter()
        .chain(AUDIT_COLUMNS.iter())
        .copied()
        .collect()
}

/// Entity values followed by audit values, aligned with [`write_columns`].
pub(crate) fn write_values<E: SqlEntity>(entity: &E) -> Vec<Value> {
    let mut values = entity.to_values();
    values.extend(audit_to_values(entity.audit()));
    values
}

/// Decodes `id`, audit columns and entity columns from one row.
pub(crate) fn decode_row<E: SqlEntity>(row: &Row<'_>) -> RepoResult<E> {
    let id: EntityId = row.get("id")?;
    let audit = audit_from_row(row, E::TABLE)?;
    let entity = E::from_row(row, id, audit)?;
    entity.validate().map_err(|err| {
        RepoError::InvalidData(format!("{} row {id} violates constraints: {err}", E::TABLE))
    })?;
    Ok(entity)
}

fn audit_to_values(audit: &Audit) -> Vec<Value> {
    vec![
        Value::Integer(audit.created_date),
        Value::Integer(audit.modified_date),
        Value::Integer(bool_to_int(audit.is_deleted)),
        Value::Integer(bool_to_int(audit.is_active)),
        Value::Text(audit.created_by_name.clone()),
        Value::Text(audit.modified_by_name.clone()),
        optional_text(audit.note.as_deref()),
    ]
}

fn audit_from_row(row: &Row<'_>, table: &str) -> RepoResult<Audit> {
    Ok(Audit {
        created_date: row.get("created_date")?,
        modified_date: row.get("modified_date")?,
        is_deleted: parse_flag(row, table, "is_deleted")?,
        is_active: parse_flag(row, table, "is_active")?,
        created_by_name: row.get("created_by_name")?,
        modified_by_name: row.get("modified_by_name")?,
        note: row.get("note")?,
    })
}

impl SqlEntity for Article {
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "content",
        "thumbnail",
        "date",
        "views_count",
        "comment_count",
        "seo_author",
        "seo_description",
        "seo_tags",
        "category_id",
        "user_id",
    ];

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.title.clone()),
            Value::Text(self.content.clone()),
            Value::Text(self.thumbnail.clone()),
            Value::Integer(self.date),
            Value::Integer(self.views_count),
            Value::Integer(self.comment_count),
            Value::Text(self.seo_author.clone()),
            Value::Text(self.seo_description.clone()),
            Value::Text(self.seo_tags.clone()),
            Value::Integer(self.category_id),
            Value::Integer(self.user_id),
        ]
    }

    fn from_row(row: &Row<'_>, id: EntityId, audit: Audit) -> RepoResult<Self> {
        Ok(Self {
            id,
            title: row.get("title")?,
            content: row.get("content")?,
            thumbnail: row.get("thumbnail")?,
            date: row.get("date")?,
            views_count: row.get("views_count")?,
            comment_count: row.get("comment_count")?,
            seo_author: row.get("seo_author")?,
            seo_description: row.get("seo_description")?,
            seo_tags: row.get("seo_tags")?,
            category_id: row.get("category_id")?,
            user_id: row.get("user_id")?,
            audit,
        })
    }
}

impl SqlEntity for Category {
    const COLUMNS: &'static [&'static str] = &["name", "description"];

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.name.clone()),
            optional_text(self.description.as_deref()),
        ]
    }

    fn from_row(row: &Row<'_>, id: EntityId, audit: Audit) -> RepoResult<Self> {
        Ok(Self {
            id,
            name: row.get("name")?,
            description: row.get("description")?,
            audit,
        })
    }
}

impl SqlEntity for User {
    const COLUMNS: &'static [&'static str] = &[
        "email",
        "user_name",
        "password_hash",
        "picture",
        "first_name",
        "last_name",
        "description",
        "role_id",
    ];

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.email.clone()),
            Value::Text(self.user_name.clone()),
            Value::Text(self.password_hash.clone()),
            Value::Text(self.picture.clone()),
            Value::Text(self.first_name.clone()),
            Value::Text(self.last_name.clone()),
            optional_text(self.description.as_deref()),
            Value::Integer(self.role_id),
        ]
    }

    fn from_row(row: &Row<'_>, id: EntityId, audit: Audit) -> RepoResult<Self> {
        Ok(Self {
            id,
            email: row.get("email")?,
            user_name: row.get("user_name")?,
            password_hash: row.get("password_hash")?,
            picture: row.get("picture")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            description: row.get("description")?,
            role_id: row.get("role_id")?,
            audit,
        })
    }
}

impl SqlEntity for Role {
    const COLUMNS: &'static [&'static str] = &["name", "description"];

    fn to_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.name.clone()),
            Value::Text(self.description.clone()),
        ]
    }

    fn from_row(row: &Row<'_>, id: EntityId, audit: Audit) -> RepoResult<Self> {
        Ok(Self {
            id,
            name: row.get("name")?,
            description: row.get("description")?,
            audit,
        })
    }
}

fn parse_flag(row: &Row<'_>, table: &str, column: &str) -> RepoResult<bool> {
    match row.get::<_, i64>(column)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid {column} value `{other}` in {table}.{column}"
        ))),
    }
}

fn optional_text(value: Option<&str>) -> Value {
    match value {
        Some(text) => Value::Text(text.to_string()),
        None => Value::Null,
    }
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

//! Data-transfer shapes crossing the manager boundary.
//!
//! # Responsibility
//! - Carry validated caller input (`*AddDto`, `*UpdateDto`) into managers.
//! - Carry entities plus their included relations back out (`*Dto`, `*ListDto`).
//! - Map input DTOs onto entities.
//!
//! # Invariants
//! - Input DTOs are validated with `validator` before any entity is built.
//! - Validation messages are user-facing Turkish text.

pub mod article;
pub mod category;
pub mod role;
pub mod user;

use std::collections::BTreeMap;
use validator::{ValidationError, ValidationErrors};

pub use article::{ArticleAddDto, ArticleDto, ArticleListDto, ArticleUpdateDto};
pub use category::{CategoryAddDto, CategoryDto, CategoryListDto, CategoryUpdateDto};
pub use role::{RoleAddDto, RoleDto, RoleListDto, RoleUpdateDto};
pub use user::{UserAddDto, UserDto, UserListDto, UserPasswordChangeDto, UserUpdateDto};

/// Flattens validation errors into one message ordered by field name.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut by_field: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages = by_field.entry(field.to_string()).or_default();
        for error in field_errors.iter() {
            let message = match error.message.as_ref() {
                Some(message) => message.to_string(),
                None => format!("{field} alanı geçersiz."),
            };
            messages.push(message);
        }
    }

    by_field
        .into_values()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rejects empty and whitespace-only text; `length` alone counts spaces.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

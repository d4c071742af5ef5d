//! Shared audit record carried by every entity.
//!
//! # Invariants
//! - `created_by_name` and `modified_by_name` are required, at most 50 chars.
//! - `note` is optional, at most 500 chars.
//! - Timestamps are Unix epoch milliseconds.

use super::{check_max_len, check_optional_max_len, check_required, EntityValidationError};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Actor name used when no explicit author is known.
pub const DEFAULT_ACTOR: &str = "Admin";

const ACTOR_NAME_MAX: usize = 50;
const NOTE_MAX: usize = 500;

/// Audit fields inherited by all blog entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audit {
    pub created_date: i64,
    pub modified_date: i64,
    /// Soft delete flag; the row stays in storage while set.
    pub is_deleted: bool,
    pub is_active: bool,
    pub created_by_name: String,
    pub modified_by_name: String,
    pub note: Option<String>,
}

impl Audit {
    /// Creates a fresh audit record stamped with the current time.
    pub fn new(created_by_name: impl Into<String>) -> Self {
        let now = now_epoch_ms();
        let created_by_name = created_by_name.into();
        Self {
            created_date: now,
            modified_date: now,
            is_deleted: false,
            is_active: true,
            modified_by_name: created_by_name.clone(),
            created_by_name,
            note: None,
        }
    }

    /// Records a modification by `modified_by_name` at the current time.
    pub fn touch(&mut self, modified_by_name: impl Into<String>) {
        self.modified_by_name = modified_by_name.into();
        self.modified_date = now_epoch_ms();
    }

    /// Marks the owning entity as softly deleted.
    pub fn soft_delete(&mut self, modified_by_name: impl Into<String>) {
        self.is_deleted = true;
        self.touch(modified_by_name);
    }

    pub(crate) fn validate(&self) -> Result<(), EntityValidationError> {
        check_required("created_by_name", &self.created_by_name)?;
        check_max_len("created_by_name", &self.created_by_name, ACTOR_NAME_MAX)?;
        check_required("modified_by_name", &self.modified_by_name)?;
        check_max_len("modified_by_name", &self.modified_by_name, ACTOR_NAME_MAX)?;
        check_optional_max_len("note", self.note.as_deref(), NOTE_MAX)?;
        Ok(())
    }
}

impl Default for Audit {
    fn default() -> Self {
        Self::new(DEFAULT_ACTOR)
    }
}

/// Current wall clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{Audit, DEFAULT_ACTOR};

    #[test]
    fn new_audit_is_active_and_not_deleted() {
        let audit = Audit::default();
        assert!(audit.is_active);
        assert!(!audit.is_deleted);
        assert_eq!(audit.created_by_name, DEFAULT_ACTOR);
        assert_eq!(audit.modified_by_name, DEFAULT_ACTOR);
        assert_eq!(audit.created_date, audit.modified_date);
    }

    #[test]
    fn soft_delete_sets_flag_and_modifier() {
        let mut audit = Audit::new("writer");
        audit.soft_delete("editor");
        assert!(audit.is_deleted);
        assert_eq!(audit.created_by_name, "writer");
        assert_eq!(audit.modified_by_name, "editor");
        assert!(audit.modified_date >= audit.created_date);
    }

    #[test]
    fn validate_rejects_long_note() {
        let mut audit = Audit::default();
        audit.note = Some("x".repeat(501));
        assert!(audit.validate().is_err());
    }
}

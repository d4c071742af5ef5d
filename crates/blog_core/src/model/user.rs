//! User entity.
//!
//! # Invariants
//! - `email` and `user_name` are unique across all rows, deleted ones included.
//! - `password_hash` is never serialized.

use super::{
    check_max_len, check_optional_max_len, check_required, Audit, Entity, EntityId,
    EntityValidationError,
};
use serde::{Deserialize, Serialize};

pub const EMAIL_MAX: usize = 50;
pub const USER_NAME_MAX: usize = 20;
pub const PICTURE_MAX: usize = 250;
pub const NAME_PART_MAX: usize = 30;
pub const DESCRIPTION_MAX: usize = 500;

/// Picture assigned when a user does not upload one.
pub const DEFAULT_PICTURE: &str = "defaultUser.png";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub email: String,
    pub user_name: String,
    #[serde(skip)]
    pub password_hash: String,
    pub picture: String,
    pub first_name: String,
    pub last_name: String,
    pub description: Option<String>,
    pub role_id: EntityId,
    #[serde(flatten)]
    pub audit: Audit,
}

impl User {
    /// Creates an unsaved user with an already hashed password.
    pub fn new(
        role_id: EntityId,
        email: impl Into<String>,
        user_name: impl Into<String>,
        password_hash: impl Into<String>,
        created_by_name: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            email: email.into(),
            user_name: user_name.into(),
            password_hash: password_hash.into(),
            picture: DEFAULT_PICTURE.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            description: None,
            role_id,
            audit: Audit::new(created_by_name),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Entity for User {
    const TABLE: &'static str = "Users";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }

    fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }

    fn validate(&self) -> Result<(), EntityValidationError> {
        check_required("email", &self.email)?;
        check_max_len("email", &self.email, EMAIL_MAX)?;
        check_required("user_name", &self.user_name)?;
        check_max_len("user_name", &self.user_name, USER_NAME_MAX)?;
        check_required("password_hash", &self.password_hash)?;
        check_required("picture", &self.picture)?;
        check_max_len("picture", &self.picture, PICTURE_MAX)?;
        check_required("first_name", &self.first_name)?;
        check_max_len("first_name", &self.first_name, NAME_PART_MAX)?;
        check_required("last_name", &self.last_name)?;
        check_max_len("last_name", &self.last_name, NAME_PART_MAX)?;
        check_optional_max_len("description", self.description.as_deref(), DESCRIPTION_MAX)?;
        self.audit.validate()
    }
}

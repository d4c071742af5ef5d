//! Role DTOs.

use crate::model::role::Role;
use crate::model::user::User;
use crate::model::{Audit, EntityId};
use serde::{Deserialize, Serialize};
use super::not_blank;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RoleAddDto {
    #[validate(length(
        min = 3,
        max = 30,
        message = "Rol Adı alanı 3 ile 30 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Rol Adı Boş geçilmemelidir."
    ))]
    pub name: String,
    #[validate(length(
        min = 3,
        max = 250,
        message = "Rol Açıklaması alanı 3 ile 250 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Rol Açıklaması Boş geçilmemelidir."
    ))]
    pub description: String,
}

impl RoleAddDto {
    pub fn into_entity(self, created_by_name: &str) -> Role {
        Role {
            id: 0,
            name: self.name,
            description: self.description,
            audit: Audit::new(created_by_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RoleUpdateDto {
    #[validate(range(min = 1, message = "Rol Boş geçilmemelidir."))]
    pub id: EntityId,
    #[validate(length(
        min = 3,
        max = 30,
        message = "Rol Adı alanı 3 ile 30 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Rol Adı Boş geçilmemelidir."
    ))]
    pub name: String,
    #[validate(length(
        min = 3,
        max = 250,
        message = "Rol Açıklaması alanı 3 ile 250 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Rol Açıklaması Boş geçilmemelidir."
    ))]
    pub description: String,
    pub is_active: bool,
    pub is_deleted: bool,
}

impl RoleUpdateDto {
    pub fn apply_to(&self, role: &mut Role, modified_by_name: &str) {
        role.name = self.name.clone();
        role.description = self.description.clone();
        role.audit.is_active = self.is_active;
        role.audit.is_deleted = self.is_deleted;
        role.audit.touch(modified_by_name);
    }
}

impl From<&Role> for RoleUpdateDto {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            name: role.name.clone(),
            description: role.description.clone(),
            is_active: role.audit.is_active,
            is_deleted: role.audit.is_deleted,
        }
    }
}

/// Role with its users included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleDto {
    pub role: Role,
    pub users: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleListDto {
    pub roles: Vec<RoleDto>,
}

//! Category DTOs.

use crate::model::article::Article;
use crate::model::category::Category;
use crate::model::{Audit, EntityId};
use serde::{Deserialize, Serialize};
use super::not_blank;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CategoryAddDto {
    #[validate(length(
        min = 3,
        max = 70,
        message = "Kategori Adı alanı 3 ile 70 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Kategori Adı Boş geçilmemelidir."
    ))]
    pub name: String,
    #[validate(length(
        max = 500,
        message = "Açıklama alanı 500 karakterden büyük olmamalıdır."
    ))]
    pub description: Option<String>,
    #[validate(length(
        max = 500,
        message = "Kategori Özel Not alanı 500 karakterden büyük olmamalıdır."
    ))]
    pub note: Option<String>,
    pub is_active: bool,
}

impl CategoryAddDto {
    pub fn into_entity(self, created_by_name: &str) -> Category {
        let mut audit = Audit::new(created_by_name);
        audit.is_active = self.is_active;
        audit.note = self.note;
        Category {
            id: 0,
            name: self.name,
            description: self.description,
            audit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CategoryUpdateDto {
    #[validate(range(min = 1, message = "Kategori Boş geçilmemelidir."))]
    pub id: EntityId,
    #[validate(length(
        min = 3,
        max = 70,
        message = "Kategori Adı alanı 3 ile 70 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Kategori Adı Boş geçilmemelidir."
    ))]
    pub name: String,
    #[validate(length(
        max = 500,
        message = "Açıklama alanı 500 karakterden büyük olmamalıdır."
    ))]
    pub description: Option<String>,
    #[validate(length(
        max = 500,
        message = "Kategori Özel Not alanı 500 karakterden büyük olmamalıdır."
    ))]
    pub note: Option<String>,
    pub is_active: bool,
    pub is_deleted: bool,
}

impl CategoryUpdateDto {
    pub fn apply_to(&self, category: &mut Category, modified_by_name: &str) {
        category.name = self.name.clone();
        category.description = self.description.clone();
        category.audit.note = self.note.clone();
        category.audit.is_active = self.is_active;
        category.audit.is_deleted = self.is_deleted;
        category.audit.touch(modified_by_name);
    }
}

impl From<&Category> for CategoryUpdateDto {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            description: category.description.clone(),
            note: category.audit.note.clone(),
            is_active: category.audit.is_active,
            is_deleted: category.audit.is_deleted,
        }
    }
}

/// Category with its articles included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDto {
    pub category: Category,
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListDto {
    pub categories: Vec<CategoryDto>,
}

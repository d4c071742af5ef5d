//! Article DTOs.

use crate::model::article::Article;
use crate::model::category::Category;
use crate::model::user::User;
use crate::model::{Audit, EntityId};
use serde::{Deserialize, Serialize};
use super::not_blank;
use validator::Validate;

/// Input for creating an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ArticleAddDto {
    #[validate(length(
        min = 5,
        max = 100,
        message = "Başlık alanı 5 ile 100 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Başlık Boş geçilmemelidir."
    ))]
    pub title: String,
    #[validate(length(min = 20, message = "İçerik alanı 20 karakterden az olmamalıdır."))]
    #[validate(custom(
        function = "not_blank",
        message = "İçerik Boş geçilmemelidir."
    ))]
    pub content: String,
    #[validate(length(
        min = 5,
        max = 250,
        message = "Thumbnail alanı 5 ile 250 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Thumbnail Boş geçilmemelidir."
    ))]
    pub thumbnail: String,
    /// Publication date in epoch milliseconds.
    pub date: i64,
    #[validate(length(max = 50, message = "Seo Yazar alanı 50 karakterden büyük olmamalıdır."))]
    #[validate(custom(
        function = "not_blank",
        message = "Seo Yazar Boş geçilmemelidir."
    ))]
    pub seo_author: String,
    #[validate(length(
        max = 150,
        message = "Seo Açıklama alanı 150 karakterden büyük olmamalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Seo Açıklama Boş geçilmemelidir."
    ))]
    pub seo_description: String,
    #[validate(length(
        max = 70,
        message = "Seo Etiketler alanı 70 karakterden büyük olmamalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Seo Etiketler Boş geçilmemelidir."
    ))]
    pub seo_tags: String,
    #[validate(range(min = 1, message = "Kategori Boş geçilmemelidir."))]
    pub category_id: EntityId,
    pub is_active: bool,
}

impl ArticleAddDto {
    /// Maps the input onto a new unsaved article authored by `user_id`.
    pub fn into_entity(self, user_id: EntityId, created_by_name: &str) -> Article {
        let mut audit = Audit::new(created_by_name);
        audit.is_active = self.is_active;
        Article {
            id: 0,
            title: self.title,
            content: self.content,
            thumbnail: self.thumbnail,
            date: self.date,
            views_count: 0,
            comment_count: 0,
            seo_author: self.seo_author,
            seo_description: self.seo_description,
            seo_tags: self.seo_tags,
            category_id: self.category_id,
            user_id,
            audit,
        }
    }
}

/// Input for replacing the editable fields of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ArticleUpdateDto {
    #[validate(range(min = 1, message = "Makale Boş geçilmemelidir."))]
    pub id: EntityId,
    #[validate(length(
        min = 5,
        max = 100,
        message = "Başlık alanı 5 ile 100 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Başlık Boş geçilmemelidir."
    ))]
    pub title: String,
    #[validate(length(min = 20, message = "İçerik alanı 20 karakterden az olmamalıdır."))]
    #[validate(custom(
        function = "not_blank",
        message = "İçerik Boş geçilmemelidir."
    ))]
    pub content: String,
    #[validate(length(
        min = 5,
        max = 250,
        message = "Thumbnail alanı 5 ile 250 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Thumbnail Boş geçilmemelidir."
    ))]
    pub thumbnail: String,
    pub date: i64,
    #[validate(length(max = 50, message = "Seo Yazar alanı 50 karakterden büyük olmamalıdır."))]
    #[validate(custom(
        function = "not_blank",
        message = "Seo Yazar Boş geçilmemelidir."
    ))]
    pub seo_author: String,
    #[validate(length(
        max = 150,
        message = "Seo Açıklama alanı 150 karakterden büyük olmamalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Seo Açıklama Boş geçilmemelidir."
    ))]
    pub seo_description: String,
    #[validate(length(
        max = 70,
        message = "Seo Etiketler alanı 70 karakterden büyük olmamalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Seo Etiketler Boş geçilmemelidir."
    ))]
    pub seo_tags: String,
    #[validate(range(min = 1, message = "Kategori Boş geçilmemelidir."))]
    pub category_id: EntityId,
    pub is_active: bool,
    pub is_deleted: bool,
}

impl ArticleUpdateDto {
    /// Copies editable fields onto the stored article and stamps the editor.
    pub fn apply_to(&self, article: &mut Article, modified_by_name: &str) {
        article.title = self.title.clone();
        article.content = self.content.clone();
        article.thumbnail = self.thumbnail.clone();
        article.date = self.date;
        article.seo_author = self.seo_author.clone();
        article.seo_description = self.seo_description.clone();
        article.seo_tags = self.seo_tags.clone();
        article.category_id = self.category_id;
        article.audit.is_active = self.is_active;
        article.audit.is_deleted = self.is_deleted;
        article.audit.touch(modified_by_name);
    }
}

impl From<&Article> for ArticleUpdateDto {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            content: article.content.clone(),
            thumbnail: article.thumbnail.clone(),
            date: article.date,
            seo_author: article.seo_author.clone(),
            seo_description: article.seo_description.clone(),
            seo_tags: article.seo_tags.clone(),
            category_id: article.category_id,
            is_active: article.audit.is_active,
            is_deleted: article.audit.is_deleted,
        }
    }
}

/// Article with its category and author included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleDto {
    pub article: Article,
    pub category: Category,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleListDto {
    pub articles: Vec<ArticleDto>,
    /// Set when the list was filtered by category.
    pub category_id: Option<EntityId>,
}

#[cfg(test)]
mod tests {
    use super::ArticleAddDto;
    use validator::Validate;

    fn valid_dto() -> ArticleAddDto {
        ArticleAddDto {
            title: "Rust Sahiplik Modeli".to_string(),
            content: "Sahiplik, ödünç alma ve yaşam süreleri üzerine.".to_string(),
            thumbnail: "rust.png".to_string(),
            date: 1_600_000_000_000,
            seo_author: "Yazar".to_string(),
            seo_description: "Rust".to_string(),
            seo_tags: "rust".to_string(),
            category_id: 1,
            is_active: true,
        }
    }

    #[test]
    fn valid_dto_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn short_title_and_content_fail() {
        let dto = ArticleAddDto {
            title: "Kısa".to_string(),
            content: "az".to_string(),
            ..valid_dto()
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("content"));
    }

    #[test]
    fn into_entity_keeps_active_flag_and_author() {
        let dto = ArticleAddDto {
            is_active: false,
            ..valid_dto()
        };
        let article = dto.into_entity(1, "editor");
        assert_eq!(article.id, 0);
        assert_eq!(article.user_id, 1);
        assert!(!article.audit.is_active);
        assert_eq!(article.audit.created_by_name, "editor");
        assert_eq!(article.audit.modified_by_name, "editor");
    }
}

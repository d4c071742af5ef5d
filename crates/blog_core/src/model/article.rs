//! Article entity.
//!
//! # Invariants
//! - `category_id` and `user_id` reference existing rows (enforced by FK).
//! - `views_count` and `comment_count` are never negative.
//! - SEO author, description and tags are required.

use super::{
    check_max_len, check_non_negative, check_required, now_epoch_ms, Audit, Entity, EntityId,
    EntityValidationError,
};
use serde::{Deserialize, Serialize};

pub const TITLE_MAX: usize = 100;
pub const THUMBNAIL_MAX: usize = 250;
pub const SEO_AUTHOR_MAX: usize = 50;
pub const SEO_DESCRIPTION_MAX: usize = 150;
pub const SEO_TAGS_MAX: usize = 70;

/// Thumbnail used when an article has no explicit cover image.
pub const DEFAULT_THUMBNAIL: &str = "Default.jpg";

/// Blog post stored in `Articles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub thumbnail: String,
    /// Publication date in epoch milliseconds.
    pub date: i64,
    pub views_count: i64,
    pub comment_count: i64,
    pub seo_author: String,
    pub seo_description: String,
    pub seo_tags: String,
    pub category_id: EntityId,
    pub user_id: EntityId,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Article {
    /// Creates an unsaved article with the default thumbnail.
    ///
    /// SEO fields are derived: the author is `created_by_name`, the
    /// description and tags start from the title.
    pub fn new(
        category_id: EntityId,
        user_id: EntityId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_by_name: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let audit = Audit::new(created_by_name);
        Self {
            id: 0,
            content: content.into(),
            thumbnail: DEFAULT_THUMBNAIL.to_string(),
            date: now_epoch_ms(),
            views_count: 0,
            comment_count: 0,
            seo_author: audit.created_by_name.clone(),
            seo_description: title.chars().take(SEO_DESCRIPTION_MAX).collect(),
            seo_tags: title.chars().take(SEO_TAGS_MAX).collect(),
            title,
            category_id,
            user_id,
            audit,
        }
    }
}

impl Entity for Article {
    const TABLE: &'static str = "Articles";

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
        check_required("title", &self.title)?;
        check_max_len("title", &self.title, TITLE_MAX)?;
        check_required("content", &self.content)?;
        check_required("thumbnail", &self.thumbnail)?;
        check_max_len("thumbnail", &self.thumbnail, THUMBNAIL_MAX)?;
        check_required("seo_author", &self.seo_author)?;
        check_max_len("seo_author", &self.seo_author, SEO_AUTHOR_MAX)?;
        check_required("seo_description", &self.seo_description)?;
        check_max_len("seo_description", &self.seo_description, SEO_DESCRIPTION_MAX)?;
        check_required("seo_tags", &self.seo_tags)?;
        check_max_len("seo_tags", &self.seo_tags, SEO_TAGS_MAX)?;
        check_non_negative("views_count", self.views_count)?;
        check_non_negative("comment_count", self.comment_count)?;
        self.audit.validate()
    }
}

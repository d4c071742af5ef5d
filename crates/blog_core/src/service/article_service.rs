//! Article manager.
//!
//! # Invariants
//! - Every returned article includes its category and author.
//! - Articles can only be attached to non-deleted categories.
//! - Soft delete keeps the row; hard delete removes it.

use crate::dto::{validation_message, ArticleAddDto, ArticleDto, ArticleListDto, ArticleUpdateDto};
use crate::model::article::Article;
use crate::model::{Entity, EntityId};
use crate::repo::{Filter, Repository, UnitOfWork};
use crate::service::{reject_invalid, DataResult, OpResult, ServiceError, ServiceResult};
use log::{error, info};
use validator::Validate;

/// Author assigned to articles added without an explicit user.
pub const DEFAULT_AUTHOR_ID: EntityId = 1;

const ARTICLE_NOT_FOUND: &str = "Böyle bir makale bulunamadı.";
const CATEGORY_NOT_FOUND: &str = "Böyle bir kategori bulunamadı.";
const USER_NOT_FOUND: &str = "Böyle bir kullanıcı bulunamadı.";
const COUNT_FAILED: &str = "Beklenmeyen bir hata ile karşılaşıldı.";

pub struct ArticleManager<'uow> {
    uow: &'uow UnitOfWork,
}

impl<'uow> ArticleManager<'uow> {
    pub fn new(uow: &'uow UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get(&self, article_id: EntityId) -> ServiceResult<DataResult<ArticleDto>> {
        match self.uow.articles().get(&Filter::by_id(article_id))? {
            Some(article) => Ok(DataResult::success(self.include(article)?)),
            None => Ok(DataResult::error(ARTICLE_NOT_FOUND)),
        }
    }

    /// Returns the editable projection of one article.
    pub fn get_update_dto(&self, article_id: EntityId) -> ServiceResult<DataResult<ArticleUpdateDto>> {
        match self.uow.articles().get(&Filter::by_id(article_id))? {
            Some(article) => Ok(DataResult::success(ArticleUpdateDto::from(&article))),
            None => Ok(DataResult::error(ARTICLE_NOT_FOUND)),
        }
    }

    pub fn get_all(&self) -> ServiceResult<DataResult<ArticleListDto>> {
        self.list(&Filter::all(), None)
    }

    pub fn get_all_by_non_deleted(&self) -> ServiceResult<DataResult<ArticleListDto>> {
        self.list(&Filter::all().not_deleted(), None)
    }

    pub fn get_all_by_non_deleted_and_active(&self) -> ServiceResult<DataResult<ArticleListDto>> {
        self.list(&Filter::visible(), None)
    }

    /// Lists visible articles of one category.
    pub fn get_all_by_category(
        &self,
        category_id: EntityId,
    ) -> ServiceResult<DataResult<ArticleListDto>> {
        if !self.uow.categories().any(&Filter::by_id(category_id))? {
            return Ok(DataResult::error(CATEGORY_NOT_FOUND));
        }

        let filter = Filter::visible().eq("category_id", category_id);
        self.list(&filter, Some(category_id))
    }

    /// Adds an article authored by [`DEFAULT_AUTHOR_ID`].
    pub fn add(
        &self,
        dto: ArticleAddDto,
        created_by_name: &str,
    ) -> ServiceResult<DataResult<ArticleDto>> {
        self.add_as(dto, created_by_name, DEFAULT_AUTHOR_ID)
    }

    pub fn add_as(
        &self,
        dto: ArticleAddDto,
        created_by_name: &str,
        user_id: EntityId,
    ) -> ServiceResult<DataResult<ArticleDto>> {
        if let Err(errors) = dto.validate() {
            return Ok(DataResult::error(validation_message(&errors)));
        }

        let work = self.uow.begin()?;
        if !work
            .categories()
            .any(&Filter::by_id(dto.category_id).not_deleted())?
        {
            return Ok(DataResult::error(CATEGORY_NOT_FOUND));
        }
        if !work.users().any(&Filter::by_id(user_id).not_deleted())? {
            return Ok(DataResult::error(USER_NOT_FOUND));
        }

        let article = dto.into_entity(user_id, created_by_name);
        let added = match reject_invalid(work.articles().add(&article))? {
            Ok(added) => added,
            Err(message) => return Ok(DataResult::error(message)),
        };
        work.save()?;

        info!(
            "event=article_add module=service status=ok id={} category_id={}",
            added.id, added.category_id
        );
        let message = format!("{} başlıklı makale başarıyla eklenmiştir.", added.title);
        Ok(DataResult::success_with_message(message, self.include(added)?))
    }

    pub fn update(
        &self,
        dto: ArticleUpdateDto,
        modified_by_name: &str,
    ) -> ServiceResult<DataResult<ArticleDto>> {
        if let Err(errors) = dto.validate() {
            return Ok(DataResult::error(validation_message(&errors)));
        }

        let work = self.uow.begin()?;
        let Some(mut article) = work.articles().get(&Filter::by_id(dto.id))? else {
            return Ok(DataResult::error(ARTICLE_NOT_FOUND));
        };
        if !work
            .categories()
            .any(&Filter::by_id(dto.category_id).not_deleted())?
        {
            return Ok(DataResult::error(CATEGORY_NOT_FOUND));
        }

        dto.apply_to(&mut article, modified_by_name);
        let updated = match reject_invalid(work.articles().update(&article))? {
            Ok(updated) => updated,
            Err(message) => return Ok(DataResult::error(message)),
        };
        work.save()?;

        info!("event=article_update module=service status=ok id={}", updated.id);
        let message = format!(
            "{} başlıklı makale başarıyla güncellenmiştir.",
            updated.title
        );
        Ok(DataResult::success_with_message(message, self.include(updated)?))
    }

    /// Soft-deletes an article; the row stays with `is_deleted` set.
    pub fn delete(&self, article_id: EntityId, modified_by_name: &str) -> ServiceResult<OpResult> {
        let work = self.uow.begin()?;
        let Some(mut article) = work.articles().get(&Filter::by_id(article_id))? else {
            return Ok(OpResult::error(ARTICLE_NOT_FOUND));
        };

        article.audit_mut().soft_delete(modified_by_name);
        if let Err(message) = reject_invalid(work.articles().update(&article))? {
            return Ok(OpResult::error(message));
        }
        work.save()?;

        info!("event=article_delete module=service status=ok id={article_id} mode=soft");
        Ok(OpResult::success(format!(
            "{} başlıklı makale başarıyla silinmiştir.",
            article.title
        )))
    }

    pub fn hard_delete(&self, article_id: EntityId) -> ServiceResult<OpResult> {
        let work = self.uow.begin()?;
        let Some(article) = work.articles().get(&Filter::by_id(article_id))? else {
            return Ok(OpResult::error(ARTICLE_NOT_FOUND));
        };

        work.articles().delete(article.id)?;
        work.save()?;

        info!("event=article_delete module=service status=ok id={article_id} mode=hard");
        Ok(OpResult::success(format!(
            "{} başlıklı makale başarıyla veritabanından silinmiştir.",
            article.title
        )))
    }

    pub fn count(&self) -> ServiceResult<DataResult<u64>> {
        self.count_matching(&Filter::all())
    }

    pub fn count_by_non_deleted(&self) -> ServiceResult<DataResult<u64>> {
        self.count_matching(&Filter::all().not_deleted())
    }

    fn count_matching(&self, filter: &Filter) -> ServiceResult<DataResult<u64>> {
        match self.uow.articles().count(filter) {
            Ok(count) => Ok(DataResult::success(count)),
            Err(err) => {
                error!("event=article_count module=service status=error error={err}");
                Ok(DataResult::error(COUNT_FAILED))
            }
        }
    }

    fn list(
        &self,
        filter: &Filter,
        category_id: Option<EntityId>,
    ) -> ServiceResult<DataResult<ArticleListDto>> {
        let articles = self
            .uow
            .articles()
            .get_all(filter)?
            .into_iter()
            .map(|article| self.include(article))
            .collect::<ServiceResult<Vec<_>>>()?;

        Ok(DataResult::success(ArticleListDto {
            articles,
            category_id,
        }))
    }

    fn include(&self, article: Article) -> ServiceResult<ArticleDto> {
        let category = self
            .uow
            .categories()
            .get(&Filter::by_id(article.category_id))?
            .ok_or(ServiceError::InconsistentState("article category missing"))?;
        let user = self
            .uow
            .users()
            .get(&Filter::by_id(article.user_id))?
            .ok_or(ServiceError::InconsistentState("article author missing"))?;

        Ok(ArticleDto {
            article,
            category,
            user,
        })
    }
}

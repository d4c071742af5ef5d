//! Category manager.
//!
//! # Invariants
//! - A category read by id includes all of its articles, deleted or not.
//! - Hard delete is refused while articles still reference the category.

use crate::dto::{
    validation_message, CategoryAddDto, CategoryDto, CategoryListDto, CategoryUpdateDto,
};
use crate::model::category::Category;
use crate::model::{Entity, EntityId};
use crate::repo::{Filter, RepoError, Repository, UnitOfWork};
use crate::service::{reject_invalid, DataResult, OpResult, ServiceResult};
use log::{error, info, warn};
use validator::Validate;

const CATEGORY_NOT_FOUND: &str = "Böyle bir kategori bulunamadı.";
const COUNT_FAILED: &str = "Beklenmeyen bir hata ile karşılaşıldı.";

pub struct CategoryManager<'uow> {
    uow: &'uow UnitOfWork,
}

impl<'uow> CategoryManager<'uow> {
    pub fn new(uow: &'uow UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get(&self, category_id: EntityId) -> ServiceResult<DataResult<CategoryDto>> {
        match self.uow.categories().get(&Filter::by_id(category_id))? {
            Some(category) => Ok(DataResult::success(self.include(category)?)),
            None => Ok(DataResult::error(CATEGORY_NOT_FOUND)),
        }
    }

    pub fn get_update_dto(
        &self,
        category_id: EntityId,
    ) -> ServiceResult<DataResult<CategoryUpdateDto>> {
        match self.uow.categories().get(&Filter::by_id(category_id))? {
            Some(category) => Ok(DataResult::success(CategoryUpdateDto::from(&category))),
            None => Ok(DataResult::error(CATEGORY_NOT_FOUND)),
        }
    }

    pub fn get_all(&self) -> ServiceResult<DataResult<CategoryListDto>> {
        self.list(&Filter::all())
    }

    pub fn get_all_by_non_deleted(&self) -> ServiceResult<DataResult<CategoryListDto>> {
        self.list(&Filter::all().not_deleted())
    }

    pub fn get_all_by_non_deleted_and_active(&self) -> ServiceResult<DataResult<CategoryListDto>> {
        self.list(&Filter::visible())
    }

    pub fn add(
        &self,
        dto: CategoryAddDto,
        created_by_name: &str,
    ) -> ServiceResult<DataResult<CategoryDto>> {
        if let Err(errors) = dto.validate() {
            return Ok(DataResult::error(validation_message(&errors)));
        }

        let work = self.uow.begin()?;
        let category = dto.into_entity(created_by_name);
        let added = match reject_invalid(work.categories().add(&category))? {
            Ok(added) => added,
            Err(message) => return Ok(DataResult::error(message)),
        };
        work.save()?;

        info!("event=category_add module=service status=ok id={}", added.id);
        let message = format!("{} adlı kategori başarıyla eklenmiştir.", added.name);
        Ok(DataResult::success_with_message(message, self.include(added)?))
    }

    pub fn update(
        &self,
        dto: CategoryUpdateDto,
        modified_by_name: &str,
    ) -> ServiceResult<DataResult<CategoryDto>> {
        if let Err(errors) = dto.validate() {
            return Ok(DataResult::error(validation_message(&errors)));
        }

        let work = self.uow.begin()?;
        let Some(mut category) = work.categories().get(&Filter::by_id(dto.id))? else {
            return Ok(DataResult::error(CATEGORY_NOT_FOUND));
        };

        dto.apply_to(&mut category, modified_by_name);
        let updated = match reject_invalid(work.categories().update(&category))? {
            Ok(updated) => updated,
            Err(message) => return Ok(DataResult::error(message)),
        };
        work.save()?;

        info!("event=category_update module=service status=ok id={}", updated.id);
        let message = format!("{} adlı kategori başarıyla güncellenmiştir.", updated.name);
        Ok(DataResult::success_with_message(message, self.include(updated)?))
    }

    /// Soft-deletes a category. Its articles are left untouched.
    pub fn delete(&self, category_id: EntityId, modified_by_name: &str) -> ServiceResult<OpResult> {
        let work = self.uow.begin()?;
        let Some(mut category) = work.categories().get(&Filter::by_id(category_id))? else {
            return Ok(OpResult::error(CATEGORY_NOT_FOUND));
        };

        category.audit_mut().soft_delete(modified_by_name);
        if let Err(message) = reject_invalid(work.categories().update(&category))? {
            return Ok(OpResult::error(message));
        }
        work.save()?;

        info!("event=category_delete module=service status=ok id={category_id} mode=soft");
        Ok(OpResult::success(format!(
            "{} adlı kategori başarıyla silinmiştir.",
            category.name
        )))
    }

    pub fn hard_delete(&self, category_id: EntityId) -> ServiceResult<OpResult> {
        let work = self.uow.begin()?;
        let Some(category) = work.categories().get(&Filter::by_id(category_id))? else {
            return Ok(OpResult::error(CATEGORY_NOT_FOUND));
        };

        match work.categories().delete(category.id) {
            Ok(()) => {}
            Err(RepoError::Conflict { message, .. }) => {
                warn!(
                    "event=category_delete module=service status=rejected id={category_id} mode=hard reason={message}"
                );
                return Ok(OpResult::error(format!(
                    "{} adlı kategoriye ait makaleler bulunduğu için kategori silinemez.",
                    category.name
                )));
            }
            Err(err) => return Err(err.into()),
        }
        work.save()?;

        info!("event=category_delete module=service status=ok id={category_id} mode=hard");
        Ok(OpResult::success(format!(
            "{} adlı kategori başarıyla veritabanından silinmiştir.",
            category.name
        )))
    }

    pub fn count(&self) -> ServiceResult<DataResult<u64>> {
        self.count_matching(&Filter::all())
    }

    pub fn count_by_non_deleted(&self) -> ServiceResult<DataResult<u64>> {
        self.count_matching(&Filter::all().not_deleted())
    }

    fn count_matching(&self, filter: &Filter) -> ServiceResult<DataResult<u64>> {
        match self.uow.categories().count(filter) {
            Ok(count) => Ok(DataResult::success(count)),
            Err(err) => {
                error!("event=category_count module=service status=error error={err}");
                Ok(DataResult::error(COUNT_FAILED))
            }
        }
    }

    fn list(&self, filter: &Filter) -> ServiceResult<DataResult<CategoryListDto>> {
        let categories = self
            .uow
            .categories()
            .get_all(filter)?
            .into_iter()
            .map(|category| self.include(category))
            .collect::<ServiceResult<Vec<_>>>()?;

        Ok(DataResult::success(CategoryListDto { categories }))
    }

    fn include(&self, category: Category) -> ServiceResult<CategoryDto> {
        let articles = self
            .uow
            .articles()
            .get_all(&Filter::all().eq("category_id", category.id))?;
        Ok(CategoryDto { category, articles })
    }
}

//! Role manager.

use crate::dto::{validation_message, RoleAddDto, RoleDto, RoleListDto, RoleUpdateDto};
use crate::model::role::Role;
use crate::model::{Entity, EntityId};
use crate::repo::{Filter, RepoError, Repository, UnitOfWork};
use crate::service::{reject_invalid, DataResult, OpResult, ServiceResult};
use log::{info, warn};
use validator::Validate;

const ROLE_NOT_FOUND: &str = "Böyle bir rol bulunamadı.";

pub struct RoleManager<'uow> {
    uow: &'uow UnitOfWork,
}

impl<'uow> RoleManager<'uow> {
    pub fn new(uow: &'uow UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get(&self, role_id: EntityId) -> ServiceResult<DataResult<RoleDto>> {
        match self.uow.roles().get(&Filter::by_id(role_id))? {
            Some(role) => Ok(DataResult::success(self.include(role)?)),
            None => Ok(DataResult::error(ROLE_NOT_FOUND)),
        }
    }

    pub fn get_all(&self) -> ServiceResult<DataResult<RoleListDto>> {
        self.list(&Filter::all())
    }

    pub fn get_all_by_non_deleted(&self) -> ServiceResult<DataResult<RoleListDto>> {
        self.list(&Filter::all().not_deleted())
    }

    pub fn add(&self, dto: RoleAddDto, created_by_name: &str) -> ServiceResult<DataResult<RoleDto>> {
        if let Err(errors) = dto.validate() {
            return Ok(DataResult::error(validation_message(&errors)));
        }

        let work = self.uow.begin()?;
        let role = dto.into_entity(created_by_name);
        let added = match reject_invalid(work.roles().add(&role))? {
            Ok(added) => added,
            Err(message) => return Ok(DataResult::error(message)),
        };
        work.save()?;

        info!("event=role_add module=service status=ok id={}", added.id);
        let message = format!("{} adlı rol başarıyla eklenmiştir.", added.name);
        Ok(DataResult::success_with_message(message, self.include(added)?))
    }

    pub fn update(
        &self,
        dto: RoleUpdateDto,
        modified_by_name: &str,
    ) -> ServiceResult<DataResult<RoleDto>> {
        if let Err(errors) = dto.validate() {
            return Ok(DataResult::error(validation_message(&errors)));
        }

        let work = self.uow.begin()?;
        let Some(mut role) = work.roles().get(&Filter::by_id(dto.id))? else {
            return Ok(DataResult::error(ROLE_NOT_FOUND));
        };

        dto.apply_to(&mut role, modified_by_name);
        let updated = match reject_invalid(work.roles().update(&role))? {
            Ok(updated) => updated,
            Err(message) => return Ok(DataResult::error(message)),
        };
        work.save()?;

        info!("event=role_update module=service status=ok id={}", updated.id);
        let message = format!("{} adlı rol başarıyla güncellenmiştir.", updated.name);
        Ok(DataResult::success_with_message(message, self.include(updated)?))
    }

    pub fn delete(&self, role_id: EntityId, modified_by_name: &str) -> ServiceResult<OpResult> {
        let work = self.uow.begin()?;
        let Some(mut role) = work.roles().get(&Filter::by_id(role_id))? else {
            return Ok(OpResult::error(ROLE_NOT_FOUND));
        };

        role.audit_mut().soft_delete(modified_by_name);
        if let Err(message) = reject_invalid(work.roles().update(&role))? {
            return Ok(OpResult::error(message));
        }
        work.save()?;

        info!("event=role_delete module=service status=ok id={role_id} mode=soft");
        Ok(OpResult::success(format!(
            "{} adlı rol başarıyla silinmiştir.",
            role.name
        )))
    }

    /// Removes a role row. Refused while users still hold the role.
    pub fn hard_delete(&self, role_id: EntityId) -> ServiceResult<OpResult> {
        let work = self.uow.begin()?;
        let Some(role) = work.roles().get(&Filter::by_id(role_id))? else {
            return Ok(OpResult::error(ROLE_NOT_FOUND));
        };

        match work.roles().delete(role.id) {
            Ok(()) => {}
            Err(RepoError::Conflict { message, .. }) => {
                warn!(
                    "event=role_delete module=service status=rejected id={role_id} mode=hard reason={message}"
                );
                return Ok(OpResult::error(format!(
                    "{} adlı role sahip kullanıcılar bulunduğu için rol silinemez.",
                    role.name
                )));
            }
            Err(err) => return Err(err.into()),
        }
        work.save()?;

        info!("event=role_delete module=service status=ok id={role_id} mode=hard");
        Ok(OpResult::success(format!(
            "{} adlı rol başarıyla veritabanından silinmiştir.",
            role.name
        )))
    }

    fn list(&self, filter: &Filter) -> ServiceResult<DataResult<RoleListDto>> {
        let roles = self
            .uow
            .roles()
            .get_all(filter)?
            .into_iter()
            .map(|role| self.include(role))
            .collect::<ServiceResult<Vec<_>>>()?;

        Ok(DataResult::success(RoleListDto { roles }))
    }

    fn include(&self, role: Role) -> ServiceResult<RoleDto> {
        let users = self
            .uow
            .users()
            .get_all(&Filter::all().eq("role_id", role.id))?;
        Ok(RoleDto { role, users })
    }
}

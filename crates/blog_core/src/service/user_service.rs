//! User manager.
//!
//! # Responsibility
//! - Register, edit and remove user accounts.
//! - Own password hashing; plain passwords never reach the repository.
//!
//! # Invariants
//! - `email` and `user_name` are unique across all rows, deleted or not,
//!   ignoring ASCII case (`COLLATE NOCASE` columns).
//! - A user always references an existing role.

use super::password;
use crate::dto::{
    validation_message, UserAddDto, UserDto, UserListDto, UserPasswordChangeDto, UserUpdateDto,
};
use crate::model::user::User;
use crate::model::{Entity, EntityId};
use crate::repo::{Filter, RepoError, Repository, UnitOfWork, Work};
use crate::service::{reject_invalid, DataResult, OpResult, ServiceError, ServiceResult};
use log::{info, warn};
use validator::Validate;

const USER_NOT_FOUND: &str = "Böyle bir kullanıcı bulunamadı.";
const ROLE_NOT_FOUND: &str = "Böyle bir rol bulunamadı.";
const WRONG_CURRENT_PASSWORD: &str =
    "Lütfen, girmiş olduğunuz şu anki şifrenizi kontrol ediniz.";

pub struct UserManager<'uow> {
    uow: &'uow UnitOfWork,
}

impl<'uow> UserManager<'uow> {
    pub fn new(uow: &'uow UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get(&self, user_id: EntityId) -> ServiceResult<DataResult<UserDto>> {
        match self.uow.users().get(&Filter::by_id(user_id))? {
            Some(user) => Ok(DataResult::success(self.include(user)?)),
            None => Ok(DataResult::error(USER_NOT_FOUND)),
        }
    }

    pub fn get_all(&self) -> ServiceResult<DataResult<UserListDto>> {
        self.list(&Filter::all())
    }

    pub fn get_all_by_non_deleted(&self) -> ServiceResult<DataResult<UserListDto>> {
        self.list(&Filter::all().not_deleted())
    }

    pub fn add(&self, dto: UserAddDto, created_by_name: &str) -> ServiceResult<DataResult<UserDto>> {
        if let Err(errors) = dto.validate() {
            return Ok(DataResult::error(validation_message(&errors)));
        }

        let work = self.uow.begin()?;
        if let Some(message) = duplicate_identity(&work, &dto.email, &dto.user_name, None)? {
            return Ok(DataResult::error(message));
        }
        if !work
            .roles()
            .any(&Filter::by_id(dto.role_id).not_deleted())?
        {
            return Ok(DataResult::error(ROLE_NOT_FOUND));
        }

        let password_hash = password::hash_password(&dto.password)?;
        let user = dto.into_entity(password_hash, created_by_name);
        let added = match reject_invalid(work.users().add(&user))? {
            Ok(added) => added,
            Err(message) => return Ok(DataResult::error(message)),
        };
        work.save()?;

        info!("event=user_add module=service status=ok id={}", added.id);
        let message = format!(
            "{} adlı kullanıcı başarıyla eklenmiştir.",
            added.user_name
        );
        Ok(DataResult::success_with_message(message, self.include(added)?))
    }

    pub fn update(
        &self,
        dto: UserUpdateDto,
        modified_by_name: &str,
    ) -> ServiceResult<DataResult<UserDto>> {
        if let Err(errors) = dto.validate() {
            return Ok(DataResult::error(validation_message(&errors)));
        }

        let work = self.uow.begin()?;
        let Some(mut user) = work.users().get(&Filter::by_id(dto.id))? else {
            return Ok(DataResult::error(USER_NOT_FOUND));
        };
        if let Some(message) =
            duplicate_identity(&work, &dto.email, &dto.user_name, Some(dto.id))?
        {
            return Ok(DataResult::error(message));
        }
        if !work
            .roles()
            .any(&Filter::by_id(dto.role_id).not_deleted())?
        {
            return Ok(DataResult::error(ROLE_NOT_FOUND));
        }

        dto.apply_to(&mut user, modified_by_name);
        let updated = match reject_invalid(work.users().update(&user))? {
            Ok(updated) => updated,
            Err(message) => return Ok(DataResult::error(message)),
        };
        work.save()?;

        info!("event=user_update module=service status=ok id={}", updated.id);
        let message = format!(
            "{} adlı kullanıcı başarıyla güncellenmiştir.",
            updated.user_name
        );
        Ok(DataResult::success_with_message(message, self.include(updated)?))
    }

    pub fn delete(&self, user_id: EntityId, modified_by_name: &str) -> ServiceResult<OpResult> {
        let work = self.uow.begin()?;
        let Some(mut user) = work.users().get(&Filter::by_id(user_id))? else {
            return Ok(OpResult::error(USER_NOT_FOUND));
        };

        user.audit_mut().soft_delete(modified_by_name);
        if let Err(message) = reject_invalid(work.users().update(&user))? {
            return Ok(OpResult::error(message));
        }
        work.save()?;

        info!("event=user_delete module=service status=ok id={user_id} mode=soft");
        Ok(OpResult::success(format!(
            "{} adlı kullanıcı başarıyla silinmiştir.",
            user.user_name
        )))
    }

    /// Removes a user row. Refused while articles are still authored by it.
    pub fn hard_delete(&self, user_id: EntityId) -> ServiceResult<OpResult> {
        let work = self.uow.begin()?;
        let Some(user) = work.users().get(&Filter::by_id(user_id))? else {
            return Ok(OpResult::error(USER_NOT_FOUND));
        };

        match work.users().delete(user.id) {
            Ok(()) => {}
            Err(RepoError::Conflict { message, .. }) => {
                warn!(
                    "event=user_delete module=service status=rejected id={user_id} mode=hard reason={message}"
                );
                return Ok(OpResult::error(format!(
                    "{} adlı kullanıcıya ait makaleler bulunduğu için kullanıcı silinemez.",
                    user.user_name
                )));
            }
            Err(err) => return Err(err.into()),
        }
        work.save()?;

        info!("event=user_delete module=service status=ok id={user_id} mode=hard");
        Ok(OpResult::success(format!(
            "{} adlı kullanıcı başarıyla veritabanından silinmiştir.",
            user.user_name
        )))
    }

    /// Replaces the password after checking the current one.
    pub fn change_password(
        &self,
        user_id: EntityId,
        dto: UserPasswordChangeDto,
        modified_by_name: &str,
    ) -> ServiceResult<OpResult> {
        if let Err(errors) = dto.validate() {
            return Ok(OpResult::error(validation_message(&errors)));
        }

        let work = self.uow.begin()?;
        let Some(mut user) = work.users().get(&Filter::by_id(user_id).not_deleted())? else {
            return Ok(OpResult::error(USER_NOT_FOUND));
        };
        if !password::verify_password(&dto.current_password, &user.password_hash) {
            warn!("event=user_password_change module=service status=rejected id={user_id}");
            return Ok(OpResult::error(WRONG_CURRENT_PASSWORD));
        }

        user.password_hash = password::hash_password(&dto.new_password)?;
        user.audit_mut().touch(modified_by_name);
        if let Err(message) = reject_invalid(work.users().update(&user))? {
            return Ok(OpResult::error(message));
        }
        work.save()?;

        info!("event=user_password_change module=service status=ok id={user_id}");
        Ok(OpResult::success("Şifreniz başarıyla değiştirilmiştir."))
    }

    /// Checks credentials of an active, non-deleted user.
    ///
    /// Returns the user on success. Unknown emails and wrong passwords share one
    /// message.
    pub fn verify_password(
        &self,
        email: &str,
        password: &str,
    ) -> ServiceResult<DataResult<UserDto>> {
        let filter = Filter::visible().eq("email", email.to_string());
        let user = self
            .uow
            .users()
            .get(&filter)?
            .filter(|user| password::verify_password(password, &user.password_hash));

        match user {
            Some(user) => Ok(DataResult::success(self.include(user)?)),
            None => Ok(DataResult::error(
                "E-Posta adresiniz veya şifreniz yanlıştır.",
            )),
        }
    }

    fn list(&self, filter: &Filter) -> ServiceResult<DataResult<UserListDto>> {
        let users = self
            .uow
            .users()
            .get_all(filter)?
            .into_iter()
            .map(|user| self.include(user))
            .collect::<ServiceResult<Vec<_>>>()?;

        Ok(DataResult::success(UserListDto { users }))
    }

    fn include(&self, user: User) -> ServiceResult<UserDto> {
        let role = self
            .uow
            .roles()
            .get(&Filter::by_id(user.role_id))?
            .ok_or(ServiceError::InconsistentState("user role missing"))?;
        Ok(UserDto { user, role })
    }
}

/// Returns the conflict message when `email` or `user_name` is already taken
/// by a user other than `exclude`. Matching follows the columns' `NOCASE`
/// collation.
fn duplicate_identity(
    work: &Work<'_>,
    email: &str,
    user_name: &str,
    exclude: Option<EntityId>,
) -> ServiceResult<Option<String>> {
    let scoped = |filter: Filter| match exclude {
        Some(id) => filter.exclude_id(id),
        None => filter,
    };

    if work
        .users()
        .any(&scoped(Filter::all().eq("email", email.to_string())))?
    {
        return Ok(Some(format!(
            "{email} e-posta adresi zaten kullanılmaktadır."
        )));
    }
    if work
        .users()
        .any(&scoped(Filter::all().eq("user_name", user_name.to_string())))?
    {
        return Ok(Some(format!(
            "{user_name} kullanıcı adı zaten kullanılmaktadır."
        )));
    }

    Ok(None)
}

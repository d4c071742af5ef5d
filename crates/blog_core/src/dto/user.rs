//! User DTOs.
//!
//! Passwords only travel inward; read DTOs expose `User`, whose hash is
//! skipped by serde.

use crate::model::role::Role;
use crate::model::user::User;
use crate::model::{Audit, EntityId};
use serde::{Deserialize, Serialize};
use super::not_blank;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserAddDto {
    #[validate(length(
        min = 3,
        max = 20,
        message = "Kullanıcı Adı alanı 3 ile 20 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Kullanıcı Adı Boş geçilmemelidir."
    ))]
    pub user_name: String,
    #[validate(length(
        min = 10,
        max = 50,
        message = "E-Posta Adresi alanı 10 ile 50 karakter arasında olmalıdır."
    ))]
    #[validate(email(message = "E-Posta Adresi geçerli bir adres olmalıdır."))]
    #[validate(custom(
        function = "not_blank",
        message = "E-Posta Adresi Boş geçilmemelidir."
    ))]
    pub email: String,
    #[serde(skip_serializing)]
    #[validate(length(
        min = 5,
        max = 30,
        message = "Şifre alanı 5 ile 30 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Şifre Boş geçilmemelidir."
    ))]
    pub password: String,
    #[validate(length(
        min = 5,
        max = 250,
        message = "Resim alanı 5 ile 250 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Resim Boş geçilmemelidir."
    ))]
    pub picture: String,
    #[validate(length(
        min = 2,
        max = 30,
        message = "Ad alanı 2 ile 30 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Ad Boş geçilmemelidir."
    ))]
    pub first_name: String,
    #[validate(length(
        min = 2,
        max = 30,
        message = "Soyad alanı 2 ile 30 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Soyad Boş geçilmemelidir."
    ))]
    pub last_name: String,
    #[validate(length(
        max = 500,
        message = "Açıklama alanı 500 karakterden büyük olmamalıdır."
    ))]
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Rol Boş geçilmemelidir."))]
    pub role_id: EntityId,
}

impl UserAddDto {
    /// Maps the input onto a new unsaved user; the password is replaced by
    /// `password_hash`.
    pub fn into_entity(self, password_hash: String, created_by_name: &str) -> User {
        User {
            id: 0,
            email: self.email,
            user_name: self.user_name,
            password_hash,
            picture: self.picture,
            first_name: self.first_name,
            last_name: self.last_name,
            description: self.description,
            role_id: self.role_id,
            audit: Audit::new(created_by_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserUpdateDto {
    #[validate(range(min = 1, message = "Kullanıcı Boş geçilmemelidir."))]
    pub id: EntityId,
    #[validate(length(
        min = 3,
        max = 20,
        message = "Kullanıcı Adı alanı 3 ile 20 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Kullanıcı Adı Boş geçilmemelidir."
    ))]
    pub user_name: String,
    #[validate(length(
        min = 10,
        max = 50,
        message = "E-Posta Adresi alanı 10 ile 50 karakter arasında olmalıdır."
    ))]
    #[validate(email(message = "E-Posta Adresi geçerli bir adres olmalıdır."))]
    #[validate(custom(
        function = "not_blank",
        message = "E-Posta Adresi Boş geçilmemelidir."
    ))]
    pub email: String,
    #[validate(length(
        min = 5,
        max = 250,
        message = "Resim alanı 5 ile 250 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Resim Boş geçilmemelidir."
    ))]
    pub picture: String,
    #[validate(length(
        min = 2,
        max = 30,
        message = "Ad alanı 2 ile 30 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Ad Boş geçilmemelidir."
    ))]
    pub first_name: String,
    #[validate(length(
        min = 2,
        max = 30,
        message = "Soyad alanı 2 ile 30 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Soyad Boş geçilmemelidir."
    ))]
    pub last_name: String,
    #[validate(length(
        max = 500,
        message = "Açıklama alanı 500 karakterden büyük olmamalıdır."
    ))]
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Rol Boş geçilmemelidir."))]
    pub role_id: EntityId,
    pub is_active: bool,
}

impl UserUpdateDto {
    pub fn apply_to(&self, user: &mut User, modified_by_name: &str) {
        user.user_name = self.user_name.clone();
        user.email = self.email.clone();
        user.picture = self.picture.clone();
        user.first_name = self.first_name.clone();
        user.last_name = self.last_name.clone();
        user.description = self.description.clone();
        user.role_id = self.role_id;
        user.audit.is_active = self.is_active;
        user.audit.touch(modified_by_name);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UserPasswordChangeDto {
    #[validate(custom(
        function = "not_blank",
        message = "Şu Anki Şifreniz Boş geçilmemelidir."
    ))]
    pub current_password: String,
    #[validate(length(
        min = 5,
        max = 30,
        message = "Yeni Şifreniz alanı 5 ile 30 karakter arasında olmalıdır."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Yeni Şifreniz Boş geçilmemelidir."
    ))]
    pub new_password: String,
    #[validate(must_match(
        other = "new_password",
        message = "Girmiş olduğunuz Yeni Şifreniz ile Yeni Şifrenizin Tekrarı alanları birbiri ile eşleşmelidir."
    ))]
    #[validate(custom(
        function = "not_blank",
        message = "Yeni Şifrenizin Tekrarı Boş geçilmemelidir."
    ))]
    pub repeat_password: String,
}

/// User with its role included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    pub user: User,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserListDto {
    pub users: Vec<UserDto>,
}

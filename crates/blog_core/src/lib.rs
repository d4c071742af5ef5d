//! Data access and service layer of the blog.
//! Entities, storage, validated DTOs and per-entity managers live here.

pub mod config;
pub mod db;
pub mod dto;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::BlogConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::article::Article;
pub use model::category::Category;
pub use model::role::Role;
pub use model::user::User;
pub use model::{Audit, Entity, EntityId, EntityValidationError};
pub use repo::{Filter, RepoError, RepoResult, Repository, UnitOfWork};
pub use service::article_service::ArticleManager;
pub use service::category_service::CategoryManager;
pub use service::role_service::RoleManager;
pub use service::user_service::UserManager;
pub use service::{DataResult, OpResult, ResultStatus, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

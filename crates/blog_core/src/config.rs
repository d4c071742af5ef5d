//! Runtime configuration for hosts embedding the blog core.
//!
//! # Invariants
//! - Missing `db_path` means a fresh seeded in-memory database.
//! - Blank environment values count as unset.

use crate::db::open_db;
use crate::logging::{default_log_level, init_logging, LoggingError};
use crate::repo::{RepoResult, UnitOfWork};
use serde::Deserialize;
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "BLOG_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "BLOG_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "BLOG_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    /// File logging stays off while unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl BlogConfig {
    /// Reads `BLOG_DB_PATH`, `BLOG_LOG_LEVEL` and `BLOG_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            db_path: value(ENV_DB_PATH).map(PathBuf::from),
            log_level: value(ENV_LOG_LEVEL).unwrap_or(defaults.log_level),
            log_dir: value(ENV_LOG_DIR).map(PathBuf::from),
        }
    }

    /// Starts file logging when `log_dir` is set. Returns whether it did.
    pub fn init_logging(&self) -> Result<bool, LoggingError> {
        let Some(log_dir) = &self.log_dir else {
            return Ok(false);
        };
        let log_dir = log_dir.to_str().ok_or_else(|| {
            LoggingError::InvalidDirectory(format!("`{}` is not UTF-8", log_dir.display()))
        })?;
        init_logging(&self.log_level, log_dir)?;
        Ok(true)
    }

    /// Opens and migrates the configured database.
    pub fn open_unit_of_work(&self) -> RepoResult<UnitOfWork> {
        match &self.db_path {
            Some(path) => UnitOfWork::try_new(open_db(path)?),
            None => UnitOfWork::open_in_memory(),
        }
    }
}

//! CLI status report.
//!
//! # Responsibility
//! - Open the configured blog database and print deterministic status lines.
//! - Exit non-zero when configuration, logging or storage setup fails.

use blog_core::{ArticleManager, BlogConfig, CategoryManager, ServiceResult};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = BlogConfig::from_env();
    if let Err(err) = config.init_logging() {
        eprintln!("blog_cli logging error: {err}");
        return ExitCode::FAILURE;
    }

    let uow = match config.open_unit_of_work() {
        Ok(uow) => uow,
        Err(err) => {
            eprintln!("blog_cli storage error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("blog_core version={}", blog_core::core_version());
    match print_counts(&uow) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("blog_cli query error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn print_counts(uow: &blog_core::UnitOfWork) -> ServiceResult<()> {
    let articles = ArticleManager::new(uow)
        .get_all_by_non_deleted_and_active()?
        .into_data()
        .map_or(0, |list| list.articles.len());
    let categories = CategoryManager::new(uow)
        .get_all_by_non_deleted_and_active()?
        .into_data()
        .map_or(0, |list| list.categories.len());

    println!("articles active={articles}");
    println!("categories active={categories}");
    Ok(())
}

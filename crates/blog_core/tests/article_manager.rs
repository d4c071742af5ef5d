use blog_core::dto::{ArticleAddDto, ArticleUpdateDto};
use blog_core::{ArticleManager, CategoryManager, Filter, Repository, ResultStatus, UnitOfWork};

fn new_article(category_id: i64) -> ArticleAddDto {
    ArticleAddDto {
        title: "Rust Sahiplik Modeli".to_string(),
        content: "Sahiplik, ödünç alma ve yaşam süreleri üzerine bir yazı.".to_string(),
        thumbnail: "rust.png".to_string(),
        date: 1_600_000_000_000,
        seo_author: "Murat AĞYÜZ".to_string(),
        seo_description: "Rust sahiplik modeli".to_string(),
        seo_tags: "rust, sahiplik".to_string(),
        category_id,
        is_active: true,
    }
}

#[test]
fn add_then_get_includes_category_and_author() {
    let uow = UnitOfWork::open_in_memory().unwrap();
    let manager = ArticleManager::new(&uow);

    let added = manager.add(new_article(2), "editor").unwrap();
    assert!(added.is_success());
    assert_eq!(
        added.message,
        "Rust Sahiplik Modeli başlıklı makale başarıyla eklenmiştir."
    );
    let id = added.data().unwrap().article.id;

    let loaded = manager.get(id).unwrap();
    let dto = loaded.data().unwrap();
    assert_eq!(dto.article.title, "Rust Sahiplik Modeli");
    assert_eq!(dto.article.user_id, 1);
    assert_eq!(dto.article.audit.created_by_name, "editor");
    assert_eq!(dto.category.name, "C++");
    assert_eq!(dto.user.user_name, "muratagyuz");
    assert!(loaded.message.is_empty());
}

#[test]
fn missing_article_reports_not_found() {
    let uow = UnitOfWork::open_in_memory().unwrap();
    let manager = ArticleManager::new(&uow);

    let result = manager.get(404).unwrap();
    assert_eq!(result.status, ResultStatus::Error);
    assert_eq!(result.message, "Böyle bir makale bulunamadı.");
    assert!(result.data().is_none());

    let deleted = manager.delete(404, "editor").unwrap();
    assert_eq!(deleted.message, "Böyle bir makale bulunamadı.");
    let removed = manager.hard_delete(404).unwrap();
    assert_eq!(removed.message, "Böyle bir makale bulunamadı.");
}

#[test]
fn invalid_input_is_an_error_result_and_writes_nothing() {
    let uow = UnitOfWork::open_in_memory().unwrap();
    let manager = ArticleManager::new(&uow);

    let dto = ArticleAddDto {
        title: "Kısa".to_string(),
        ..new_article(1)
    };
    let result = manager.add(dto, "editor").unwrap();
    assert_eq!(result.status, ResultStatus::Error);
    assert_eq!(
        result.message,
        "Başlık alanı 5 ile 100 karakter arasında olmalıdır."
    );
    assert_eq!(manager.count().unwrap().into_data(), Some(3));
}

#[test]
fn whitespace_and_missing_seo_fields_are_error_results() {
    let uow = UnitOfWork::open_in_memory().unwrap();
    let manager = ArticleManager::new(&uow);

    let blank_title = ArticleAddDto {
        title: "     ".to_string(),
        ..new_article(1)
    };
    let result = manager.add(blank_title, "editor").unwrap();
    assert_eq!(result.status, ResultStatus::Error);
    assert_eq!(result.message, "Başlık Boş geçilmemelidir.");

    let no_seo_author = ArticleAddDto {
        seo_author: String::new(),
        ..new_article(1)
    };
    let result = manager.add(no_seo_author, "editor").unwrap();
    assert_eq!(result.message, "Seo Yazar Boş geçilmemelidir.");

    let mut dto = manager.get_update_dto(1).unwrap().into_data().unwrap();
    dto.seo_tags = "  ".to_string();
    let result = manager.update(dto, "editor").unwrap();
    assert_eq!(result.message, "Seo Etiketler Boş geçilmemelidir.");

    assert_eq!(manager.count().unwrap().into_data(), Some(3));
}

#[test]
fn blank_actor_name_is_an_error_result_not_a_failure() {
    let uow = UnitOfWork::open_in_memory().unwrap();
    let manager = ArticleManager::new(&uow);

    let result = manager.add(new_article(1), "   ").unwrap();
    assert_eq!(result.status, ResultStatus::Error);
    assert_eq!(result.message, "created_by_name alanı boş geçilmemelidir.");
    assert_eq!(manager.count().unwrap().into_data(), Some(3));

    let dto = manager.get_update_dto(1).unwrap().into_data().unwrap();
    let result = manager.update(dto, "").unwrap();
    assert_eq!(result.message, "modified_by_name alanı boş geçilmemelidir.");

    let deleted = manager.delete(1, " ").unwrap();
    assert_eq!(deleted.status, ResultStatus::Error);
    assert!(!uow.articles().get(&Filter::by_id(1)).unwrap().unwrap().audit.is_deleted);
}

#[test]
fn add_to_unknown_or_deleted_category_is_rejected() {
    let uow = UnitOfWork::open_in_memory().unwrap();
    let manager = ArticleManager::new(&uow);

    let result = manager.add(new_article(99), "editor").unwrap();
    assert_eq!(result.message, "Böyle bir kategori bulunamadı.");

    CategoryManager::new(&uow).delete(3, "editor").unwrap();
    let result = manager.add(new_article(3), "editor").unwrap();
    assert_eq!(result.message, "Böyle bir kategori bulunamadı.");
}

#[test]
fn add_as_unknown_author_is_rejected() {
    let uow = UnitOfWork::open_in_memory().unwrap();
    let manager = ArticleManager::new(&uow);

    let result = manager.add_as(new_article(1), "editor", 77).unwrap();
    assert_eq!(result.message, "Böyle bir kullanıcı bulunamadı.");
}

#[test]
fn update_applies_changes_and_keeps_creation_audit() {
    let uow = UnitOfWork::open_in_memory().unwrap();
    let manager = ArticleManager::new(&uow);

    let mut dto: ArticleUpdateDto = manager.get_update_dto(1).unwrap().into_data().unwrap();
    dto.title = "C# 10 ve .NET 6 Yenilikleri".to_string();
    dto.category_id = 3;

    let result = manager.update(dto, "editor").unwrap();
    assert_eq!(
        result.message,
        "C# 10 ve .NET 6 Yenilikleri başlıklı makale başarıyla güncellenmiştir."
    );
    let updated = result.into_data().unwrap();
    assert_eq!(updated.category.name, "JavaScript");
    assert_eq!(updated.article.views_count, 100);
    assert_eq!(updated.article.audit.created_by_name, "InitialCreate");
    assert_eq!(updated.article.audit.modified_by_name, "editor");
}

#[test]
fn update_of_missing_article_reports_not_found() {
    let uow = UnitOfWork::open_in_memory().unwrap();
    let manager = ArticleManager::new(&uow);

    let mut dto = manager.get_update_dto(1).unwrap().into_data().unwrap();
    dto.id = 404;
    let result = manager.update(dto, "editor").unwrap();
    assert_eq!(result.message, "Böyle bir makale bulunamadı.");
}

#[test]
fn soft_delete_keeps_row_and_hard_delete_removes_it() {
    let uow = UnitOfWork::open_in_memory().unwrap();
    let manager = ArticleManager::new(&uow);

    let deleted = manager.delete(2, "editor").unwrap();
    assert!(deleted.is_success());
    assert_eq!(
        deleted.message,
        "C++ 11 ve 19 Yenilikleri başlıklı makale başarıyla silinmiştir."
    );

    let row = uow.articles().get(&Filter::by_id(2)).unwrap().unwrap();
    assert!(row.audit.is_deleted);
    assert_eq!(row.audit.modified_by_name, "editor");
    assert_eq!(manager.count().unwrap().into_data(), Some(3));
    assert_eq!(manager.count_by_non_deleted().unwrap().into_data(), Some(2));
    assert_eq!(
        manager
            .get_all_by_non_deleted()
            .unwrap()
            .into_data()
            .unwrap()
            .articles
            .len(),
        2
    );

    let removed = manager.hard_delete(2).unwrap();
    assert_eq!(
        removed.message,
        "C++ 11 ve 19 Yenilikleri başlıklı makale başarıyla veritabanından silinmiştir."
    );
    assert!(!uow.articles().any(&Filter::by_id(2)).unwrap());
    assert_eq!(manager.count().unwrap().into_data(), Some(2));
}

#[test]
fn listing_variants_filter_by_visibility_and_category() {
    let uow = UnitOfWork::open_in_memory().unwrap();
    let manager = ArticleManager::new(&uow);

    let mut hidden = manager.get_update_dto(1).unwrap().into_data().unwrap();
    hidden.is_active = false;
    manager.update(hidden, "editor").unwrap();
    manager.add(new_article(2), "editor").unwrap();

    assert_eq!(manager.get_all().unwrap().into_data().unwrap().articles.len(), 4);
    let visible = manager
        .get_all_by_non_deleted_and_active()
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(visible.articles.len(), 3);
    assert!(visible.category_id.is_none());

    let by_category = manager.get_all_by_category(2).unwrap().into_data().unwrap();
    assert_eq!(by_category.category_id, Some(2));
    assert_eq!(by_category.articles.len(), 2);
    assert!(by_category
        .articles
        .iter()
        .all(|dto| dto.category.id == 2));

    let inactive_only = manager.get_all_by_category(1).unwrap().into_data().unwrap();
    assert!(inactive_only.articles.is_empty());

    let missing = manager.get_all_by_category(99).unwrap();
    assert_eq!(missing.message, "Böyle bir kategori bulunamadı.");
}

#[test]
fn results_serialize_to_json_without_password_hashes() {
    let uow = UnitOfWork::open_in_memory().unwrap();
    let manager = ArticleManager::new(&uow);

    let json = serde_json::to_value(manager.get(1).unwrap()).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["article"]["title"], "C# 9.0 ve .NET 5 Yenilikleri");
    assert_eq!(json["data"]["article"]["is_deleted"], false);
    assert_eq!(json["data"]["category"]["name"], "C#");
    assert_eq!(json["data"]["user"]["user_name"], "muratagyuz");
    assert!(json["data"]["user"].get("password_hash").is_none());

    let json = serde_json::to_value(manager.get(404).unwrap()).unwrap();
    assert_eq!(json["status"], "error");
    assert!(json["data"].is_null());
}

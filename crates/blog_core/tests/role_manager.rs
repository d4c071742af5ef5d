use blog_core::dto::{RoleAddDto, RoleUpdateDto};
use blog_core::{ResultStatus, RoleManager, UnitOfWork};

fn editor_role() -> RoleAddDto {
    RoleAddDto {
        name: "Editor".to_string(),
        description: "Makale ekleyip düzenleyebilir.".to_string(),
    }
}

#[test]
fn seeded_admin_role_includes_admin_user() {
    let uow = UnitOfWork::open_in_memory().unwrap();

    let admin = RoleManager::new(&uow).get(1).unwrap().into_data().unwrap();
    assert_eq!(admin.role.name, "Admin");
    assert_eq!(admin.users.len(), 1);
    assert_eq!(admin.users[0].user_name, "muratagyuz");
}

#[test]
fn add_update_and_delete_roundtrip() {
    let uow = UnitOfWork::open_in_memory().unwrap();
    let manager = RoleManager::new(&uow);

    let added = manager.add(editor_role(), "Admin").unwrap();
    assert_eq!(added.message, "Editor adlı rol başarıyla eklenmiştir.");
    let id = added.data().unwrap().role.id;

    let updated = manager
        .update(
            RoleUpdateDto {
                id,
                name: "Yazar".to_string(),
                description: "Makale yazabilir.".to_string(),
                is_active: true,
                is_deleted: false,
            },
            "Admin",
        )
        .unwrap();
    assert_eq!(updated.message, "Yazar adlı rol başarıyla güncellenmiştir.");

    let deleted = manager.delete(id, "Admin").unwrap();
    assert_eq!(deleted.message, "Yazar adlı rol başarıyla silinmiştir.");
    assert_eq!(manager.get_all().unwrap().into_data().unwrap().roles.len(), 2);
    assert_eq!(
        manager
            .get_all_by_non_deleted()
            .unwrap()
            .into_data()
            .unwrap()
            .roles
            .len(),
        1
    );

    let removed = manager.hard_delete(id).unwrap();
    assert_eq!(removed.message, "Yazar adlı rol başarıyla veritabanından silinmiştir.");
    assert_eq!(manager.get(id).unwrap().message, "Böyle bir rol bulunamadı.");
}

#[test]
fn short_name_is_rejected() {
    let uow = UnitOfWork::open_in_memory().unwrap();

    let dto = RoleAddDto {
        name: "Ed".to_string(),
        ..editor_role()
    };
    let result = RoleManager::new(&uow).add(dto, "Admin").unwrap();
    assert_eq!(result.status, ResultStatus::Error);
    assert_eq!(result.message, "Rol Adı alanı 3 ile 30 karakter arasında olmalıdır.");
}

#[test]
fn role_held_by_users_cannot_be_hard_deleted() {
    let uow = UnitOfWork::open_in_memory().unwrap();

    let result = RoleManager::new(&uow).hard_delete(1).unwrap();
    assert_eq!(result.status, ResultStatus::Error);
    assert_eq!(
        result.message,
        "Admin adlı role sahip kullanıcılar bulunduğu için rol silinemez."
    );
}

#[test]
fn whitespace_name_and_blank_actor_are_error_results() {
    let uow = UnitOfWork::open_in_memory().unwrap();
    let manager = RoleManager::new(&uow);

    let dto = RoleAddDto {
        name: "   ".to_string(),
        ..editor_role()
    };
    let result = manager.add(dto, "Admin").unwrap();
    assert_eq!(result.status, ResultStatus::Error);
    assert_eq!(result.message, "Rol Adı Boş geçilmemelidir.");

    let result = manager.add(editor_role(), " ").unwrap();
    assert_eq!(result.status, ResultStatus::Error);
    assert_eq!(result.message, "created_by_name alanı boş geçilmemelidir.");
    assert_eq!(manager.get_all().unwrap().into_data().unwrap().roles.len(), 1);
}

#[test]
fn update_of_missing_role_reports_not_found() {
    let uow = UnitOfWork::open_in_memory().unwrap();
    let manager = RoleManager::new(&uow);

    let dto = RoleUpdateDto {
        id: 404,
        name: "Yazar".to_string(),
        description: "Makale yazabilir.".to_string(),
        is_active: true,
        is_deleted: false,
    };
    let result = manager.update(dto, "Admin").unwrap();
    assert_eq!(result.status, ResultStatus::Error);
    assert_eq!(result.message, "Böyle bir rol bulunamadı.");
    assert!(result.data().is_none());
}

#[test]
fn non_deleted_listing_follows_soft_delete_and_restore() {
    let uow = UnitOfWork::open_in_memory().unwrap();
    let manager = RoleManager::new(&uow);
    let id = manager
        .add(editor_role(), "Admin")
        .unwrap()
        .into_data()
        .unwrap()
        .role
        .id;

    let names = |manager: &RoleManager<'_>| {
        manager
            .get_all_by_non_deleted()
            .unwrap()
            .into_data()
            .unwrap()
            .roles
            .into_iter()
            .map(|dto| dto.role.name)
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&manager), vec!["Admin", "Editor"]);

    manager.delete(id, "Admin").unwrap();
    assert_eq!(names(&manager), vec!["Admin"]);

    let stored = manager.get(id).unwrap().into_data().unwrap().role;
    let mut restore = RoleUpdateDto::from(&stored);
    assert!(restore.is_deleted);
    restore.is_deleted = false;
    let restored = manager.update(restore, "Admin").unwrap();
    assert!(restored.is_success());
    assert!(!restored.into_data().unwrap().role.audit.is_deleted);
    assert_eq!(names(&manager), vec!["Admin", "Editor"]);
}

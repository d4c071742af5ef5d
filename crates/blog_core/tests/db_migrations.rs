use blog_core::db::migrations::{latest_version, BLOG_TABLES};
use blog_core::db::{open_db, open_db_in_memory, DbError};
use blog_core::{RepoError, UnitOfWork};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    for table in BLOG_TABLES {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn seed_rows_are_present_and_visible() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(count(&conn, "Roles"), 1);
    assert_eq!(count(&conn, "Users"), 1);
    assert_eq!(count(&conn, "Categories"), 3);
    assert_eq!(count(&conn, "Articles"), 3);

    let hidden: i64 = conn
        .query_row(
            "SELECT
                (SELECT COUNT(*) FROM Roles WHERE is_deleted = 1 OR is_active = 0)
              + (SELECT COUNT(*) FROM Users WHERE is_deleted = 1 OR is_active = 0)
              + (SELECT COUNT(*) FROM Categories WHERE is_deleted = 1 OR is_active = 0)
              + (SELECT COUNT(*) FROM Articles WHERE is_deleted = 1 OR is_active = 0);",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(hidden, 0);

    let (user_name, role_name): (String, String) = conn
        .query_row(
            "SELECT u.user_name, r.name FROM Users u JOIN Roles r ON r.id = u.role_id WHERE u.id = 1;",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(user_name, "muratagyuz");
    assert_eq!(role_name, "Admin");

    let views: Vec<(i64, i64)> = conn
        .prepare("SELECT category_id, views_count FROM Articles ORDER BY id;")
        .unwrap()
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(views, vec![(1, 100), (2, 295), (3, 12)]);
}

#[test]
fn opening_same_database_twice_does_not_reseed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blog.sqlite3");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_eq!(count(&conn_second, "Categories"), 3);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failing_migration_reports_step_and_leaves_version_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("CREATE TABLE Users (id INTEGER PRIMARY KEY, login TEXT);")
        .unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert!(matches!(
        err,
        DbError::Migration {
            version: 1,
            name: "init",
            ..
        }
    ));

    let conn = Connection::open(&path).unwrap();
    assert_eq!(schema_version(&conn), 0);
}

#[test]
fn user_identity_columns_ignore_ascii_case() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute(
        "INSERT INTO Users (
            email, user_name, password_hash, picture, first_name, last_name, role_id,
            created_date, modified_date, created_by_name, modified_by_name
        ) VALUES ('MuratAgyuz@Outlook.com', 'other', 'x', 'other.png', 'Ot', 'Her', 1, 0, 0, 'Admin', 'Admin');",
        [],
    );
    assert!(result.is_err());

    let found: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM Users WHERE user_name = 'MURATAGYUZ';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(found, 1);
}

#[test]
fn unit_of_work_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let err = UnitOfWork::try_new(conn).err().unwrap();
    assert!(matches!(
        err,
        RepoError::UninitializedConnection {
            actual_version: 0,
            ..
        }
    ));
}

#[test]
fn foreign_keys_are_enforced() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute(
        "INSERT INTO Users (
            email, user_name, password_hash, picture, first_name, last_name, role_id,
            created_date, modified_date, created_by_name, modified_by_name
        ) VALUES ('ghost@example.com', 'ghost', 'x', 'ghost.png', 'Gh', 'Ost', 42, 0, 0, 'Admin', 'Admin');",
        [],
    );
    assert!(result.is_err());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}

use chirper_core::db::schema::CHIRP_COLUMNS;
use chirper_core::db::{open_db, open_db_in_memory, DbError};
use chirper_core::{Chirp, PersistenceDriver, SqlitePersistenceDriver};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_chirp_table() {
    let conn = open_db_in_memory().unwrap();

    assert_table_exists(&conn, "chirp");
    assert_eq!(column_names(&conn), CHIRP_COLUMNS);
}

#[test]
fn reopening_file_database_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chirper.db");

    let first = open_db(&path).unwrap();
    SqlitePersistenceDriver::new(&first)
        .save(&Chirp::new("u1", "persisted", "bob", "2024-03-01 12:30:00").unwrap())
        .unwrap();
    drop(first);

    let second = open_db(&path).unwrap();
    let all = SqlitePersistenceDriver::new(&second).get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all.as_slice()[0].text(), "persisted");
}

#[test]
fn id_is_the_uniqueness_key() {
    let conn = open_db_in_memory().unwrap();
    let insert = "INSERT INTO chirp (id, chirp_text, author, created_at) VALUES ('x', 't', 'a', 'c')";

    conn.execute(insert, []).unwrap();
    assert!(conn.execute(insert, []).is_err());
}

#[test]
fn opening_database_with_incompatible_chirp_table_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("CREATE TABLE chirp (id TEXT PRIMARY KEY, body TEXT);")
        .unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::IncompatibleSchema { table, column } => {
            assert_eq!(table, "chirp");
            assert_eq!(column, "chirp_text");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn opening_legacy_table_without_author_returns_error_and_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy-author.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE chirp (id TEXT PRIMARY KEY, chirp_text TEXT, created_at TEXT);
         INSERT INTO chirp VALUES ('old', 'kept', '2020-01-01 00:00:00');",
    )
    .unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert!(
        matches!(
            err,
            DbError::IncompatibleSchema {
                table: "chirp",
                column: "author"
            }
        ),
        "unexpected error: {err}"
    );

    let conn = Connection::open(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM chirp;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn opening_directory_path_returns_sqlite_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = open_db(dir.path()).unwrap_err();
    assert!(matches!(err, DbError::Sqlite(_)), "unexpected error: {err}");
}

fn column_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn.prepare("PRAGMA table_info(chirp);").unwrap();
    stmt.query_map([], |row| row.get::<_, String>("name"))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
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

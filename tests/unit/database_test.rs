//! Unit tests for the history-mcp database layer (read-only connection).

use history_mcp::database::Database;
use history_mcp::types::errors::HistoryError;
use rusqlite::Connection;
use tempfile::TempDir;

/// Helper: create a small SQLite file with one `urls` row.
fn setup() -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let path = tmp.path().join("History");
    let conn = Connection::open(&path).expect("Failed to create fixture database");
    conn.execute_batch(
        "CREATE TABLE urls (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             url LONGVARCHAR,
             title LONGVARCHAR,
             last_visit_time INTEGER NOT NULL
         );
         INSERT INTO urls (url, title, last_visit_time) VALUES ('https://example.com', 'Example', 1);",
    )
    .expect("Failed to seed fixture database");
    (tmp, path)
}

#[test]
fn test_open_read_only_existing_file_succeeds() {
    let (_tmp, path) = setup();
    let db = Database::open_read_only(&path).expect("open_read_only failed");

    let count: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM urls", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_open_read_only_missing_file_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("does-not-exist");

    match Database::open_read_only(&path) {
        Err(HistoryError::DatabaseNotFound(p)) => assert_eq!(p, path),
        Err(other) => panic!("expected DatabaseNotFound, got {}", other),
        Ok(_) => panic!("opening a missing file should fail"),
    }
    assert!(!path.exists(), "read-only open must not create the file");
}

#[test]
fn test_connection_rejects_writes() {
    let (_tmp, path) = setup();
    let db = Database::open_read_only(&path).unwrap();

    let result = db.connection().execute(
        "INSERT INTO urls (url, title, last_visit_time) VALUES ('https://evil.test', 'x', 2)",
        [],
    );
    assert!(result.is_err(), "writes through a read-only connection must fail");

    let reopened = Connection::open(&path).unwrap();
    let count: i64 = reopened
        .query_row("SELECT COUNT(*) FROM urls", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_open_directory_is_not_found() {
    let tmp = TempDir::new().unwrap();
    assert!(matches!(
        Database::open_read_only(tmp.path()),
        Err(HistoryError::DatabaseNotFound(_))
    ));
}

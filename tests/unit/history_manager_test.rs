//! Unit tests for the HistoryManager public API.
//!
//! These tests read Chromium-style `urls` tables written to temporary files,
//! through the `HistoryManagerTrait` interface.

use std::path::{Path, PathBuf};

use history_mcp::managers::history_manager::{HistoryManager, HistoryManagerTrait, HISTORY_LIMIT};
use history_mcp::types::errors::HistoryError;
use rusqlite::{params, Connection};
use tempfile::TempDir;

/// Schema of the `urls` table as the browser creates it.
const URLS_SCHEMA: &str = "CREATE TABLE urls (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    url LONGVARCHAR,
    title LONGVARCHAR,
    visit_count INTEGER DEFAULT 0 NOT NULL,
    typed_count INTEGER DEFAULT 0 NOT NULL,
    last_visit_time INTEGER NOT NULL,
    hidden INTEGER DEFAULT 0 NOT NULL
);";

/// Helper: write a history database holding `visits` as (url, title, last_visit_time).
fn create_history(dir: &Path, visits: &[(&str, Option<&str>, i64)]) -> PathBuf {
    let path = dir.join("History");
    let conn = Connection::open(&path).expect("Failed to create fixture database");
    conn.execute_batch(URLS_SCHEMA).expect("Failed to create urls table");
    for (url, title, time) in visits {
        conn.execute(
            "INSERT INTO urls (url, title, last_visit_time) VALUES (?1, ?2, ?3)",
            params![url, title, time],
        )
        .expect("Failed to insert visit");
    }
    path
}

#[test]
fn test_three_rows_come_back_most_recent_first() {
    let tmp = TempDir::new().unwrap();
    let path = create_history(
        tmp.path(),
        &[
            ("https://old.test/", Some("Old"), 100),
            ("https://newest.test/", Some("Newest"), 300),
            ("https://middle.test/", Some("Middle"), 200),
        ],
    );
    let mgr = HistoryManager::new(&path);

    let entries = mgr.read_history().unwrap();

    let urls: Vec<&str> = entries.iter().map(|e| e.url.as_str()).collect();
    assert_eq!(
        urls,
        vec!["https://newest.test/", "https://middle.test/", "https://old.test/"]
    );
    assert_eq!(entries[0].title, "Newest");
}

#[test]
fn test_large_store_is_capped_at_limit() {
    let tmp = TempDir::new().unwrap();
    let urls: Vec<String> = (0..150).map(|i| format!("https://site{}.test/", i)).collect();
    let visits: Vec<(&str, Option<&str>, i64)> = urls
        .iter()
        .enumerate()
        .map(|(i, u)| (u.as_str(), Some("Page"), i as i64))
        .collect();
    let path = create_history(tmp.path(), &visits);

    let entries = HistoryManager::new(&path).read_history().unwrap();

    assert_eq!(entries.len(), HISTORY_LIMIT);
    assert_eq!(entries[0].url, "https://site149.test/");
    assert_eq!(entries[99].url, "https://site50.test/");
}

#[test]
fn test_empty_store_returns_empty_list() {
    let tmp = TempDir::new().unwrap();
    let path = create_history(tmp.path(), &[]);

    let entries = HistoryManager::new(&path).read_history().unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_null_title_becomes_empty_string() {
    let tmp = TempDir::new().unwrap();
    let path = create_history(tmp.path(), &[("https://untitled.test/", None, 1)]);

    let entries = HistoryManager::new(&path).read_history().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "");
    assert_eq!(entries[0].url, "https://untitled.test/");
}

#[test]
fn test_each_call_rereads_the_store() {
    let tmp = TempDir::new().unwrap();
    let path = create_history(tmp.path(), &[("https://first.test/", Some("First"), 1)]);
    let mgr = HistoryManager::new(&path);
    assert_eq!(mgr.read_history().unwrap().len(), 1);

    // The browser records another visit between calls
    let conn = Connection::open(&path).unwrap();
    conn.execute(
        "INSERT INTO urls (url, title, last_visit_time) VALUES ('https://second.test/', 'Second', 2)",
        [],
    )
    .unwrap();
    drop(conn);

    let entries = mgr.read_history().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].url, "https://second.test/");
}

#[test]
fn test_missing_file_is_database_not_found() {
    let tmp = TempDir::new().unwrap();
    let mgr = HistoryManager::new(tmp.path().join("History"));

    assert!(matches!(
        mgr.read_history(),
        Err(HistoryError::DatabaseNotFound(_))
    ));
}

#[test]
fn test_missing_urls_table_is_database_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("History");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("CREATE TABLE visits (id INTEGER PRIMARY KEY, url INTEGER);")
        .unwrap();
    drop(conn);

    let err = HistoryManager::new(&path).read_history().unwrap_err();
    assert!(matches!(err, HistoryError::DatabaseError(_)));
    assert!(err.to_string().contains("no such table"), "got: {}", err);
}

#[test]
fn test_non_sqlite_file_is_database_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("History");
    std::fs::write(&path, b"this is definitely not a sqlite database, just plain text padding")
        .unwrap();

    let result = HistoryManager::new(&path).read_history();
    assert!(matches!(result, Err(HistoryError::DatabaseError(_))));
}

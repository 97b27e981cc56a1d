//! Unit tests for the local key-value store.

use highlight_saver::database::Database;
use tempfile::TempDir;

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_schema_creates_kv_table() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let exists: bool = db
        .connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='kv_store'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);
    assert!(exists, "kv_store table should exist after open");
}

#[test]
fn test_get_missing_key_is_none() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.get_raw("highlights").unwrap(), None);
}

#[test]
fn test_put_then_get_and_overwrite() {
    let db = Database::open_in_memory().unwrap();
    db.put_raw("highlights", "[]").unwrap();
    assert_eq!(db.get_raw("highlights").unwrap().as_deref(), Some("[]"));

    db.put_raw("highlights", "[1]").unwrap();
    assert_eq!(db.get_raw("highlights").unwrap().as_deref(), Some("[1]"));

    let rows: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1, "overwrite should not add a row");
}

#[test]
fn test_values_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("highlights.db");

    {
        let db = Database::open(&path).unwrap();
        db.put_raw("highlights", r#"[{"id":1}]"#).unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(
        db.get_raw("highlights").unwrap().as_deref(),
        Some(r#"[{"id":1}]"#)
    );
}

#[test]
fn test_open_is_idempotent_on_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.db");
    Database::open(&path).unwrap();
    assert!(Database::open(&path).is_ok());
}

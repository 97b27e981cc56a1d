//! Unit tests for the SQLite-backed extension runtime.

use std::rc::Rc;

use serde_json::json;
use tempfile::TempDir;

use highlight_saver::database::Database;
use highlight_saver::host::PrivilegeLayer;
use highlight_saver::services::extension_runtime::{ExtensionRuntime, RuntimeHandle};
use highlight_saver::types::errors::StoreError;

fn setup() -> ExtensionRuntime {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    ExtensionRuntime::new(Rc::new(db), RuntimeHandle::with_id("ext-1"))
}

#[test]
fn test_new_handle_has_generated_id() {
    let a = RuntimeHandle::new();
    let b = RuntimeHandle::new();
    assert!(a.is_valid());
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_invalidate_is_shared_across_clones() {
    let handle = RuntimeHandle::with_id("ext-1");
    let clone = handle.clone();
    clone.invalidate();
    assert!(!handle.is_valid());
    assert_eq!(handle.id(), None);

    // Repeated invalidation is harmless.
    handle.invalidate();
    assert!(!clone.is_valid());
}

#[test]
fn test_empty_id_is_not_a_valid_context() {
    let db = Database::open_in_memory().unwrap();
    let runtime = ExtensionRuntime::new(Rc::new(db), RuntimeHandle::with_id(""));
    assert!(!runtime.is_context_valid());
}

#[tokio::test]
async fn test_get_missing_key_is_none() {
    let runtime = setup();
    assert_eq!(runtime.get("highlights").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_then_get_round_trips_json() {
    let runtime = setup();
    let value = json!([{"id": 1, "text": "hello"}]);
    runtime.set("highlights", value.clone()).await.unwrap();
    assert_eq!(runtime.get("highlights").await.unwrap(), Some(value));
}

#[tokio::test]
async fn test_calls_fail_after_invalidation() {
    let runtime = setup();
    runtime.set("highlights", json!([])).await.unwrap();

    runtime.handle().invalidate();

    assert!(!runtime.is_context_valid());
    assert_eq!(
        runtime.get("highlights").await,
        Err(StoreError::ContextInvalidated)
    );
    assert_eq!(
        runtime.set("highlights", json!([1])).await,
        Err(StoreError::ContextInvalidated)
    );
}

#[tokio::test]
async fn test_quota_rejects_oversized_values() {
    let runtime = setup().with_quota(32);
    let big = json!("x".repeat(64));

    let err = runtime.set("k", big).await.unwrap_err();
    assert!(matches!(err, StoreError::QuotaExceeded { quota: 32, .. }));

    // The rejected write leaves nothing behind.
    assert_eq!(runtime.get("k").await.unwrap(), None);
}

#[tokio::test]
async fn test_quota_counts_key_and_value() {
    // "ab" (2) + "\"cd\"" (4) == 6
    let runtime = setup().with_quota(6);
    assert!(runtime.set("ab", json!("cd")).await.is_ok());
    assert!(runtime.set("abc", json!("cd")).await.is_err());
}

#[tokio::test]
async fn test_corrupt_stored_value_is_serialization_error() {
    let db = Rc::new(Database::open_in_memory().unwrap());
    db.put_raw("highlights", "{not json").unwrap();
    let runtime = ExtensionRuntime::new(db, RuntimeHandle::with_id("ext-1"));

    let err = runtime.get("highlights").await.unwrap_err();
    assert!(matches!(err, StoreError::Serialization(_)));
}

#[tokio::test]
async fn test_values_persist_across_runtimes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("highlights.db");

    {
        let db = Rc::new(Database::open(&path).unwrap());
        let runtime = ExtensionRuntime::new(db, RuntimeHandle::new());
        runtime.set("highlights", json!(["a"])).await.unwrap();
    }

    // A reloaded extension gets a new id but sees the same store.
    let db = Rc::new(Database::open(&path).unwrap());
    let runtime = ExtensionRuntime::new(db, RuntimeHandle::new());
    assert_eq!(
        runtime.get("highlights").await.unwrap(),
        Some(json!(["a"]))
    );
}

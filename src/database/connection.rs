//! SQLite connection management for the local key-value store.
//!
//! Provides the [`Database`] struct that wraps a `rusqlite::Connection`
//! and makes sure the single `kv_store` table exists on open.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::platform;

/// File name of the default on-disk store.
pub const DEFAULT_DB_FILE: &str = "highlights.db";

/// Key-value store wrapper over a SQLite connection.
///
/// Values are opaque strings; callers decide how to encode them.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) a SQLite database at the given file path.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the connection cannot be established or the
    /// table cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Opens an in-memory database; discarded when the `Database` is dropped.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Opens the store in the platform data directory, creating it if needed.
    pub fn open_default() -> Result<Self, rusqlite::Error> {
        let dir = platform::get_data_dir();
        if let Err(e) = std::fs::create_dir_all(&dir) {
            tracing::warn!(error = %e, dir = %dir.display(), "could not create data directory");
        }
        Self::open(dir.join(DEFAULT_DB_FILE))
    }

    /// Creates the key-value table if it does not exist. Idempotent.
    fn ensure_schema(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv_store (
                 key TEXT PRIMARY KEY,
                 value TEXT NOT NULL
             );",
        )
    }

    /// Reads the raw value stored under `key`.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
    }

    /// Replaces the value stored under `key`.
    pub fn put_raw(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

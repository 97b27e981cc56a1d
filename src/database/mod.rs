//! Local key-value store backed by SQLite.
//!
//! # Usage
//!
//! ```no_run
//! use highlight_saver::database::Database;
//!
//! // Open the store in the platform data directory
//! let db = Database::open_default().expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! db.put_raw("highlights", "[]").expect("write failed");
//! assert_eq!(db.get_raw("highlights").unwrap().as_deref(), Some("[]"));
//! ```

pub mod connection;

pub use connection::Database;

//! Extension runtime for Highlight Saver.
//!
//! Implements [`PrivilegeLayer`] over the SQLite key-value store. The
//! runtime's identity lives in a shared [`RuntimeHandle`]; invalidating the
//! handle revokes every further store call, the same way a browser revokes a
//! content script's access when its extension is reloaded.

use std::rc::Rc;
use std::sync::{Arc, RwLock};

use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::database::connection::Database;
use crate::host::runtime::PrivilegeLayer;
use crate::types::errors::StoreError;
use crate::types::settings::DEFAULT_STORAGE_QUOTA_BYTES;

/// Shared identity of a running extension instance.
///
/// Clones observe the same state, so the host can keep one clone and revoke
/// access while the page-side code holds another.
#[derive(Debug, Clone)]
pub struct RuntimeHandle {
    id: Arc<RwLock<Option<String>>>,
}

impl RuntimeHandle {
    /// Creates a live handle with a freshly generated extension id.
    pub fn new() -> Self {
        Self::with_id(&Uuid::new_v4().to_string())
    }

    pub fn with_id(id: &str) -> Self {
        Self {
            id: Arc::new(RwLock::new(Some(id.to_string()))),
        }
    }

    /// Current extension id, or `None` once invalidated.
    pub fn id(&self) -> Option<String> {
        // A poisoned lock means the runtime is unusable; treat as revoked.
        self.id.read().ok().and_then(|guard| guard.clone())
    }

    /// Revokes the runtime. Irreversible for this handle and all its clones.
    pub fn invalidate(&self) {
        if let Ok(mut guard) = self.id.write() {
            if let Some(id) = guard.take() {
                warn!(extension_id = %id, "extension context invalidated");
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.id().is_some()
    }
}

impl Default for RuntimeHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Key-value store access guarded by a [`RuntimeHandle`].
#[derive(Clone)]
pub struct ExtensionRuntime {
    db: Rc<Database>,
    handle: RuntimeHandle,
    quota_bytes: usize,
}

impl ExtensionRuntime {
    pub fn new(db: Rc<Database>, handle: RuntimeHandle) -> Self {
        Self {
            db,
            handle,
            quota_bytes: DEFAULT_STORAGE_QUOTA_BYTES,
        }
    }

    /// Sets the maximum encoded size of a single stored value.
    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = quota_bytes;
        self
    }

    pub fn handle(&self) -> &RuntimeHandle {
        &self.handle
    }

    fn ensure_live(&self) -> Result<(), StoreError> {
        if self.handle.is_valid() {
            Ok(())
        } else {
            Err(StoreError::ContextInvalidated)
        }
    }
}

impl PrivilegeLayer for ExtensionRuntime {
    fn extension_id(&self) -> Option<String> {
        self.handle.id()
    }

    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        self.ensure_live()?;
        let raw = self.db.get_raw(key)?;
        let value = match raw {
            Some(text) => Some(serde_json::from_str(&text)?),
            None => None,
        };
        debug!(key, found = value.is_some(), "store get");
        Ok(value)
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.ensure_live()?;
        let encoded = serde_json::to_string(&value)?;
        let needed = key.len() + encoded.len();
        if needed > self.quota_bytes {
            return Err(StoreError::QuotaExceeded {
                needed,
                quota: self.quota_bytes,
            });
        }
        self.db.put_raw(key, &encoded)?;
        debug!(key, bytes = needed, "store set");
        Ok(())
    }
}

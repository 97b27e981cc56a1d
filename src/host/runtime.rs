use serde_json::Value;

use crate::types::errors::StoreError;

/// Host-provided access to persistent storage.
///
/// Access can be revoked at any moment without notice (for example when
/// the extension is reloaded while a page is open), so callers check
/// [`is_context_valid`](PrivilegeLayer::is_context_valid) around every store call.
#[allow(async_fn_in_trait)]
pub trait PrivilegeLayer {
    /// Stable identifier of the running extension; `None` once revoked.
    fn extension_id(&self) -> Option<String>;

    /// Liveness check: can we still call host services?
    fn is_context_valid(&self) -> bool {
        self.extension_id().is_some_and(|id| !id.is_empty())
    }

    /// Reads the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Replaces the value stored under `key`.
    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError>;
}

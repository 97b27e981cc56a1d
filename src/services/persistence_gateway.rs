//! Persistence Gateway for Highlight Saver.
//!
//! Wraps every read and write of the highlight collection. The collection
//! is a single JSON array stored under [`HIGHLIGHTS_KEY`] and is always
//! replaced as a whole: read, modify in memory, write back.
//!
//! Two pages saving at the same moment can therefore lose one of the two
//! updates (last write wins on the whole value). That race is accepted; the
//! store offers no per-item append.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::host::runtime::PrivilegeLayer;
use crate::types::errors::{SaveError, StoreError};
use crate::types::highlight::{Collection, SavedHighlight, HIGHLIGHTS_KEY};

/// Named points at which privileges are re-checked during a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    BeforeRead,
    AfterRead,
    BeforeWrite,
}

impl Checkpoint {
    fn as_str(self) -> &'static str {
        match self {
            Checkpoint::BeforeRead => "before_read",
            Checkpoint::AfterRead => "after_read",
            Checkpoint::BeforeWrite => "before_write",
        }
    }
}

/// Collection access through a host privilege layer.
pub struct PersistenceGateway<R: PrivilegeLayer> {
    runtime: R,
}

impl<R: PrivilegeLayer> PersistenceGateway<R> {
    pub fn new(runtime: R) -> Self {
        Self { runtime }
    }

    /// Liveness of the underlying privilege layer.
    pub fn is_context_valid(&self) -> bool {
        self.runtime.is_context_valid()
    }

    fn checkpoint(&self, at: Checkpoint) -> Result<(), SaveError> {
        if self.runtime.is_context_valid() {
            Ok(())
        } else {
            warn!(checkpoint = at.as_str(), "privileges lost during save");
            Err(SaveError::PrivilegeInvalidated)
        }
    }

    /// Reads the whole collection. A missing or null value is an empty collection.
    pub async fn load_collection(&self) -> Result<Collection, StoreError> {
        match self.runtime.get(HIGHLIGHTS_KEY).await? {
            None | Some(Value::Null) => Ok(Collection::new()),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }

    /// Replaces the whole collection.
    pub async fn write_collection(&self, collection: &Collection) -> Result<(), StoreError> {
        let value = serde_json::to_value(collection)?;
        self.runtime.set(HIGHLIGHTS_KEY, value).await
    }

    /// Prepends `item` to the collection and writes it back.
    ///
    /// Privileges are checked before the read, after the read and before the
    /// write; the write result itself is the final check. There is no retry:
    /// any failure ends the attempt. Returns the new collection length.
    pub async fn append(&self, item: SavedHighlight) -> Result<usize, SaveError> {
        if item.text.trim().is_empty() {
            return Err(SaveError::UnexpectedException(
                "refusing to save an empty highlight".to_string(),
            ));
        }

        self.checkpoint(Checkpoint::BeforeRead)?;
        let mut collection = self.load_collection().await?;
        self.checkpoint(Checkpoint::AfterRead)?;

        let id = item.id;
        collection.insert(0, item);
        debug!(id, len = collection.len(), "prepended highlight");

        self.checkpoint(Checkpoint::BeforeWrite)?;
        self.write_collection(&collection).await?;

        info!(id, total = collection.len(), "highlight saved");
        Ok(collection.len())
    }
}

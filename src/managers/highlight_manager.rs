//! Highlight Manager (the list view).
//!
//! Reads the saved collection for display and deletes entries by id. Deletes
//! follow the same whole-collection pattern as saving: read, filter, write.

use tracing::info;

use crate::host::runtime::PrivilegeLayer;
use crate::services::persistence_gateway::PersistenceGateway;
use crate::types::errors::HighlightError;
use crate::types::highlight::{Collection, SavedHighlight};
use crate::types::settings::DEFAULT_TITLE_MAX_CHARS;

/// Display-ready form of one saved highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightCard {
    pub id: i64,
    /// The text wrapped in double quotes.
    pub quoted_text: String,
    /// Page title, truncated for display.
    pub link_text: String,
    pub href: String,
    /// Trailing metadata shown after the link, e.g. ` • 3/7/2025`.
    pub meta: String,
}

/// Truncates `title` to `max_chars` characters, appending "..." when cut.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() > max_chars {
        let head: String = title.chars().take(max_chars).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

impl HighlightCard {
    pub fn from_highlight(item: &SavedHighlight, title_max_chars: usize) -> Self {
        Self {
            id: item.id,
            quoted_text: format!("\"{}\"", item.text),
            link_text: truncate_title(&item.title, title_max_chars),
            href: item.url.clone(),
            meta: format!(" • {}", item.date),
        }
    }
}

/// List view over the persisted collection.
pub struct HighlightManager<R: PrivilegeLayer> {
    gateway: PersistenceGateway<R>,
    title_max_chars: usize,
}

impl<R: PrivilegeLayer> HighlightManager<R> {
    pub fn new(runtime: R) -> Self {
        Self {
            gateway: PersistenceGateway::new(runtime),
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
        }
    }

    pub fn with_title_max_chars(mut self, max_chars: usize) -> Self {
        self.title_max_chars = max_chars;
        self
    }

    /// All saved highlights, newest first.
    pub async fn list(&self) -> Result<Collection, HighlightError> {
        Ok(self.gateway.load_collection().await?)
    }

    /// Removes every highlight with `id` and writes the rest back.
    ///
    /// Deleting an unknown id leaves the collection unchanged. Returns the
    /// remaining collection.
    pub async fn delete(&self, id: i64) -> Result<Collection, HighlightError> {
        let mut collection = self.gateway.load_collection().await?;
        let before = collection.len();
        collection.retain(|h| h.id != id);
        self.gateway.write_collection(&collection).await?;
        info!(
            id,
            removed = before - collection.len(),
            remaining = collection.len(),
            "highlight deleted"
        );
        Ok(collection)
    }

    /// Header text such as "3 saved".
    pub async fn count_label(&self) -> Result<String, HighlightError> {
        let collection = self.list().await?;
        Ok(format!("{} saved", collection.len()))
    }

    pub async fn is_empty(&self) -> Result<bool, HighlightError> {
        Ok(self.list().await?.is_empty())
    }

    /// Display cards for every saved highlight, newest first.
    pub async fn cards(&self) -> Result<Vec<HighlightCard>, HighlightError> {
        let collection = self.list().await?;
        Ok(collection
            .iter()
            .map(|h| HighlightCard::from_highlight(h, self.title_max_chars))
            .collect())
    }
}

use serde::{Deserialize, Serialize};

/// Storage key holding the whole collection of saved highlights.
pub const HIGHLIGHTS_KEY: &str = "highlights";

/// A text selection saved together with the page it came from.
///
/// Items are immutable once created; the only mutation the collection sees
/// is prepend-on-save and filter-on-delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedHighlight {
    /// Creation timestamp in milliseconds since the epoch.
    pub id: i64,
    pub text: String,
    pub url: String,
    pub title: String,
    /// Locale-formatted capture date.
    pub date: String,
}

/// Ordered list of highlights, newest first.
pub type Collection = Vec<SavedHighlight>;

/// Page metadata read at the moment a save is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub url: String,
    pub title: String,
}

/// Clock readings taken at the moment a save is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureStamp {
    pub id: i64,
    pub date: String,
}

impl SavedHighlight {
    /// Builds a new highlight from captured text and call-time metadata.
    pub fn capture(text: &str, page: PageSnapshot, stamp: CaptureStamp) -> Self {
        Self {
            id: stamp.id,
            text: text.to_string(),
            url: page.url,
            title: page.title,
            date: stamp.date,
        }
    }
}

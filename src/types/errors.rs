use thiserror::Error;

/// Message shown when the host revoked our privileges mid-session.
pub const RELOADED_MESSAGE: &str = "Extension reloaded. Please refresh the page.";

/// Message shown for every other save failure.
pub const RETRY_MESSAGE: &str = "Failed to save. Please try again.";

// === StoreError ===

/// Errors reported by the host privilege layer's key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The extension context was invalidated (reloaded, updated or removed).
    #[error("Extension context invalidated")]
    ContextInvalidated,
    /// Writing the value would exceed the storage quota.
    #[error("Storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },
    /// The backing store failed.
    #[error("Storage backend error: {0}")]
    Backend(String),
    /// A stored value could not be encoded or decoded.
    #[error("Storage serialization error: {0}")]
    Serialization(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

// === SaveError ===

/// Failure of a single save attempt, as surfaced on the affordance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    /// The host revoked the program's access while the page was open.
    #[error("Privilege invalidated")]
    PrivilegeInvalidated,
    /// The store call completed but reported an unrelated error.
    #[error("Store operation failed: {0}")]
    StoreOperationFailed(String),
    /// Any other failure raised during the attempt.
    #[error("Unexpected error: {0}")]
    UnexpectedException(String),
}

impl SaveError {
    /// Human-readable reason exposed through the affordance tooltip.
    pub fn user_message(&self) -> &'static str {
        match self {
            SaveError::PrivilegeInvalidated => RELOADED_MESSAGE,
            SaveError::StoreOperationFailed(_) | SaveError::UnexpectedException(_) => RETRY_MESSAGE,
        }
    }
}

impl From<StoreError> for SaveError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::ContextInvalidated => SaveError::PrivilegeInvalidated,
            StoreError::Serialization(msg) => SaveError::UnexpectedException(msg),
            other => SaveError::StoreOperationFailed(other.to_string()),
        }
    }
}

// === RenderError ===

/// Errors raised while drawing into the isolated render target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The page has no body to attach the isolated root to.
    #[error("Document body not found")]
    NoDocumentBody,
    /// The isolated root was removed out from under us.
    #[error("Isolated render root is detached")]
    Detached,
    /// The host failed for another reason.
    #[error("Render host error: {0}")]
    Host(String),
}

// === HighlightError ===

/// Errors related to listing or deleting saved highlights.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighlightError {
    #[error("Highlight store error: {0}")]
    Store(#[from] StoreError),
}

use highlight_saver::types::errors::*;

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::ContextInvalidated.to_string(),
        "Extension context invalidated"
    );
    assert_eq!(
        StoreError::QuotaExceeded {
            needed: 2048,
            quota: 1024
        }
        .to_string(),
        "Storage quota exceeded: 2048 bytes needed, 1024 allowed"
    );
    assert_eq!(
        StoreError::Backend("disk I/O error".to_string()).to_string(),
        "Storage backend error: disk I/O error"
    );
    assert_eq!(
        StoreError::Serialization("expected array".to_string()).to_string(),
        "Storage serialization error: expected array"
    );
}

#[test]
fn store_error_from_serde_json_is_serialization() {
    let json_err = serde_json::from_str::<Vec<i32>>("{").unwrap_err();
    let err: StoreError = json_err.into();
    assert!(matches!(err, StoreError::Serialization(_)));
}

#[test]
fn store_error_from_rusqlite_is_backend() {
    let err: StoreError = rusqlite::Error::InvalidQuery.into();
    assert!(matches!(err, StoreError::Backend(_)));
}

// === SaveError Tests ===

#[test]
fn save_error_display_variants() {
    assert_eq!(
        SaveError::PrivilegeInvalidated.to_string(),
        "Privilege invalidated"
    );
    assert_eq!(
        SaveError::StoreOperationFailed("quota".to_string()).to_string(),
        "Store operation failed: quota"
    );
    assert_eq!(
        SaveError::UnexpectedException("boom".to_string()).to_string(),
        "Unexpected error: boom"
    );
}

#[test]
fn save_error_user_messages() {
    assert_eq!(
        SaveError::PrivilegeInvalidated.user_message(),
        "Extension reloaded. Please refresh the page."
    );
    assert_eq!(
        SaveError::StoreOperationFailed("x".to_string()).user_message(),
        "Failed to save. Please try again."
    );
    assert_eq!(
        SaveError::UnexpectedException("x".to_string()).user_message(),
        RETRY_MESSAGE
    );
}

#[test]
fn save_error_classifies_store_errors() {
    assert_eq!(
        SaveError::from(StoreError::ContextInvalidated),
        SaveError::PrivilegeInvalidated
    );
    assert_eq!(
        SaveError::from(StoreError::Serialization("bad".to_string())),
        SaveError::UnexpectedException("bad".to_string())
    );
    assert_eq!(
        SaveError::from(StoreError::QuotaExceeded {
            needed: 10,
            quota: 5
        }),
        SaveError::StoreOperationFailed(
            "Storage quota exceeded: 10 bytes needed, 5 allowed".to_string()
        )
    );
    assert!(matches!(
        SaveError::from(StoreError::Backend("locked".to_string())),
        SaveError::StoreOperationFailed(_)
    ));
}

#[test]
fn save_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(SaveError::PrivilegeInvalidated);
    assert!(err.source().is_none());
}

// === RenderError Tests ===

#[test]
fn render_error_display_variants() {
    assert_eq!(
        RenderError::NoDocumentBody.to_string(),
        "Document body not found"
    );
    assert_eq!(
        RenderError::Detached.to_string(),
        "Isolated render root is detached"
    );
    assert_eq!(
        RenderError::Host("appendChild".to_string()).to_string(),
        "Render host error: appendChild"
    );
}

// === HighlightError Tests ===

#[test]
fn highlight_error_wraps_store_error() {
    let err: HighlightError = StoreError::ContextInvalidated.into();
    assert_eq!(
        err.to_string(),
        "Highlight store error: Extension context invalidated"
    );
}

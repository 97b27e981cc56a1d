//! Unit tests for configuration defaults, serde fallbacks and env overrides.

use std::time::Duration;

use rstest::rstest;

use highlight_saver::types::settings::*;

#[test]
fn test_defaults_match_documented_constants() {
    let config = SaverConfig::default();
    assert_eq!(config.timing.debounce(), Duration::from_millis(10));
    assert_eq!(config.timing.success_display(), Duration::from_millis(1500));
    assert_eq!(config.timing.error_display(), Duration::from_millis(2000));
    assert_eq!(config.timing.lock_release(), Duration::from_millis(100));
    assert_eq!(config.layout.width, 120.0);
    assert_eq!(config.layout.height, 35.0);
    assert_eq!(config.layout.offset, 10.0);
    assert_eq!(config.layout.margin, 5.0);
    assert_eq!(config.storage.title_max_chars, 30);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config: SaverConfig =
        serde_json::from_str(r#"{"timing": {"debounce_ms": 25}}"#).unwrap();
    assert_eq!(config.timing.debounce_ms, 25);
    assert_eq!(config.timing.success_display_ms, DEFAULT_SUCCESS_DISPLAY_MS);
    assert_eq!(config.layout, LayoutSettings::default());
    assert_eq!(config.storage, StorageSettings::default());
}

#[test]
fn test_empty_json_is_default() {
    let config: SaverConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, SaverConfig::default());
}

#[rstest]
#[case::plain("PLAIN", "42", 42)]
#[case::padded("PADDED", "  7 ", 7)]
#[case::garbage("GARBAGE", "ten", 99)]
#[case::negative("NEGATIVE", "-1", 99)]
fn test_env_parse(#[case] suffix: &str, #[case] raw: &str, #[case] expected: u64) {
    let key = format!("HIGHLIGHT_SAVER_TEST_ENV_PARSE_{suffix}");
    std::env::set_var(&key, raw);
    assert_eq!(env_parse(&key, 99u64), expected);
    std::env::remove_var(&key);
}

#[test]
fn test_env_parse_missing_uses_default() {
    assert_eq!(env_parse("HIGHLIGHT_SAVER_TEST_NOT_SET", 3.5f64), 3.5);
}

#[test]
fn test_from_env_overrides_selected_values() {
    std::env::set_var("HIGHLIGHT_SAVER_DEBOUNCE_MS", "50");
    std::env::set_var("HIGHLIGHT_SAVER_AFFORDANCE_WIDTH", "160.5");
    std::env::set_var("HIGHLIGHT_SAVER_TITLE_MAX_CHARS", "not-a-number");

    let config = SaverConfig::from_env();

    std::env::remove_var("HIGHLIGHT_SAVER_DEBOUNCE_MS");
    std::env::remove_var("HIGHLIGHT_SAVER_AFFORDANCE_WIDTH");
    std::env::remove_var("HIGHLIGHT_SAVER_TITLE_MAX_CHARS");

    assert_eq!(config.timing.debounce_ms, 50);
    assert_eq!(config.layout.width, 160.5);
    assert_eq!(config.storage.title_max_chars, DEFAULT_TITLE_MAX_CHARS);
    assert_eq!(config.timing.lock_release_ms, DEFAULT_LOCK_RELEASE_MS);
}

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay before reading the selection after a selection-end signal.
pub const DEFAULT_DEBOUNCE_MS: u64 = 10;
/// How long the success state stays on screen.
pub const DEFAULT_SUCCESS_DISPLAY_MS: u64 = 1500;
/// How long the error state stays on screen.
pub const DEFAULT_ERROR_DISPLAY_MS: u64 = 2000;
/// Grace period between dismissing the affordance and releasing the save lock.
pub const DEFAULT_LOCK_RELEASE_MS: u64 = 100;

pub const DEFAULT_AFFORDANCE_WIDTH: f64 = 120.0;
pub const DEFAULT_AFFORDANCE_HEIGHT: f64 = 35.0;
/// Gap between the selection and the affordance.
pub const DEFAULT_AFFORDANCE_OFFSET: f64 = 10.0;
/// Minimum distance kept from the viewport edges.
pub const DEFAULT_VIEWPORT_MARGIN: f64 = 5.0;

/// Local storage quota of the host key-value store.
pub const DEFAULT_STORAGE_QUOTA_BYTES: usize = 10 * 1024 * 1024;
/// Titles longer than this are truncated in the list view.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 30;

/// Top-level configuration container.
///
/// Every knob is cosmetic or a timing-compatibility setting; none of them
/// affects what gets persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SaverConfig {
    pub timing: TimingSettings,
    pub layout: LayoutSettings,
    pub storage: StorageSettings,
}

impl SaverConfig {
    /// Builds a config from defaults overridden by `HIGHLIGHT_SAVER_*` variables.
    ///
    /// Variables that are missing or fail to parse keep their default.
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            timing: TimingSettings {
                debounce_ms: env_parse("HIGHLIGHT_SAVER_DEBOUNCE_MS", d.timing.debounce_ms),
                success_display_ms: env_parse(
                    "HIGHLIGHT_SAVER_SUCCESS_DISPLAY_MS",
                    d.timing.success_display_ms,
                ),
                error_display_ms: env_parse(
                    "HIGHLIGHT_SAVER_ERROR_DISPLAY_MS",
                    d.timing.error_display_ms,
                ),
                lock_release_ms: env_parse(
                    "HIGHLIGHT_SAVER_LOCK_RELEASE_MS",
                    d.timing.lock_release_ms,
                ),
            },
            layout: LayoutSettings {
                width: env_parse("HIGHLIGHT_SAVER_AFFORDANCE_WIDTH", d.layout.width),
                height: env_parse("HIGHLIGHT_SAVER_AFFORDANCE_HEIGHT", d.layout.height),
                offset: env_parse("HIGHLIGHT_SAVER_AFFORDANCE_OFFSET", d.layout.offset),
                margin: env_parse("HIGHLIGHT_SAVER_VIEWPORT_MARGIN", d.layout.margin),
            },
            storage: StorageSettings {
                quota_bytes: env_parse("HIGHLIGHT_SAVER_QUOTA_BYTES", d.storage.quota_bytes),
                title_max_chars: env_parse(
                    "HIGHLIGHT_SAVER_TITLE_MAX_CHARS",
                    d.storage.title_max_chars,
                ),
            },
        }
    }
}

/// Parses an environment variable, falling back to `default`.
pub fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Debounce and display delays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingSettings {
    pub debounce_ms: u64,
    pub success_display_ms: u64,
    pub error_display_ms: u64,
    pub lock_release_ms: u64,
}

impl TimingSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }

    pub fn error_display(&self) -> Duration {
        Duration::from_millis(self.error_display_ms)
    }

    pub fn lock_release(&self) -> Duration {
        Duration::from_millis(self.lock_release_ms)
    }
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            success_display_ms: DEFAULT_SUCCESS_DISPLAY_MS,
            error_display_ms: DEFAULT_ERROR_DISPLAY_MS,
            lock_release_ms: DEFAULT_LOCK_RELEASE_MS,
        }
    }
}

/// Affordance geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutSettings {
    pub width: f64,
    pub height: f64,
    pub offset: f64,
    pub margin: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_AFFORDANCE_WIDTH,
            height: DEFAULT_AFFORDANCE_HEIGHT,
            offset: DEFAULT_AFFORDANCE_OFFSET,
            margin: DEFAULT_VIEWPORT_MARGIN,
        }
    }
}

/// Storage limits and list presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    pub quota_bytes: usize,
    pub title_max_chars: usize,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            quota_bytes: DEFAULT_STORAGE_QUOTA_BYTES,
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
        }
    }
}

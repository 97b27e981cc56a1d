// Platform-specific storage locations.
//
// Selected at compile time with `cfg(target_os)`.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Directory name used under the OS data location.
pub const APP_DIR_NAME: &str = "highlight-saver";

/// Returns the directory holding the local highlight store.
///
/// - **Linux**: `$XDG_DATA_HOME/highlight-saver` or `~/.local/share/highlight-saver`
/// - **macOS**: `~/Library/Application Support/highlight-saver`
/// - **Windows**: `%APPDATA%/highlight-saver`
/// - anything else: `./highlight-saver`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(APP_DIR_NAME)
    }
}

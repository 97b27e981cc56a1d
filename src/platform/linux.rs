// Data: $XDG_DATA_HOME/highlight-saver, falling back to ~/.local/share/highlight-saver

use std::env;
use std::path::PathBuf;

use super::APP_DIR_NAME;

pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR_NAME),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            PathBuf::from(home)
                .join(".local")
                .join("share")
                .join(APP_DIR_NAME)
        }
    }
}

// Data: ~/Library/Application Support/highlight-saver

use std::env;
use std::path::PathBuf;

use super::APP_DIR_NAME;

pub fn get_data_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
        .join("Library")
        .join("Application Support")
        .join(APP_DIR_NAME)
}

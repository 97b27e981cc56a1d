// Data: %APPDATA%/highlight-saver

use std::env;
use std::path::PathBuf;

use super::APP_DIR_NAME;

pub fn get_data_dir() -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join(APP_DIR_NAME)
}

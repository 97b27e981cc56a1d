// Highlight Saver state managers
// Managers own the stateful flows around saved highlights.

pub mod highlight_manager;
pub mod selection_watcher;
pub mod watcher_driver;

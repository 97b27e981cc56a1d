//! App Core for Highlight Saver.
//!
//! Wires the local store, the extension runtime and configuration together,
//! and attaches selection watchers to pages.

use std::path::Path;
use std::rc::Rc;

use tracing::info;

use crate::database::connection::Database;
use crate::host::{Clock, HostPage, SystemClock};
use crate::managers::highlight_manager::HighlightManager;
use crate::managers::selection_watcher::SelectionWatcher;
use crate::managers::watcher_driver::{WatcherDriver, WatcherHandle};
use crate::services::extension_runtime::{ExtensionRuntime, RuntimeHandle};
use crate::services::persistence_gateway::PersistenceGateway;
use crate::types::settings::SaverConfig;

/// Central struct holding the store and the runtime every component shares.
///
/// Single-threaded: the store connection is shared through `Rc`, matching the
/// one-task event loop the watchers run on.
pub struct App {
    pub db: Rc<Database>,
    pub runtime: ExtensionRuntime,
    pub config: SaverConfig,
}

impl App {
    /// Opens the store at `db_path` with configuration taken from the environment.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self, rusqlite::Error> {
        let db = Database::open(db_path)?;
        Ok(Self::from_database(db, SaverConfig::from_env()))
    }

    /// Opens the store in the platform data directory.
    pub fn open_default() -> Result<Self, rusqlite::Error> {
        let db = Database::open_default()?;
        Ok(Self::from_database(db, SaverConfig::from_env()))
    }

    /// In-memory store with default configuration; nothing survives the drop.
    pub fn in_memory() -> Result<Self, rusqlite::Error> {
        let db = Database::open_in_memory()?;
        Ok(Self::from_database(db, SaverConfig::default()))
    }

    pub fn from_database(db: Database, config: SaverConfig) -> Self {
        let db = Rc::new(db);
        let handle = RuntimeHandle::new();
        let runtime =
            ExtensionRuntime::new(db.clone(), handle).with_quota(config.storage.quota_bytes);
        info!(
            extension_id = %runtime.handle().id().unwrap_or_default(),
            "highlight saver ready"
        );
        Self {
            db,
            runtime,
            config,
        }
    }

    /// Handle the host uses to revoke the runtime (e.g. on extension reload).
    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle().clone()
    }

    pub fn gateway(&self) -> PersistenceGateway<ExtensionRuntime> {
        PersistenceGateway::new(self.runtime.clone())
    }

    /// The list view over the saved collection.
    pub fn highlight_manager(&self) -> HighlightManager<ExtensionRuntime> {
        HighlightManager::new(self.runtime.clone())
            .with_title_max_chars(self.config.storage.title_max_chars)
    }

    /// Builds a watcher for `page` using the given clock.
    pub fn watcher_with_clock<P: HostPage, C: Clock>(
        &self,
        page: P,
        clock: C,
    ) -> SelectionWatcher<P, ExtensionRuntime, C> {
        SelectionWatcher::new(page, self.gateway(), clock, self.config.clone())
    }

    /// Attaches a watcher to `page`. The host awaits the driver's `run()` and
    /// posts page events through the returned handle.
    pub fn attach<P: HostPage>(
        &self,
        page: P,
    ) -> (WatcherDriver<P, ExtensionRuntime, SystemClock>, WatcherHandle) {
        WatcherDriver::new(self.watcher_with_clock(page, SystemClock))
    }
}

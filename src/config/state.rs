// Application state module
// Shared per-process state handed to every connection task

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::types::Config;
use crate::storage::FileStore;

/// Application state
pub struct AppState {
    pub config: Config,
    pub store: FileStore,

    // Cached config value for fast access without locks
    pub cached_access_log: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            store: FileStore::new(config.storage.root.as_str()),
            cached_access_log: Arc::new(AtomicBool::new(config.logging.access_log)),
            config: config.clone(),
        }
    }
}

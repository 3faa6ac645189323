//! Key/value persistence for user preferences.
//!
//! Each page keeps exactly one entry (its theme), so the interface is a
//! plain string map. Backends are picked at startup by [`default_store`].

mod file;
mod local;
mod memory;

pub use file::FileStore;
pub use local::LocalStore;
pub use memory::MemoryStore;

use crate::configs::AppConfig;
use crate::error::StorageError;

pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Browser builds persist to `localStorage`; native builds to a JSON file
/// under the configured data directory. Falls back to memory when neither
/// is reachable.
pub fn default_store(config: &AppConfig) -> Box<dyn PreferenceStore> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = config;
        match LocalStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("localStorage unavailable, preferences will not persist: {}", e);
                Box::new(MemoryStore::new())
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStore::open(config.preferences_path()) {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("Preference file unavailable, preferences will not persist: {}", e);
                Box::new(MemoryStore::new())
            }
        }
    }
}

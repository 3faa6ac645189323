use web_sys::Storage;

use super::PreferenceStore;
use crate::error::StorageError;

/// `window.localStorage`. Values are stored verbatim (no JSON quoting) so
/// they stay readable by anything else on the page.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.storage.get_item(key)?)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value)?;
        Ok(())
    }
}

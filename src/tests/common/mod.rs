use crate::content::PageProfile;
use crate::page::PageController;
use crate::storage::MemoryStore;

pub fn setup() {
    // Logs are captured per test; repeated init is ignored.
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A page backed by `store`, so tests can reload from the same storage.
pub fn page_with(profile: &'static PageProfile, store: &MemoryStore) -> PageController {
    setup();
    PageController::new(profile, Box::new(store.clone()))
}

pub fn page(profile: &'static PageProfile) -> PageController {
    page_with(profile, &MemoryStore::new())
}

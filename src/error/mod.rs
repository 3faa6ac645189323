mod platform;
mod storage;

pub use platform::PlatformError;
pub use storage::StorageError;

mod components;
mod configs;
mod error;
mod platform;
mod routes;
#[cfg(test)]
mod tests;
mod views;
pub mod content;
pub mod page;
pub mod quiz;
pub mod scroll;
pub mod search;
pub mod storage;
pub mod utils;

pub use crate::configs::AppConfig;
pub use crate::error::{ PlatformError, StorageError };
pub use crate::routes::*;

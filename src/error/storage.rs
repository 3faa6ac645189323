use std::fmt::{ Display, Formatter };
use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum StorageError {
    Unavailable(String),
    IO(String),
    Serialization(String),
    Js(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
            StorageError::IO(msg) => write!(f, "I/O Error: {}", msg),
            StorageError::Serialization(msg) => write!(f, "Serialization Error: {}", msg),
            StorageError::Js(msg) => write!(f, "JavaScript Error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(error: std::io::Error) -> Self {
        StorageError::IO(error.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(error: serde_json::Error) -> Self {
        StorageError::Serialization(error.to_string())
    }
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

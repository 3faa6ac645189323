use std::fmt::{ Display, Formatter };
use wasm_bindgen::JsValue;

#[derive(Debug)]
pub enum PlatformError {
    Missing(String),
    Js(String),
}

impl Display for PlatformError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformError::Missing(what) => write!(f, "Missing Browser API: {}", what),
            PlatformError::Js(msg) => write!(f, "JavaScript Error: {}", msg),
        }
    }
}

impl std::error::Error for PlatformError {}

impl From<JsValue> for PlatformError {
    fn from(value: JsValue) -> Self {
        PlatformError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

//! Frontend error types.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failure to load the board from the remote endpoint
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no browser window available")]
    NoWindow,

    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("invalid board payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Readable text for a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

//! API Errors
//!
//! Failure taxonomy for calls to the forms backend.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be built (no window, bad URL, FormData failure).
    #[error("could not build request: {0}")]
    Request(String),

    /// The transport failed before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("server responded with {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// The response body was not what we expected.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn request(value: JsValue) -> Self {
        Self::Request(js_message(&value))
    }

    pub fn network(value: JsValue) -> Self {
        Self::Network(js_message(&value))
    }

    pub fn decode(value: JsValue) -> Self {
        Self::Decode(js_message(&value))
    }
}

/// Best-effort text of a thrown JS value.
fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl From<serde_wasm_bindgen::Error> for ApiError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

//! Backend Command Wrappers
//!
//! Frontend bindings to the forms backend over `fetch`, organized by domain.

mod forms;

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

use crate::error::ApiError;

// Re-export all public items
pub use forms::*;

/// Send a request and decode a 2xx JSON body.
async fn fetch_json<T: DeserializeOwned>(request: &Request) -> Result<T, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Request("no window".to_string()))?;

    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(ApiError::network)?;
    let response: Response = value.dyn_into().map_err(ApiError::network)?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    let body = JsFuture::from(response.json().map_err(ApiError::decode)?)
        .await
        .map_err(ApiError::decode)?;
    Ok(serde_wasm_bindgen::from_value(body)?)
}

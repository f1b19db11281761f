//! Form Commands
//!
//! Creation and retrieval endpoints.

use wasm_bindgen::JsValue;
use web_sys::{File, FormData, Request, RequestInit};

use super::fetch_json;
use crate::config::{AppConfig, GET_FORMS_PATH, SUBMIT_FORM_PATH};
use crate::draft::{MultipartPayload, PartSink};
use crate::error::ApiError;
use crate::models::{FormRecord, SubmitResponse};

/// POST the payload as `multipart/form-data`.
///
/// The browser derives the content type (with boundary) from the `FormData` body,
/// so no header is set by hand.
pub async fn submit_form(config: &AppConfig, payload: &MultipartPayload<File>) -> Result<SubmitResponse, ApiError> {
    let body = to_form_data(payload)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&body);

    let url = config.endpoint(SUBMIT_FORM_PATH);
    let request = Request::new_with_str_and_init(&url, &init).map_err(ApiError::request)?;
    fetch_json(&request).await
}

/// GET every stored record, in backend order.
pub async fn list_forms(config: &AppConfig) -> Result<Vec<FormRecord>, ApiError> {
    let init = RequestInit::new();
    init.set_method("GET");

    let url = config.endpoint(GET_FORMS_PATH);
    let request = Request::new_with_str_and_init(&url, &init).map_err(ApiError::request)?;
    request.headers().set("Accept", "application/json").map_err(ApiError::request)?;
    fetch_json(&request).await
}

fn to_form_data(payload: &MultipartPayload<File>) -> Result<FormData, ApiError> {
    let mut sink = FormDataSink(FormData::new().map_err(ApiError::request)?);
    payload.write_to(&mut sink).map_err(ApiError::request)?;
    Ok(sink.0)
}

struct FormDataSink(FormData);

impl PartSink<File> for FormDataSink {
    type Error = JsValue;

    fn append_text(&mut self, name: &str, value: &str) -> Result<(), JsValue> {
        self.0.append_with_str(name, value)
    }

    fn append_file(&mut self, name: &str, file: &File) -> Result<(), JsValue> {
        self.0.append_with_blob_and_filename(name, file, &file.name())
    }
}

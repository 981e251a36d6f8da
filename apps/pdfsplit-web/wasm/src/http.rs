//! Calls to the splitter backend
//!
//! Both endpoints are plain CORS `fetch` requests. Any rejected fetch or
//! non-2xx status is reported as a `SplitterError`.

use crate::console::describe;
use pdfsplit_core::{ApiConfig, ExtractRequest, SplitterError, UploadResponse, UPLOAD_FIELD};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

/// `POST /upload` with the file as multipart form data
pub async fn upload_file(config: &ApiConfig, file: &File) -> Result<UploadResponse, SplitterError> {
    let form = FormData::new().map_err(transport)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(transport)?;

    // No Content-Type header: the browser adds the multipart boundary itself
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(&config.upload_url(), &opts).map_err(transport)?;
    let response = send(&request).await?;

    let json = JsFuture::from(response.json().map_err(transport)?)
        .await
        .map_err(transport)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| SplitterError::Serialization(e.to_string()))
}

/// `POST /extract-pages`, returning the extracted PDF bytes
pub async fn extract_pages(
    config: &ApiConfig,
    body: &ExtractRequest,
) -> Result<Vec<u8>, SplitterError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body.to_json()?));

    let request =
        Request::new_with_str_and_init(&config.extract_url(), &opts).map_err(transport)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(transport)?;

    let response = send(&request).await?;
    let buffer = JsFuture::from(response.array_buffer().map_err(transport)?)
        .await
        .map_err(transport)?;

    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

async fn send(request: &Request) -> Result<Response, SplitterError> {
    let window = web_sys::window().ok_or_else(|| SplitterError::Transport("No window".into()))?;

    let response = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(transport)?;
    let response: Response = response.dyn_into().map_err(transport)?;

    if !response.ok() {
        return Err(SplitterError::HttpStatus(response.status()));
    }
    Ok(response)
}

fn transport(value: JsValue) -> SplitterError {
    SplitterError::Transport(describe(&value))
}

//! Fetch Helpers
//!
//! Thin wrappers over `window.fetch` with form-encoded bodies.

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

use crate::error::{AppError, Result};

/// Build a `FormData` body from name/value pairs
pub fn form(fields: &[(&str, &str)]) -> Result<FormData> {
    let form = FormData::new().map_err(AppError::request)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(AppError::request)?;
    }
    Ok(form)
}

/// GET `url` and decode the JSON body
pub async fn get_json<R: DeserializeOwned>(url: &str) -> Result<R> {
    let response = send(url, "GET", None).await?;
    read_json(response).await
}

/// POST a form to `url` and decode the JSON body
pub async fn post_form_json<R: DeserializeOwned>(url: &str, body: &FormData) -> Result<R> {
    let response = send(url, "POST", Some(body)).await?;
    read_json(response).await
}

/// POST a form to `url`, ignoring the body
pub async fn post_form(url: &str, body: &FormData) -> Result<()> {
    send(url, "POST", Some(body)).await.map(|_| ())
}

async fn send(url: &str, method: &str, body: Option<&FormData>) -> Result<Response> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(form) = body {
        // Content-Type (multipart boundary) is filled in by the browser
        opts.set_body(form);
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(AppError::request)?;

    let window = web_sys::window().ok_or(AppError::NoWindow)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(AppError::request)?;

    let resp: Response = resp_value.dyn_into().map_err(AppError::request)?;

    if !resp.ok() {
        return Err(AppError::Http { status: resp.status() });
    }
    Ok(resp)
}

async fn read_json<R: DeserializeOwned>(resp: Response) -> Result<R> {
    let promise = resp.json().map_err(|e| AppError::Decode(format!("{:?}", e)))?;
    let json = JsFuture::from(promise)
        .await
        .map_err(|e| AppError::Decode(format!("{:?}", e)))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| AppError::Decode(e.to_string()))
}

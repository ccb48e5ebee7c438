//! Error Types
//!
//! Failures from the browser, the LIFF SDK and the special move API.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// No global `window` (not running in a browser)
    #[error("No window")]
    NoWindow,

    /// localStorage unavailable or an access threw
    #[error("Storage error: {0}")]
    Storage(String),

    /// LIFF SDK call failed
    #[error("LIFF error: {0}")]
    Sdk(String),

    /// Logged in, but the SDK returned no ID token
    #[error("ID token unavailable")]
    MissingToken,

    /// Request could not be built or the fetch itself rejected
    #[error("Request failed: {0}")]
    Request(String),

    /// Server answered with a non-2xx status
    #[error("HTTP error: {status}")]
    Http { status: u16 },

    /// Response body was not the expected JSON
    #[error("Decode failed: {0}")]
    Decode(String),
}

impl AppError {
    pub(crate) fn request(err: JsValue) -> Self {
        Self::Request(format!("{:?}", err))
    }

    pub(crate) fn sdk(err: JsValue) -> Self {
        Self::Sdk(format!("{:?}", err))
    }

    pub(crate) fn storage(err: JsValue) -> Self {
        Self::Storage(format!("{:?}", err))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

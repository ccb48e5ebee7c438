//! LIFF SDK Bindings
//!
//! Frontend bindings to the global `liff` object loaded by index.html.

use async_trait::async_trait;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::bootstrap::IdentityProvider;
use crate::error::{self, AppError};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = liff, js_name = init, catch)]
    async fn liff_init(config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = liff, js_name = isLoggedIn)]
    fn liff_is_logged_in() -> bool;

    #[wasm_bindgen(js_namespace = liff, js_name = login)]
    fn liff_login();

    #[wasm_bindgen(js_namespace = liff, js_name = getIDToken)]
    fn liff_get_id_token() -> Option<String>;
}

#[derive(Serialize)]
struct InitArgs<'a> {
    #[serde(rename = "liffId")]
    liff_id: &'a str,
}

/// The real LIFF SDK
#[derive(Debug, Clone, Copy, Default)]
pub struct LiffIdentity;

#[async_trait(?Send)]
impl IdentityProvider for LiffIdentity {
    async fn init(&self, app_id: &str) -> error::Result<()> {
        let js_args = serde_wasm_bindgen::to_value(&InitArgs { liff_id: app_id })
            .map_err(|e| AppError::Sdk(e.to_string()))?;
        liff_init(js_args).await.map_err(AppError::sdk)?;
        Ok(())
    }

    fn is_logged_in(&self) -> bool {
        liff_is_logged_in()
    }

    fn login(&self) {
        liff_login();
    }

    fn id_token(&self) -> Option<String> {
        liff_get_id_token()
    }
}

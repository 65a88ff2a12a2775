//! Browser Storage
//!
//! `window.localStorage` as a `KeyValueStore`. The handle is looked up on every
//! call so the type carries no JS objects and stays `Send + Sync` for signals.

use legal_core::{CoreError, KeyValueStore, Result};
use wasm_bindgen::JsValue;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

fn js_error(e: JsValue) -> CoreError {
    CoreError::Storage(format!("{e:?}"))
}

impl BrowserStorage {
    fn local() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| CoreError::Storage("no browser window".into()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| CoreError::Storage("localStorage is disabled".into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::local()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::local()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::local()?.remove_item(key).map_err(js_error)
    }
}

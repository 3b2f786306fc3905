//! `window.localStorage` as a configuration store.

use formwright::{ConfigStore, FormError, Result};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// A [`ConfigStore`] backed by the page's `localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Opens the current window's `localStorage`.
    ///
    /// Fails outside a browser window, or when storage is disabled (some
    /// private browsing modes, sandboxed iframes).
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| FormError::store("no window available"))?;
        let storage = window
            .local_storage()
            .map_err(store_error)?
            .ok_or_else(|| FormError::store("localStorage is unavailable"))?;
        Ok(Self { storage })
    }
}

impl ConfigStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(store_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(store_error)
    }
}

fn store_error(err: JsValue) -> FormError {
    FormError::store(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

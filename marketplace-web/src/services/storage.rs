//! `window.localStorage` as a [`KeyValueStore`].

use std::rc::Rc;

use lib_core::store::{KeyValueStore, MemoryStore};
use lib_core::{AppError, Result};
use wasm_bindgen::JsValue;
use web_sys::Storage;

#[derive(Clone)]
pub struct BrowserStore {
    storage: Storage,
}

impl BrowserStore {
    /// The page's localStorage.
    ///
    /// # Errors
    ///
    /// [`AppError::Storage`] when there is no window or the browser refuses
    /// access (some private browsing modes).
    pub fn local() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| AppError::Storage("no window available".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(storage_error)?
            .ok_or_else(|| AppError::Storage("localStorage is unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(storage_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(storage_error)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(storage_error)
    }
}

fn storage_error(err: JsValue) -> AppError {
    AppError::Storage(format!("{err:?}"))
}

/// localStorage when available, otherwise an in-memory store for this page load.
pub fn open_store() -> Rc<dyn KeyValueStore> {
    match BrowserStore::local() {
        Ok(store) => Rc::new(store),
        Err(e) => {
            log::warn!("Falling back to in-memory settings: {}", e);
            Rc::new(MemoryStore::new())
        }
    }
}

//! `localStorage` adapter.

use crate::storage::{KeyValueStorage, StorageError};
use wasm_bindgen::JsValue;

/// Handle to `window.localStorage`. `None` when the browser refuses access.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let inner = web_sys::window().and_then(|w| match w.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {}", describe(&e));
                None
            }
        });
        Self { inner }
    }

    fn handle(&self) -> Result<&web_sys::Storage, StorageError> {
        self.inner.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.handle()?.get_item(key).map_err(|e| StorageError::Read(describe(&e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.handle()?.set_item(key, value).map_err(|e| StorageError::Write(describe(&e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.handle()?.remove_item(key).map_err(|e| StorageError::Write(describe(&e)))
    }
}

/// Best-effort text for a thrown JS value (`DOMException` names, strings).
pub(crate) fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("name"))
                .ok()
                .and_then(|name| name.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

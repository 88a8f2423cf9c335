//! Browser Storage Slot
//!
//! `SlotStorage` backed by `window.localStorage`.

use todo_core::{DomainError, DomainResult, SlotStorage};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> DomainResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| DomainError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Storage("localStorage unavailable".to_string()))
    }
}

impl SlotStorage for LocalStorage {
    fn read(&self, key: &str) -> DomainResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn write(&self, key: &str, value: &str) -> DomainResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> DomainError {
    DomainError::Storage(format!("{:?}", err))
}

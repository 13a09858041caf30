//! Browser Platform Bindings
//!
//! `localStorage` behind `FlagStore` and browser timers behind `Clock`.

use std::time::Duration;

use async_trait::async_trait;
use wasm_bindgen::JsValue;

use dashboard_core::{Clock, FlagStore, StorageError};

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFlagStore;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(js_error)?
        .ok_or(StorageError::Unavailable)
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::Operation(format!("{:?}", value))
}

#[async_trait(?Send)]
impl FlagStore for LocalFlagStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        local_storage()?.remove_item(key).map_err(js_error)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

#[async_trait(?Send)]
impl Clock for BrowserClock {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser `localStorage` backend.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::store::KeyValueStore;

/// Error reported by the browser storage API.
#[derive(Debug, thiserror::Error)]
#[error("web storage: {0}")]
pub struct WebStorageError(String);

impl From<JsValue> for WebStorageError {
    fn from(value: JsValue) -> Self {
        Self(format!("{value:?}"))
    }
}

/// [`KeyValueStore`] over a `web_sys::Storage`.
#[derive(Clone, Debug)]
pub struct WebStorage {
    storage: Storage,
}

impl WebStorage {
    /// Wraps an existing storage object.
    #[must_use]
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Opens `window.localStorage`.
    pub fn local() -> Result<Self, WebStorageError> {
        let window =
            web_sys::window().ok_or_else(|| WebStorageError("no global window".to_owned()))?;
        let storage = window
            .local_storage()?
            .ok_or_else(|| WebStorageError("localStorage is unavailable".to_owned()))?;
        Ok(Self::new(storage))
    }
}

impl KeyValueStore for WebStorage {
    type Error = WebStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.storage.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        Ok(self.storage.set_item(key, value)?)
    }
}

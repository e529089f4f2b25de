//! `Bot API 6.9+` Cloud storage scoped to the bot and the user.

use std::collections::HashMap;

use js_sys::Array;
use serde::de::DeserializeOwned;
use tg_webapp_data_model::{
    Feature,
    storage::{validate_key, validate_keys, validate_value},
};
use wasm_bindgen::JsValue;

use crate::{
    Error, Result, WebApp,
    js::{callback2, from_js},
    sys,
};

/// Cloud storage with up to 1024 keys per user.
///
/// Keys are 1-128 characters of `A-Z`, `a-z`, `0-9`, `_` and `-`. Values are up to 4096
/// characters.
#[derive(Debug, Clone)]
pub struct CloudStorage {
    /// Object owned by the client.
    raw: sys::CloudStorage,
}

impl CloudStorage {
    /// Store `value` under `key`. Resolves to `true` if it was stored.
    ///
    /// # Errors
    ///
    /// Fails on invalid key or value, or if the client reports an error.
    pub async fn set_item(&self, key: &str, value: &str) -> Result<bool> {
        validate_key(key)?;
        validate_value(value)?;
        call(|function| self.raw.set_item(key, value, function)).await
    }

    /// Value under `key`. Missing keys resolve to an empty string.
    ///
    /// # Errors
    ///
    /// Fails on invalid key or if the client reports an error.
    pub async fn get_item(&self, key: &str) -> Result<String> {
        validate_key(key)?;
        call(|function| self.raw.get_item(key, function)).await
    }

    /// Values under `keys`.
    ///
    /// # Errors
    ///
    /// Fails on invalid keys or if the client reports an error.
    pub async fn get_items(&self, keys: &[&str]) -> Result<HashMap<String, String>> {
        validate_keys(keys.iter().copied())?;
        let keys = to_array(keys);
        call(|function| self.raw.get_items(&keys, function)).await
    }

    /// Remove `key`. Resolves to `true` if it was removed.
    ///
    /// # Errors
    ///
    /// Fails on invalid key or if the client reports an error.
    pub async fn remove_item(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        call(|function| self.raw.remove_item(key, function)).await
    }

    /// Remove `keys`. Resolves to `true` if they were removed.
    ///
    /// # Errors
    ///
    /// Fails on invalid keys or if the client reports an error.
    pub async fn remove_items(&self, keys: &[&str]) -> Result<bool> {
        validate_keys(keys.iter().copied())?;
        let keys = to_array(keys);
        call(|function| self.raw.remove_items(&keys, function)).await
    }

    /// All stored keys.
    ///
    /// # Errors
    ///
    /// Fails if the client reports an error.
    pub async fn get_keys(&self) -> Result<Vec<String>> {
        call(|function| self.raw.get_keys(function)).await
    }
}

impl WebApp {
    /// `Bot API 6.9+` Cloud storage.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn cloud_storage(&self) -> Result<CloudStorage> {
        self.ensure(Feature::CloudStorage)?;
        Ok(CloudStorage {
            raw: self.raw().cloud_storage(),
        })
    }
}

/// Invoke a storage method with an `(error, result)` callback and wait for the result.
async fn call<T: DeserializeOwned + 'static>(
    invoke: impl FnOnce(&JsValue) -> Result<(), JsValue>,
) -> Result<T> {
    let (function, result) = callback2(|error: JsValue, value: JsValue| {
        if !error.is_null() && !error.is_undefined() {
            let message = error.as_string().unwrap_or_else(|| format!("{error:?}"));
            return Err(Error::Storage(message));
        }
        from_js(&value)
    });
    invoke(&function).map_err(|e| Error::host(&e))?;
    result.wait().await?
}

/// Build a JS array of strings.
fn to_array(keys: &[&str]) -> Array {
    keys.iter().map(|key| JsValue::from_str(key)).collect()
}

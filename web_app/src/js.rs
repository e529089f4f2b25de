//! Glue between Rust values and JS values.
//!
//! Values cross the boundary as JSON text, the same way the client itself passes event payloads.

use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::oneshot;
use wasm_bindgen::{JsCast as _, JsValue, closure::Closure};

use crate::{Error, Result};

impl Error {
    /// Wrap an exception thrown by the client.
    pub(crate) fn host(exception: &JsValue) -> Self {
        let message = exception
            .dyn_ref::<js_sys::Error>()
            .map(|error| String::from(error.message()))
            .or_else(|| exception.as_string())
            .unwrap_or_else(|| format!("{exception:?}"));
        Self::Host(message)
    }
}

/// Decode a value received from the client.
///
/// `undefined` is treated as `null`, so payload-less events decode into unit structs.
pub(crate) fn from_js<T: DeserializeOwned>(value: &JsValue) -> Result<T> {
    if value.is_undefined() || value.is_null() {
        return decode("null");
    }
    let json = js_sys::JSON::stringify(value).map_err(|e| Error::host(&e))?;
    decode(&String::from(json))
}

/// Encode a value to be passed to the client.
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(|e| Error::host(&e))
}

/// Decode JSON text.
fn decode<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(Into::into)
}

/// Value which will be produced by a one-shot callback.
#[derive(Debug)]
pub(crate) struct Pending<T>(oneshot::Receiver<T>);

impl<T> Pending<T> {
    /// Wait for the client to call the callback.
    ///
    /// Functions made by [`callback()`] stay alive until called, so this never resolves if the
    /// client skips the call.
    pub(crate) async fn wait(self) -> Result<T> {
        self.0.await.map_err(|_recv_error| Error::CallbackDropped)
    }
}

/// Create a JS function which passes `map(argument)` to the returned [`Pending`] on the first
/// call.
pub(crate) fn callback<T: 'static>(
    map: impl FnOnce(JsValue) -> T + 'static,
) -> (JsValue, Pending<T>) {
    let (sender, receiver) = oneshot::channel();
    let function = Closure::once_into_js(move |arg: JsValue| deliver(sender, map(arg)));
    (function, Pending(receiver))
}

/// Same as [`callback()`] for callbacks called with two arguments.
pub(crate) fn callback2<T: 'static>(
    map: impl FnOnce(JsValue, JsValue) -> T + 'static,
) -> (JsValue, Pending<T>) {
    let (sender, receiver) = oneshot::channel();
    let function = Closure::once_into_js(move |first: JsValue, second: JsValue| {
        deliver(sender, map(first, second));
    });
    (function, Pending(receiver))
}

/// Send the callback result to the waiting side.
fn deliver<T>(sender: oneshot::Sender<T>, value: T) {
    if sender.send(value).is_err() {
        tracing::debug!("Callback fired after its result was abandoned");
    }
}

/// Read a boolean argument of a callback. Anything but `true` counts as `false`.
pub(crate) fn flag(value: &JsValue) -> bool {
    value.as_bool().unwrap_or(false)
}

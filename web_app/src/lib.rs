//! Rust bindings for `window.Telegram.WebApp`, the object injected into Mini Apps by
//! <https://telegram.org/js/telegram-web-app.js>.
//!
//! [`web_app()`] returns a typed handle. Its methods check that the client supports the called
//! member and validate parameters the same way the client does, so misuse is reported as
//! [`Error`] instead of an exception on the JS side. Methods taking a callback in JS are exposed
//! as futures resolving once.
//!
//! Raw declarations are available in [`sys`] for members not covered by the wrappers.

pub mod biometric;
pub mod button;
pub mod dialog;
pub mod event;
pub mod location;
pub mod sensor;
pub mod storage;
pub mod sys;

mod app;
mod js;

pub use app::{WebApp, web_app};
pub use event::{EventTarget, Subscription};
pub use tg_webapp_data_model as data_model;

/// Error while talking to the Telegram client.
#[derive(Debug, Clone, thiserror::Error, displaydoc::Display)]
pub enum Error {
    /// No `window` found, not running in a browser
    NoWindow,
    /// `window.Telegram.WebApp` is missing, is `telegram-web-app.js` loaded?
    NotLoaded,
    /// Client rejected the call: {0}
    Host(String),
    /// Invalid parameters or data: {0}
    Model(#[from] tg_webapp_data_model::Error),
    /// Failed to convert value: {0}
    Serialization(String),
    /// Callback was released without being called, e.g. the QR scanner went away
    CallbackDropped,
    /// Cloud storage request failed: {0}
    Storage(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

/// Result of a call to the Telegram client.
pub type Result<T, E = Error> = core::result::Result<T, E>;

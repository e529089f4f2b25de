//! Native popups and permission requests.
//!
//! Every method here resolves once the user answers. The client may call back either with the
//! bare answer or with the same object it emits as an event, both are accepted.

use std::{cell::RefCell, rc::Rc};

use serde::Deserialize;
use tg_webapp_data_model::{
    Feature,
    event::{ContactRequested, ContactStatus, PopupClosed, ScanQrPopupClosed},
    popup::{PopupParams, ScanQrPopupParams},
};
use tokio::sync::oneshot;
use wasm_bindgen::{JsValue, closure::Closure};

use crate::{
    Error, Result, WebApp,
    js::{Pending, callback, callback2, flag, from_js, to_js},
};

/// Argument of the `showPopup` callback.
#[derive(Deserialize)]
#[serde(untagged)]
enum PopupAnswer {
    /// Id of the pressed button.
    ButtonId(Option<String>),
    /// `popupClosed` payload.
    Event(PopupClosed),
}

impl From<PopupAnswer> for Option<String> {
    fn from(answer: PopupAnswer) -> Self {
        match answer {
            PopupAnswer::ButtonId(id) => id,
            PopupAnswer::Event(event) => event.button_id,
        }
    }
}

/// Decode the `showPopup` callback argument. Empty id means no button was pressed.
fn pressed_button(value: &JsValue) -> Result<Option<String>> {
    let answer: PopupAnswer = from_js(value)?;
    Ok(Option::<String>::from(answer).filter(|id| !id.is_empty()))
}

impl WebApp {
    /// `Bot API 6.2+` Show a native popup. Resolves to the id of the pressed button or `None` if
    /// the popup was dismissed.
    ///
    /// # Errors
    ///
    /// Fails on older clients, on invalid parameters or if the client rejects the call.
    pub async fn show_popup(&self, params: &PopupParams) -> Result<Option<String>> {
        self.ensure(Feature::Popup)?;
        params.validate()?;
        let (function, button) = callback(|button: JsValue| pressed_button(&button));
        self.raw()
            .show_popup(&to_js(params)?, &function)
            .map_err(|e| Error::host(&e))?;
        button.wait().await?
    }

    /// `Bot API 6.2+` Show `message` with a single close button.
    ///
    /// # Errors
    ///
    /// Fails on older clients or if the client rejects the call.
    pub async fn show_alert(&self, message: &str) -> Result<()> {
        self.ensure(Feature::Popup)?;
        PopupParams::new(message).validate()?;
        let (function, closed) = callback(|_: JsValue| ());
        self.raw()
            .show_alert(message, &function)
            .map_err(|e| Error::host(&e))?;
        closed.wait().await
    }

    /// `Bot API 6.2+` Show `message` with 'OK' and 'Cancel' buttons. Resolves to `true` if 'OK'
    /// was pressed.
    ///
    /// # Errors
    ///
    /// Fails on older clients or if the client rejects the call.
    pub async fn show_confirm(&self, message: &str) -> Result<bool> {
        self.ensure(Feature::Popup)?;
        PopupParams::new(message).validate()?;
        let (function, confirmed) = callback(|ok: JsValue| flag(&ok));
        self.raw()
            .show_confirm(message, &function)
            .map_err(|e| Error::host(&e))?;
        confirmed.wait().await
    }

    /// `Bot API 6.4+` Scan a QR code and close the scanner.
    ///
    /// Resolves to the text of the first code caught, or `None` if the user closed the scanner.
    /// Detecting the close requires `7.7+`, older clients resolve only after a scan.
    ///
    /// # Errors
    ///
    /// Fails on older clients, on invalid parameters or if the client rejects the call.
    pub async fn scan_qr(&self, params: &ScanQrPopupParams) -> Result<Option<String>> {
        self.ensure(Feature::ScanQrPopup)?;
        params.validate()?;

        let (sender, receiver) = oneshot::channel();
        let sender = Rc::new(RefCell::new(Some(sender)));
        let on_text = {
            let sender = Rc::clone(&sender);
            Closure::<dyn FnMut(JsValue) -> bool>::new(move |data: JsValue| {
                if let Some(sender) = sender.borrow_mut().take() {
                    let _ignored = sender.send(data.as_string());
                }
                true
            })
        };
        let _closed = self.subscribe(move |_: ScanQrPopupClosed| {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ignored = sender.send(None);
            }
        });

        self.raw()
            .show_scan_qr_popup(&to_js(params)?, on_text.as_ref())
            .map_err(|e| Error::host(&e))?;
        let text = receiver.await.map_err(|_recv_error| Error::CallbackDropped)?;
        drop(on_text);
        Ok(text)
    }

    /// `Bot API 6.4+` Close the QR scanner opened with [`WebApp::scan_qr()`].
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn close_scan_qr_popup(&self) -> Result<()> {
        self.ensure(Feature::ScanQrPopup)?;
        self.raw().close_scan_qr_popup();
        Ok(())
    }

    /// `Bot API 6.4+` Read text from the clipboard.
    ///
    /// Resolves to `None` if the Mini App has no access to the clipboard. Only available for
    /// Mini Apps launched from the attachment menu, in response to a user interaction.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub async fn read_text_from_clipboard(&self) -> Result<Option<String>> {
        self.ensure(Feature::Clipboard)?;
        let (function, text) = callback(|text: JsValue| text.as_string());
        self.raw().read_text_from_clipboard(&function);
        text.wait().await
    }

    /// `Bot API 6.9+` Ask for permission to write to the user. Resolves to `true` if granted.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub async fn request_write_access(&self) -> Result<bool> {
        self.ensure(Feature::WriteAccess)?;
        let (function, granted) = callback(|granted: JsValue| flag(&granted));
        self.raw().request_write_access(&function);
        granted.wait().await
    }

    /// `Bot API 6.9+` Ask the user to share their phone number with the bot.
    ///
    /// # Errors
    ///
    /// Fails on older clients or if the client passes a malformed response.
    pub async fn request_contact(&self) -> Result<ContactRequested> {
        self.ensure(Feature::Contact)?;
        let (function, contact): (_, Pending<Result<ContactRequested>>) =
            callback2(|shared: JsValue, event: JsValue| {
                if event.is_object() {
                    return from_js(&event);
                }
                let status = if flag(&shared) {
                    ContactStatus::Sent
                } else {
                    ContactStatus::Cancelled
                };
                Ok(ContactRequested {
                    status,
                    response: None,
                })
            });
        self.raw().request_contact(&function);
        contact.wait().await?
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "it's ok in tests")]

    use super::*;

    fn decode(json: &str) -> Option<String> {
        let answer: PopupAnswer = serde_json::from_str(json).expect("Failed to decode answer");
        answer.into()
    }

    #[test]
    fn popup_answer_accepts_bare_id_and_event() {
        assert_eq!(decode(r#""ok""#).as_deref(), Some("ok"));
        assert_eq!(decode("null"), None);
        assert_eq!(decode(r#"{"button_id":"delete"}"#).as_deref(), Some("delete"));
        assert_eq!(decode(r#"{"button_id":null}"#), None);
    }
}

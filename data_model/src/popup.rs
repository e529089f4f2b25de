//! Native popups: parameters sent to the client and limits it enforces on them.

use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

use crate::{Result, char_len, ensure_param};

/// Maximal length of a popup title, button id, button text and QR popup text.
pub const MAX_SHORT_TEXT_LEN: usize = 64;
/// Maximal length of a popup message.
pub const MAX_MESSAGE_LEN: usize = 256;
/// Maximal number of buttons in a popup.
pub const MAX_BUTTONS: usize = 3;

/// Native popup shown by `showPopup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupParams {
    /// Text to be displayed in the popup title, 0-64 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Message to be displayed in the body of the popup, 1-256 characters.
    pub message: String,
    /// Buttons to be displayed in the popup, 1-3 buttons.
    ///
    /// Left empty, the client shows a single `close` button.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<PopupButton>,
}

impl PopupParams {
    /// Popup with `message` and a default `close` button.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            buttons: Vec::new(),
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a button.
    #[must_use]
    pub fn with_button(mut self, button: PopupButton) -> Self {
        self.buttons.push(button);
        self
    }

    /// Check the limits the client enforces before showing the popup.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidParam`](crate::Error::InvalidParam) naming the first violated
    /// limit.
    pub fn validate(&self) -> Result<()> {
        ensure_param(
            self.title
                .as_deref()
                .is_none_or(|title| char_len(title.trim()) <= MAX_SHORT_TEXT_LEN),
            "title",
            "must be at most 64 characters",
        )?;

        let message_len = char_len(self.message.trim());
        ensure_param(message_len > 0, "message", "must not be empty")?;
        ensure_param(
            message_len <= MAX_MESSAGE_LEN,
            "message",
            "must be at most 256 characters",
        )?;

        ensure_param(
            self.buttons.len() <= MAX_BUTTONS,
            "buttons",
            "must contain at most 3 buttons",
        )?;
        self.buttons.iter().try_for_each(PopupButton::validate)
    }
}

/// Button of a native popup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupButton {
    /// Identifier of the button, 0-64 characters. Empty by default.
    ///
    /// Returned in the callback and the `popupClosed` event when the button is pressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Type of the button. [`PopupButtonType::Default`] if not set.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PopupButtonType>,
    /// Text on the button, 0-64 characters.
    ///
    /// Required for `default` and `destructive` buttons, irrelevant for others.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl PopupButton {
    /// Button with the default style.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            kind: Some(PopupButtonType::Default),
            text: Some(text.into()),
        }
    }

    /// Button indicating a destructive action (e.g. "Remove", "Delete").
    #[must_use]
    pub fn destructive(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: Some(PopupButtonType::Destructive),
            ..Self::new(id, text)
        }
    }

    /// Button with localized text provided by the client.
    #[must_use]
    pub fn localized(id: impl Into<String>, kind: PopupButtonType) -> Self {
        Self {
            id: Some(id.into()),
            kind: Some(kind),
            text: None,
        }
    }

    /// Effective type of the button.
    #[must_use]
    pub fn kind(&self) -> PopupButtonType {
        self.kind.unwrap_or_default()
    }

    /// Check the limits the client enforces.
    ///
    /// # Errors
    ///
    /// Fails if `id` is too long or `text` is missing or too long for a button which needs it.
    pub fn validate(&self) -> Result<()> {
        ensure_param(
            self.id
                .as_deref()
                .is_none_or(|id| char_len(id) <= MAX_SHORT_TEXT_LEN),
            "id",
            "must be at most 64 characters",
        )?;

        if self.kind().requires_text() {
            let text_len = self.text.as_deref().map_or(0, |text| char_len(text.trim()));
            ensure_param(text_len > 0, "text", "is required for this button type")?;
            ensure_param(
                text_len <= MAX_SHORT_TEXT_LEN,
                "text",
                "must be at most 64 characters",
            )?;
        }
        Ok(())
    }
}

/// Style of a popup button.
#[derive(
    Debug, Display, FromStr, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PopupButtonType {
    /// Button with the default style.
    #[default]
    Default,
    /// Button with the localized text "OK".
    Ok,
    /// Button with the localized text "Close".
    Close,
    /// Button with the localized text "Cancel".
    Cancel,
    /// Button with a style indicating a destructive action.
    Destructive,
}

impl PopupButtonType {
    /// Whether a button of this type needs its own text.
    #[must_use]
    pub const fn requires_text(self) -> bool {
        matches!(self, Self::Default | Self::Destructive)
    }
}

/// Native popup for scanning QR codes shown by `showScanQrPopup`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanQrPopupParams {
    /// Text displayed under the "Scan QR" heading, 0-64 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ScanQrPopupParams {
    /// Check the limits the client enforces.
    ///
    /// # Errors
    ///
    /// Fails if `text` is longer than 64 characters.
    pub fn validate(&self) -> Result<()> {
        ensure_param(
            self.text
                .as_deref()
                .is_none_or(|text| char_len(text.trim()) <= MAX_SHORT_TEXT_LEN),
            "text",
            "must be at most 64 characters",
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "it's ok in tests")]

    use super::*;
    use crate::Error;

    #[test]
    fn simple_popup_is_valid() {
        let popup = PopupParams::new("Delete the record?")
            .with_title("Confirmation")
            .with_button(PopupButton::destructive("delete", "Delete"))
            .with_button(PopupButton::localized("cancel", PopupButtonType::Cancel));

        assert_eq!(popup.validate(), Ok(()));
    }

    #[test]
    fn message_is_required_and_limited() {
        assert_eq!(
            PopupParams::new("   ").validate(),
            Err(Error::InvalidParam {
                param: "message",
                reason: "must not be empty",
            })
        );
        assert!(PopupParams::new("a".repeat(256)).validate().is_ok());
        assert!(PopupParams::new("a".repeat(257)).validate().is_err());
    }

    #[test]
    fn limits_count_characters_not_bytes() {
        assert!(PopupParams::new("ж".repeat(256)).validate().is_ok());
        assert!(
            PopupParams::new("ok")
                .with_title("ж".repeat(64))
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn too_many_buttons_are_rejected() {
        let popup = (0..4).fold(PopupParams::new("Pick one"), |popup, i| {
            popup.with_button(PopupButton::new(i.to_string(), "Option"))
        });

        assert_eq!(
            popup.validate(),
            Err(Error::InvalidParam {
                param: "buttons",
                reason: "must contain at most 3 buttons",
            })
        );
    }

    #[test]
    fn default_and_destructive_buttons_need_text() {
        let untitled = PopupButton {
            id: Some("x".to_owned()),
            kind: None,
            text: None,
        };
        assert!(untitled.validate().is_err());
        assert!(PopupButton::destructive("x", " ").validate().is_err());
        assert!(PopupButton::localized("x", PopupButtonType::Ok).validate().is_ok());
    }

    #[test]
    fn button_serializes_with_wire_names() {
        let json = serde_json::to_string(&PopupButton::localized("no", PopupButtonType::Cancel))
            .expect("Failed to serialize button");
        assert_eq!(json, r#"{"id":"no","type":"cancel"}"#);

        let json = serde_json::to_string(&PopupParams::new("Hi"))
            .expect("Failed to serialize popup");
        assert_eq!(json, r#"{"message":"Hi"}"#);
    }

    #[test]
    fn qr_text_is_limited() {
        assert!(ScanQrPopupParams::default().validate().is_ok());
        assert!(
            ScanQrPopupParams {
                text: Some("a".repeat(65)),
            }
            .validate()
            .is_err()
        );
    }
}

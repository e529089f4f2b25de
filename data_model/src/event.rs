//! Events the client delivers through `Telegram.WebApp.onEvent()`.
//!
//! Every event name has exactly one payload type implementing [`Event`], so the same handler
//! signature is used both to subscribe and to unsubscribe.

use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    failure::{EmojiStatusError, FullscreenError, SensorError, ShareMessageError},
    sensor::LocationData,
};

/// Payload of an event.
///
/// Payload-less events are unit structs deserialized from `null`.
pub trait Event: DeserializeOwned + 'static {
    /// Name of the event on the wire.
    const TYPE: EventType;
}

/// Name of an event accepted by `onEvent` and `offEvent`.
#[derive(Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash)]
#[display(style = "camelCase")]
#[allow(
    clippy::missing_docs_in_private_items,
    reason = "variants are named after their wire values"
)]
pub enum EventType {
    Activated,
    Deactivated,
    ThemeChanged,
    ViewportChanged,
    SafeAreaChanged,
    ContentSafeAreaChanged,
    MainButtonClicked,
    SecondaryButtonClicked,
    BackButtonClicked,
    SettingsButtonClicked,
    InvoiceClosed,
    PopupClosed,
    QrTextReceived,
    ScanQrPopupClosed,
    ClipboardTextReceived,
    WriteAccessRequested,
    ContactRequested,
    BiometricManagerUpdated,
    BiometricAuthRequested,
    BiometricTokenUpdated,
    FullscreenChanged,
    FullscreenFailed,
    HomeScreenAdded,
    HomeScreenChecked,
    AccelerometerStarted,
    AccelerometerStopped,
    AccelerometerChanged,
    AccelerometerFailed,
    DeviceOrientationStarted,
    DeviceOrientationStopped,
    DeviceOrientationChanged,
    DeviceOrientationFailed,
    GyroscopeStarted,
    GyroscopeStopped,
    GyroscopeChanged,
    GyroscopeFailed,
    LocationManagerUpdated,
    LocationRequested,
    ShareMessageSent,
    ShareMessageFailed,
    EmojiStatusSet,
    EmojiStatusFailed,
    EmojiStatusAccessRequested,
    FileDownloadRequested,
}

/// Declare payload-less events. Their payload decodes from `null` or `undefined`.
macro_rules! unit_events {
    ($($(#[$meta:meta])* $event:ident),+ $(,)?) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $event;

        impl Event for $event {
            const TYPE: EventType = EventType::$event;
        }
    )+};
}

/// Tie already declared payload structs to their [`EventType`].
macro_rules! payload_events {
    ($($event:ident),+ $(,)?) => {$(
        impl Event for $event {
            const TYPE: EventType = EventType::$event;
        }
    )+};
}

unit_events! {
    /// `Bot API 8.0+` The Mini App became active (opened from minimized state or selected).
    Activated,
    /// `Bot API 8.0+` The Mini App is no longer active (minimized or moved to an inactive tab).
    Deactivated,
    /// Theme settings changed. New values are in `themeParams` and `colorScheme`.
    ThemeChanged,
    /// `Bot API 8.0+` Device safe area changed. New value is in `safeAreaInset`.
    SafeAreaChanged,
    /// `Bot API 8.0+` Content safe area changed. New value is in `contentSafeAreaInset`.
    ContentSafeAreaChanged,
    /// The main button was pressed.
    MainButtonClicked,
    /// `Bot API 7.10+` The secondary button was pressed.
    SecondaryButtonClicked,
    /// `Bot API 6.1+` The back button was pressed.
    BackButtonClicked,
    /// `Bot API 6.1+` The Settings item in the context menu was pressed.
    SettingsButtonClicked,
    /// `Bot API 7.7+` The QR scanner popup was closed.
    ScanQrPopupClosed,
    /// `Bot API 7.2+` The biometric manager state changed.
    BiometricManagerUpdated,
    /// `Bot API 8.0+` Fullscreen mode changed. New value is in `isFullscreen`.
    FullscreenChanged,
    /// `Bot API 8.0+` The Mini App was added to the home screen.
    HomeScreenAdded,
    /// `Bot API 8.0+` The accelerometer started.
    AccelerometerStarted,
    /// `Bot API 8.0+` The accelerometer stopped.
    AccelerometerStopped,
    /// `Bot API 8.0+` The accelerometer has a new sample.
    AccelerometerChanged,
    /// `Bot API 8.0+` Device orientation tracking started.
    DeviceOrientationStarted,
    /// `Bot API 8.0+` Device orientation tracking stopped.
    DeviceOrientationStopped,
    /// `Bot API 8.0+` Device orientation has a new sample.
    DeviceOrientationChanged,
    /// `Bot API 8.0+` The gyroscope started.
    GyroscopeStarted,
    /// `Bot API 8.0+` The gyroscope stopped.
    GyroscopeStopped,
    /// `Bot API 8.0+` The gyroscope has a new sample.
    GyroscopeChanged,
    /// `Bot API 8.0+` The location manager state changed.
    LocationManagerUpdated,
    /// `Bot API 8.0+` A prepared message was sent.
    ShareMessageSent,
    /// `Bot API 8.0+` The emoji status was set.
    EmojiStatusSet,
}

/// The visible section of the Mini App changed.
///
/// Current height is in `viewportHeight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportChanged {
    /// `true` if resizing is finished, `false` while the user is still expanding or collapsing.
    pub is_state_stable: bool,
}

/// `Bot API 6.1+` An opened invoice was closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceClosed {
    /// Invoice link provided.
    pub url: String,
    /// How the invoice was closed.
    pub status: InvoiceStatus,
}

/// Status of a closed invoice.
#[derive(Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Invoice was paid successfully.
    Paid,
    /// User closed the invoice without paying.
    Cancelled,
    /// User tried to pay, but the payment failed.
    Failed,
    /// Payment is still processing.
    Pending,
}

/// `Bot API 6.2+` An opened popup was closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupClosed {
    /// `id` of the pressed button or `None` if no buttons were pressed.
    #[serde(default)]
    pub button_id: Option<String>,
}

/// `Bot API 6.4+` The QR scanner caught a code with text data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrTextReceived {
    /// Text data from the QR code.
    pub data: String,
}

/// `Bot API 6.4+` Result of `readTextFromClipboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardTextReceived {
    /// Text from the clipboard: empty for non-text data, `None` without clipboard access.
    #[serde(default)]
    pub data: Option<String>,
}

/// `Bot API 6.9+` Result of `requestWriteAccess`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteAccessRequested {
    /// Whether access was granted.
    pub status: WriteAccessStatus,
}

/// `Bot API 8.0+` Result of `requestEmojiStatusAccess`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiStatusAccessRequested {
    /// Whether access was granted.
    pub status: EmojiStatusAccessStatus,
}

/// Answer to an access request.
#[derive(Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
#[allow(
    clippy::missing_docs_in_private_items,
    reason = "variants are named after their wire values"
)]
pub enum AccessStatus {
    Allowed,
    Cancelled,
}

/// Answer to `requestWriteAccess`.
pub type WriteAccessStatus = AccessStatus;

/// Answer to `requestEmojiStatusAccess`.
pub type EmojiStatusAccessStatus = AccessStatus;

/// `Bot API 6.9+` Result of `requestContact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequested {
    /// Whether the contact was shared.
    pub status: ContactStatus,
    /// Raw signed contact data, present when `status` is `sent`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

/// Answer to a contact request.
#[derive(Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
#[allow(
    clippy::missing_docs_in_private_items,
    reason = "variants are named after their wire values"
)]
pub enum ContactStatus {
    Sent,
    Cancelled,
}

/// `Bot API 7.2+` Result of biometric authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricAuthRequested {
    /// Whether the user authenticated successfully.
    pub is_authenticated: bool,
    /// Token stored in secure storage, present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biometric_token: Option<String>,
}

/// `Bot API 7.2+` Result of a biometric token update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricTokenUpdated {
    /// Whether the token was updated.
    pub is_updated: bool,
}

/// `Bot API 8.0+` Request to enter fullscreen mode failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullscreenFailed {
    /// Reason of the failure.
    pub error: FullscreenError,
}

/// `Bot API 8.0+` Result of `checkHomeScreenStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeScreenChecked {
    /// Home screen shortcut status.
    pub status: HomeScreenStatus,
}

/// Home screen shortcut status.
#[derive(Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HomeScreenStatus {
    /// The feature is not supported.
    Unsupported,
    /// The status cannot be determined.
    Unknown,
    /// The shortcut is already added.
    Added,
    /// The shortcut can be added.
    Missed,
}

/// `Bot API 8.0+` The accelerometer failed to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccelerometerFailed {
    /// Reason of the failure.
    pub error: SensorError,
}

/// `Bot API 8.0+` Device orientation tracking failed to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceOrientationFailed {
    /// Reason of the failure.
    pub error: SensorError,
}

/// `Bot API 8.0+` The gyroscope failed to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GyroscopeFailed {
    /// Reason of the failure.
    pub error: SensorError,
}

/// `Bot API 8.0+` Result of `LocationManager.getLocation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequested {
    /// Location, `None` if access was denied.
    #[serde(default)]
    pub location_data: Option<LocationData>,
}

/// `Bot API 8.0+` A prepared message failed to be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareMessageFailed {
    /// Reason of the failure.
    pub error: ShareMessageError,
}

/// `Bot API 8.0+` Setting the emoji status failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiStatusFailed {
    /// Reason of the failure.
    pub error: EmojiStatusError,
}

/// `Bot API 8.0+` Result of `downloadFile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDownloadRequested {
    /// Whether the user accepted the download.
    pub status: FileDownloadStatus,
}

/// Answer to a file download request.
#[derive(Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
#[allow(
    clippy::missing_docs_in_private_items,
    reason = "variants are named after their wire values"
)]
pub enum FileDownloadStatus {
    Downloading,
    Cancelled,
}

payload_events! {
    ViewportChanged,
    InvoiceClosed,
    PopupClosed,
    QrTextReceived,
    ClipboardTextReceived,
    WriteAccessRequested,
    ContactRequested,
    BiometricAuthRequested,
    BiometricTokenUpdated,
    FullscreenFailed,
    HomeScreenChecked,
    AccelerometerFailed,
    DeviceOrientationFailed,
    GyroscopeFailed,
    LocationRequested,
    ShareMessageFailed,
    EmojiStatusFailed,
    EmojiStatusAccessRequested,
    FileDownloadRequested,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "it's ok in tests")]

    use super::*;

    fn decode<E: Event>(json: &str) -> E {
        serde_json::from_str(json).expect("Failed to decode event payload")
    }

    #[test]
    fn event_names_are_camel_case() {
        assert_eq!(EventType::ViewportChanged.to_string(), "viewportChanged");
        assert_eq!(EventType::QrTextReceived.to_string(), "qrTextReceived");
        assert_eq!(EventType::EmojiStatusAccessRequested.to_string(), "emojiStatusAccessRequested");
        assert!(matches!(
            "clipboardTextReceived".parse::<EventType>(),
            Ok(EventType::ClipboardTextReceived)
        ));
        assert!("clipboard_text_received".parse::<EventType>().is_err());
    }

    #[test]
    fn payload_types_are_bound_to_their_names() {
        assert_eq!(ThemeChanged::TYPE, EventType::ThemeChanged);
        assert_eq!(PopupClosed::TYPE, EventType::PopupClosed);
        assert_eq!(GyroscopeFailed::TYPE, EventType::GyroscopeFailed);
        assert_eq!(FileDownloadRequested::TYPE, EventType::FileDownloadRequested);
    }

    #[test]
    fn unit_events_decode_from_null() {
        assert_eq!(decode::<MainButtonClicked>("null"), MainButtonClicked);
        assert_eq!(decode::<ThemeChanged>("null"), ThemeChanged);
    }

    #[test]
    fn payloads_decode_from_host_objects() {
        assert!(decode::<ViewportChanged>(r#"{"isStateStable":true}"#).is_state_stable);

        let invoice = decode::<InvoiceClosed>(r#"{"url":"https://t.me/$abc","status":"pending"}"#);
        assert_eq!(invoice.status, InvoiceStatus::Pending);

        assert_eq!(decode::<PopupClosed>(r#"{"button_id":null}"#).button_id, None);
        assert_eq!(
            decode::<PopupClosed>(r#"{"button_id":"delete"}"#).button_id.as_deref(),
            Some("delete")
        );
        assert_eq!(decode::<ClipboardTextReceived>("{}").data, None);

        let auth = decode::<BiometricAuthRequested>(
            r#"{"isAuthenticated":true,"biometricToken":"secret"}"#,
        );
        assert!(auth.is_authenticated);
        assert_eq!(auth.biometric_token.as_deref(), Some("secret"));

        assert_eq!(
            decode::<FullscreenFailed>(r#"{"error":"ALREADY_FULLSCREEN"}"#).error,
            FullscreenError::AlreadyFullscreen
        );
        assert_eq!(
            decode::<HomeScreenChecked>(r#"{"status":"missed"}"#).status,
            HomeScreenStatus::Missed
        );
        assert_eq!(
            decode::<WriteAccessRequested>(r#"{"status":"allowed"}"#).status,
            AccessStatus::Allowed
        );
    }

    #[test]
    fn location_payload_keeps_missing_values_empty() {
        let location = decode::<LocationRequested>(
            r#"{"locationData":{"latitude":51.5,"longitude":-0.12,"altitude":null}}"#,
        )
        .location_data
        .expect("Location should be present");

        assert!((location.latitude - 51.5).abs() < f64::EPSILON);
        assert_eq!(location.altitude, None);
        assert_eq!(location.speed, None);
    }

    #[test]
    fn denied_location_decodes_to_none() {
        assert_eq!(
            decode::<LocationRequested>(r#"{"locationData":null}"#).location_data,
            None
        );
        assert_eq!(decode::<LocationRequested>("{}").location_data, None);
    }
}

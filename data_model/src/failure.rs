//! Reason codes the client passes to failure events.

use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

/// Payload of `fullscreenFailed`.
#[derive(
    Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error,
)]
#[display(style = "SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FullscreenError {
    /// Fullscreen mode is not supported on this device or platform.
    Unsupported,
    /// The Mini App is already in fullscreen mode.
    AlreadyFullscreen,
}

/// Payload of `accelerometerFailed`, `deviceOrientationFailed` and `gyroscopeFailed`.
#[derive(
    Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error,
)]
#[display(style = "SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SensorError {
    /// Sensor is not supported on this device or platform.
    Unsupported,
}

/// Payload of `shareMessageFailed`.
#[derive(
    Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error,
)]
#[display(style = "SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShareMessageError {
    /// Sharing is not supported by the client.
    Unsupported,
    /// The prepared message has expired.
    MessageExpired,
    /// The message could not be sent.
    MessageSendFailed,
    /// The user closed the dialog without sending.
    UserDeclined,
    /// Anything else.
    UnknownError,
}

/// Payload of `emojiStatusFailed`.
#[derive(
    Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error,
)]
#[display(style = "SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmojiStatusError {
    /// Emoji statuses are not supported by the client.
    Unsupported,
    /// The emoji identifier is invalid.
    SuggestedEmojiInvalid,
    /// The requested status duration is invalid.
    DurationInvalid,
    /// The user declined to set the status.
    UserDeclined,
    /// Telegram servers failed to set the status.
    ServerError,
    /// Anything else.
    UnknownError,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "it's ok in tests")]

    use super::*;

    #[test]
    fn reason_codes_use_screaming_snake_case() {
        assert_eq!(FullscreenError::AlreadyFullscreen.to_string(), "ALREADY_FULLSCREEN");
        assert_eq!(ShareMessageError::MessageSendFailed.to_string(), "MESSAGE_SEND_FAILED");
        assert!(matches!(
            "SUGGESTED_EMOJI_INVALID".parse::<EmojiStatusError>(),
            Ok(EmojiStatusError::SuggestedEmojiInvalid)
        ));
    }

    #[test]
    fn reason_codes_deserialize_from_host_strings() {
        let error: SensorError =
            serde_json::from_str("\"UNSUPPORTED\"").expect("Failed to deserialize reason");
        assert_eq!(error, SensorError::Unsupported);

        let error: ShareMessageError =
            serde_json::from_str("\"USER_DECLINED\"").expect("Failed to deserialize reason");
        assert_eq!(error, ShareMessageError::UserDeclined);
    }
}

//! Buttons the client draws around the Mini App and haptic feedback kinds.

use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

use crate::{Result, char_len, ensure_param, theme::Color};

/// Maximal length of a bottom button text.
pub const MAX_BUTTON_TEXT_LEN: usize = 64;

/// Which of the two bottom buttons an object controls.
#[derive(Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BottomButtonType {
    /// `Telegram.WebApp.MainButton`. Text defaults to `Continue`.
    Main,
    /// `Bot API 7.10+` `Telegram.WebApp.SecondaryButton`. Text defaults to `Cancel`.
    Secondary,
}

/// `Bot API 7.10+` Position of the secondary button relative to the main one.
#[derive(Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
#[allow(
    clippy::missing_docs_in_private_items,
    reason = "variants are named after their wire values"
)]
pub enum BottomButtonPosition {
    Left,
    Right,
    Top,
    Bottom,
}

/// Object passed to `BottomButton.setParams`. Only the set fields are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BottomButtonParams {
    /// Button text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Button color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Button text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    /// Enable the button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Show the button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    /// `Bot API 7.10+` Enable shine effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_shine_effect: Option<bool>,
    /// `Bot API 7.10+` Position of the secondary button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<BottomButtonPosition>,
}

impl BottomButtonParams {
    /// Check the limits the client enforces.
    ///
    /// # Errors
    ///
    /// Fails if `text` is set but empty or longer than 64 characters.
    pub fn validate(&self) -> Result<()> {
        self.text.as_deref().map_or(Ok(()), validate_button_text)
    }
}

/// Check a bottom button text the way `setText` does.
///
/// # Errors
///
/// Fails if trimmed `text` is empty or longer than 64 characters.
pub fn validate_button_text(text: &str) -> Result<()> {
    let len = char_len(text.trim());
    ensure_param(len > 0, "text", "must not be empty")?;
    ensure_param(
        len <= MAX_BUTTON_TEXT_LEN,
        "text",
        "must be at most 64 characters",
    )
}

/// Style of `HapticFeedback.impactOccurred`.
#[derive(Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ImpactStyle {
    /// Collision between small or lightweight UI objects.
    Light,
    /// Collision between medium-sized or medium-weight UI objects.
    Medium,
    /// Collision between large or heavyweight UI objects.
    Heavy,
    /// Collision between hard or inflexible UI objects.
    Rigid,
    /// Collision between soft or flexible UI objects.
    Soft,
}

/// Type of `HapticFeedback.notificationOccurred`.
#[derive(Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    /// A task or action has failed.
    Error,
    /// A task or action has completed successfully.
    Success,
    /// A task or action produced a warning.
    Warning,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "it's ok in tests")]

    use super::*;

    #[test]
    fn only_set_params_are_serialized() {
        let params = BottomButtonParams {
            text: Some("Pay".to_owned()),
            color: Some(Color::new(0x24, 0x81, 0xcc)),
            is_visible: Some(true),
            position: Some(BottomButtonPosition::Left),
            ..BottomButtonParams::default()
        };

        let json = serde_json::to_string(&params).expect("Failed to serialize params");
        assert_eq!(
            json,
            r##"{"text":"Pay","color":"#2481cc","is_visible":true,"position":"left"}"##
        );
    }

    #[test]
    fn button_text_is_limited() {
        assert!(validate_button_text("Continue").is_ok());
        assert!(validate_button_text("  ").is_err());
        assert!(validate_button_text(&"a".repeat(65)).is_err());
        assert!(BottomButtonParams::default().validate().is_ok());
    }

    #[test]
    fn haptic_names() {
        assert_eq!(ImpactStyle::Rigid.to_string(), "rigid");
        assert_eq!(NotificationType::Warning.to_string(), "warning");
        assert_eq!(BottomButtonType::Secondary.to_string(), "secondary");
    }
}

//! Geometry and lifecycle of the Mini App window.

use serde::{Deserialize, Serialize};

/// `Bot API 8.0+` Insets in pixels from the screen edges.
///
/// `safeAreaInset` covers system UI (notches, navigation bars), `contentSafeAreaInset` covers
/// Telegram UI. Also available as CSS variables like `var(--tg-safe-area-inset-top)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(
    clippy::missing_docs_in_private_items,
    reason = "fields are named after their wire values"
)]
pub struct SafeAreaInset {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

/// Options of `close`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseOptions {
    /// `Bot API 7.6+` Return to the chat the Mini App was opened from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_back: Option<bool>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "it's ok in tests")]

    use super::*;

    #[test]
    fn safe_area_from_host_json() {
        let inset: SafeAreaInset = serde_json::from_str(r#"{"top":47,"bottom":34,"left":0,"right":0}"#)
            .expect("Failed to deserialize inset");

        assert_eq!(
            inset,
            SafeAreaInset {
                top: 47,
                bottom: 34,
                left: 0,
                right: 0,
            }
        );
    }

    #[test]
    fn empty_close_options_serialize_to_empty_object() {
        assert_eq!(
            serde_json::to_string(&CloseOptions::default()).expect("Failed to serialize"),
            "{}"
        );
    }
}

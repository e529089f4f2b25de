//! Outgoing requests: data for the bot, links, stories, emoji status and downloads.

use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Feature, Result, char_len, ensure_param};

/// Maximal size of `sendData` payload in bytes.
pub const MAX_DATA_SIZE: usize = 4096;
/// Maximal length of an inline query.
pub const MAX_INLINE_QUERY_LEN: usize = 256;
/// Maximal length of a story caption.
pub const MAX_STORY_TEXT_LEN: usize = 2048;
/// Maximal length of a story widget link name.
pub const MAX_WIDGET_NAME_LEN: usize = 48;

/// Check a `sendData` payload.
///
/// # Errors
///
/// Fails if `data` is empty or longer than 4096 bytes.
pub fn validate_send_data(data: &str) -> Result<()> {
    ensure_param(!data.is_empty(), "data", "must not be empty")?;
    ensure_param(
        data.len() <= MAX_DATA_SIZE,
        "data",
        "must be at most 4096 bytes",
    )
}

/// Check a link for `openLink`.
///
/// # Errors
///
/// Fails unless `url` is an absolute `http` or `https` URL.
pub fn validate_link(url: &str) -> Result<Url> {
    let url = Url::parse(url)?;
    ensure_param(
        matches!(url.scheme(), "http" | "https"),
        "url",
        "must be an http or https link",
    )?;
    Ok(url)
}

/// Check a link for `openTelegramLink`.
///
/// # Errors
///
/// Fails unless `url` is an `http` or `https` link to `t.me`.
pub fn validate_telegram_link(url: &str) -> Result<Url> {
    let url = validate_link(url)?;
    ensure_param(
        url.host_str() == Some("t.me"),
        "url",
        "must be a t.me link",
    )?;
    Ok(url)
}

/// Options of `openLink`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenLinkOptions {
    /// `Bot API 6.4+` Open the link in Instant View mode if possible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub try_instant_view: Option<bool>,
}

impl OpenLinkOptions {
    /// Feature the client must support to honor these options, if any.
    #[must_use]
    pub fn required_feature(&self) -> Option<Feature> {
        (self.try_instant_view == Some(true)).then_some(Feature::InstantView)
    }
}

/// Chat kind allowed in the chat picker of `switchInlineQuery`.
#[derive(Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
#[allow(
    clippy::missing_docs_in_private_items,
    reason = "variants are named after their wire values"
)]
pub enum InlineQueryChatType {
    Users,
    Bots,
    Groups,
    Channels,
}

/// Check arguments of `switchInlineQuery`.
///
/// # Errors
///
/// Fails if `query` is longer than 256 characters or `chat_types` has duplicates.
pub fn validate_inline_query(query: &str, chat_types: &[InlineQueryChatType]) -> Result<()> {
    ensure_param(
        char_len(query) <= MAX_INLINE_QUERY_LEN,
        "query",
        "must be at most 256 characters",
    )?;
    let has_duplicates = chat_types
        .iter()
        .enumerate()
        .any(|(i, chat_type)| chat_types.get(..i).is_some_and(|seen| seen.contains(chat_type)));
    ensure_param(!has_duplicates, "choose_chat_types", "must not repeat")
}

/// `Bot API 7.8+` Parameters of `shareToStory`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryShareParams {
    /// Caption, 0-200 characters for regular users and 0-2048 for premium subscribers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Widget link attached to the story. Premium subscribers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_link: Option<StoryWidgetLink>,
}

/// Link widget of a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryWidgetLink {
    /// URL to be included in the story.
    pub url: String,
    /// Name to display for the widget link, 0-48 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl StoryShareParams {
    /// Check the limits the client enforces.
    ///
    /// # Errors
    ///
    /// Fails if the caption or widget name is too long or widget URL is not a link.
    pub fn validate(&self) -> Result<()> {
        ensure_param(
            self.text
                .as_deref()
                .is_none_or(|text| char_len(text.trim()) <= MAX_STORY_TEXT_LEN),
            "text",
            "must be at most 2048 characters",
        )?;
        let Some(widget_link) = self.widget_link.as_ref() else {
            return Ok(());
        };
        validate_link(&widget_link.url)?;
        ensure_param(
            widget_link
                .name
                .as_deref()
                .is_none_or(|name| char_len(name.trim()) <= MAX_WIDGET_NAME_LEN),
            "widget_link.name",
            "must be at most 48 characters",
        )
    }
}

/// `Bot API 8.0+` Parameters of `setEmojiStatus`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiStatusParams {
    /// Duration of the status in seconds. Permanent if not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

impl EmojiStatusParams {
    /// Check the limits the client enforces.
    ///
    /// # Errors
    ///
    /// Fails if `duration` is zero.
    pub fn validate(&self) -> Result<()> {
        ensure_param(
            self.duration != Some(0),
            "duration",
            "must be positive",
        )
    }
}

/// `Bot API 8.0+` Parameters of `downloadFile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadFileParams {
    /// HTTPS URL of the file.
    pub url: String,
    /// Suggested name for the downloaded file.
    pub file_name: String,
}

impl DownloadFileParams {
    /// Check the limits the client enforces.
    ///
    /// # Errors
    ///
    /// Fails unless `url` is an `https` link and `file_name` is not empty.
    pub fn validate(&self) -> Result<()> {
        let url = validate_link(&self.url)?;
        ensure_param(url.scheme() == "https", "url", "must be an https link")?;
        ensure_param(
            !self.file_name.trim().is_empty(),
            "file_name",
            "must not be empty",
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "it's ok in tests")]

    use super::*;
    use crate::Error;

    #[test]
    fn send_data_size_is_counted_in_bytes() {
        assert!(validate_send_data("{}").is_ok());
        assert!(validate_send_data("").is_err());
        assert!(validate_send_data(&"a".repeat(4096)).is_ok());
        // 2049 two-byte characters is 4098 bytes
        assert!(validate_send_data(&"ж".repeat(2049)).is_err());
    }

    #[test]
    fn links() {
        assert!(validate_link("https://example.com/page").is_ok());
        assert!(validate_link("http://example.com").is_ok());
        assert!(matches!(validate_link("not a url"), Err(Error::Url(_))));
        assert!(matches!(
            validate_link("javascript:alert(1)"),
            Err(Error::InvalidParam { param: "url", .. })
        ));

        assert!(validate_telegram_link("https://t.me/durov").is_ok());
        assert!(validate_telegram_link("https://example.com/durov").is_err());
    }

    #[test]
    fn only_requested_instant_view_is_gated() {
        assert_eq!(OpenLinkOptions::default().required_feature(), None);
        assert_eq!(
            OpenLinkOptions {
                try_instant_view: Some(false)
            }
            .required_feature(),
            None
        );
        assert_eq!(
            OpenLinkOptions {
                try_instant_view: Some(true)
            }
            .required_feature(),
            Some(Feature::InstantView)
        );
    }

    #[test]
    fn inline_query() {
        assert!(validate_inline_query("cats", &[InlineQueryChatType::Users]).is_ok());
        assert!(validate_inline_query(&"q".repeat(257), &[]).is_err());
        assert!(
            validate_inline_query(
                "cats",
                &[InlineQueryChatType::Groups, InlineQueryChatType::Groups]
            )
            .is_err()
        );
    }

    #[test]
    fn story_params() {
        let params = StoryShareParams {
            text: Some("Look!".to_owned()),
            widget_link: Some(StoryWidgetLink {
                url: "https://t.me/bot".to_owned(),
                name: Some("Open".to_owned()),
            }),
        };
        assert!(params.validate().is_ok());

        let params = StoryShareParams {
            widget_link: Some(StoryWidgetLink {
                url: "https://t.me/bot".to_owned(),
                name: Some("n".repeat(49)),
            }),
            ..StoryShareParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn download_requires_https_and_name() {
        let mut params = DownloadFileParams {
            url: "https://example.com/report.pdf".to_owned(),
            file_name: "report.pdf".to_owned(),
        };
        assert!(params.validate().is_ok());

        params.url = "http://example.com/report.pdf".to_owned();
        assert!(params.validate().is_err());

        params.url = "https://example.com/report.pdf".to_owned();
        params.file_name = " ".to_owned();
        assert!(params.validate().is_err());
    }

    #[test]
    fn emoji_status_duration() {
        assert!(EmojiStatusParams::default().validate().is_ok());
        assert!(EmojiStatusParams { duration: Some(0) }.validate().is_err());
        assert!(EmojiStatusParams { duration: Some(3600) }.validate().is_ok());
    }
}

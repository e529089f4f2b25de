//! Data transferred to the Mini App when it is opened.
//!
//! **WARNING:** nothing in this module checks the signature. Values parsed here must not be trusted
//! until the raw string is validated by the bot's server.

use core::str::FromStr;

use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{Error, Result};

/// Init data as the client passes it: the raw string plus its parsed untrusted form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InitData {
    /// Raw query string, exactly as signed by the client. Forward this to the server.
    pub raw: String,
    /// Parsed `raw`. `None` if the app was launched from a keyboard button.
    pub unsafe_data: Option<WebAppInitData>,
}

impl InitData {
    /// Parse `raw` keeping it verbatim.
    ///
    /// # Errors
    ///
    /// Fails if `raw` is not empty and [`WebAppInitData::parse()`] fails.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let unsafe_data = if raw.is_empty() {
            None
        } else {
            Some(WebAppInitData::parse(&raw)?)
        };
        Ok(Self { raw, unsafe_data })
    }
}

/// Input data transferred to the Mini App.
///
/// Empty if the Mini App was launched from a keyboard button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppInitData {
    /// Unique identifier for the session, required for sending messages via the
    /// `answerWebAppQuery` method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
    /// Data about the current user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<WebAppUser>,
    /// Chat partner of the current user in the chat where the bot was launched via the
    /// attachment menu. Private chats only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<WebAppUser>,
    /// Chat where the bot was launched via the attachment menu. Groups and channels only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat: Option<WebAppChat>,
    /// Type of the chat from which the Mini App was opened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_type: Option<ChatType>,
    /// Global identifier of the chat from which the Mini App was opened.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_instance: Option<String>,
    /// Value of the `startattach` or `startapp` parameter passed via link.
    ///
    /// Also passed in the `tgWebAppStartParam` GET parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_param: Option<String>,
    /// Time in seconds after which a message can be sent via `answerWebAppQuery`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_send_after: Option<u32>,
    /// Unix time when the form was opened.
    pub auth_date: u64,
    /// Hash of all passed parameters, which the bot server can use to check their validity.
    pub hash: String,
    /// `Bot API 8.0+` Ed25519 signature of all passed parameters except `hash`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl WebAppInitData {
    /// Parse the raw `Telegram.WebApp.initData` query string.
    ///
    /// Nested objects (`user`, `receiver`, `chat`) are JSON encoded. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// - `auth_date` or `hash` is missing
    /// - Some known field has a malformed value
    pub fn parse(raw: &str) -> Result<Self> {
        let mut query_id = None;
        let mut user = None;
        let mut receiver = None;
        let mut chat = None;
        let mut chat_type = None;
        let mut chat_instance = None;
        let mut start_param = None;
        let mut can_send_after = None;
        let mut auth_date = None;
        let mut hash = None;
        let mut signature = None;

        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            match &*key {
                "query_id" => query_id = Some(value.into_owned()),
                "user" => user = Some(decode_json("user", &value)?),
                "receiver" => receiver = Some(decode_json("receiver", &value)?),
                "chat" => chat = Some(decode_json("chat", &value)?),
                "chat_type" => chat_type = Some(decode_str("chat_type", &value)?),
                "chat_instance" => chat_instance = Some(value.into_owned()),
                "start_param" => start_param = Some(value.into_owned()),
                "can_send_after" => can_send_after = Some(decode_str("can_send_after", &value)?),
                "auth_date" => auth_date = Some(decode_str("auth_date", &value)?),
                "hash" => hash = Some(value.into_owned()),
                "signature" => signature = Some(value.into_owned()),
                unknown => tracing::debug!(key = unknown, "Ignoring unknown init data key"),
            }
        }

        Ok(Self {
            query_id,
            user,
            receiver,
            chat,
            chat_type,
            chat_instance,
            start_param,
            can_send_after,
            auth_date: auth_date.ok_or(Error::MissingField("auth_date"))?,
            hash: hash.ok_or(Error::MissingField("hash"))?,
            signature,
        })
    }
}

impl FromStr for WebAppInitData {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Decode JSON-encoded init data field.
fn decode_json<T: DeserializeOwned>(field: &'static str, value: &str) -> Result<T> {
    serde_json::from_str(value).map_err(|err| Error::InvalidField {
        field,
        reason: err.to_string(),
    })
}

/// Decode init data field with [`FromStr`].
fn decode_str<T>(field: &'static str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    value.parse().map_err(|err: T::Err| Error::InvalidField {
        field,
        reason: err.to_string(),
    })
}

/// Data of the Mini App user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppUser {
    /// Unique identifier for the user or bot. Has at most 52 significant bits.
    pub id: i64,
    /// `true`, if this user is a bot. Returned in the `receiver` field only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_bot: Option<bool>,
    /// First name of the user or bot.
    pub first_name: String,
    /// Last name of the user or bot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Username of the user or bot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// IETF language tag of the user's language. Returned in the `user` field only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// `true`, if this user is a Telegram Premium user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    /// `true`, if this user added the bot to the attachment menu.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_to_attachment_menu: Option<bool>,
    /// `true`, if this user allowed the bot to message them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allows_write_to_pm: Option<bool>,
    /// URL of the user's profile photo in `.jpeg` or `.svg` format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Chat in which the Mini App was launched via the attachment menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebAppChat {
    /// Unique identifier for this chat. Has at most 52 significant bits.
    pub id: i64,
    /// Type of chat.
    #[serde(rename = "type")]
    pub kind: ChatType,
    /// Title of the chat.
    pub title: String,
    /// Username of the chat.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// URL of the chat's photo in `.jpeg` or `.svg` format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Type of a chat.
///
/// [`WebAppChat`] is only ever a group, supergroup or channel; `sender` and `private` appear in
/// [`WebAppInitData::chat_type`].
#[derive(Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
#[allow(
    clippy::missing_docs_in_private_items,
    reason = "variants are named after their wire values"
)]
pub enum ChatType {
    Sender,
    Private,
    Group,
    Supergroup,
    Channel,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "it's ok in tests")]

    use super::*;

    const RAW: &str = "query_id=AAHdF6IQAAAAAN0XohDhrOrc\
        &user=%7B%22id%22%3A279058397%2C%22first_name%22%3A%22Vladislav%22%2C%22last_name%22%3A%22Kibenko%22%2C%22username%22%3A%22vdkfrost%22%2C%22language_code%22%3A%22ru%22%2C%22is_premium%22%3Atrue%2C%22allows_write_to_pm%22%3Atrue%7D\
        &chat_type=sender\
        &chat_instance=8428209589180549439\
        &auth_date=1662771648\
        &hash=c501b71e775f74ce10e377dea85a7ea24ecd640b223ea86dfe453e0eaed2e2b2";

    #[test]
    fn parse_real_init_data() {
        let data = WebAppInitData::parse(RAW).expect("Failed to parse init data");

        assert_eq!(data.query_id.as_deref(), Some("AAHdF6IQAAAAAN0XohDhrOrc"));
        assert_eq!(data.chat_type, Some(ChatType::Sender));
        assert_eq!(data.chat_instance.as_deref(), Some("8428209589180549439"));
        assert_eq!(data.auth_date, 1_662_771_648);
        assert_eq!(
            data.hash,
            "c501b71e775f74ce10e377dea85a7ea24ecd640b223ea86dfe453e0eaed2e2b2"
        );

        let user = data.user.expect("User should be present");
        assert_eq!(user.id, 279_058_397);
        assert_eq!(user.first_name, "Vladislav");
        assert_eq!(user.last_name.as_deref(), Some("Kibenko"));
        assert_eq!(user.username.as_deref(), Some("vdkfrost"));
        assert_eq!(user.is_premium, Some(true));
        assert_eq!(user.is_bot, None);
        assert!(data.receiver.is_none());
        assert!(data.chat.is_none());
    }

    #[test]
    fn parse_chat() {
        let raw = "chat=%7B%22id%22%3A-1001%2C%22type%22%3A%22supergroup%22%2C%22title%22%3A%22Chat%22%7D\
            &start_param=promo&can_send_after=10&auth_date=1&hash=abc";
        let data = WebAppInitData::parse(raw).expect("Failed to parse init data");

        let chat = data.chat.expect("Chat should be present");
        assert_eq!(chat.id, -1001);
        assert_eq!(chat.kind, ChatType::Supergroup);
        assert_eq!(chat.title, "Chat");
        assert_eq!(data.start_param.as_deref(), Some("promo"));
        assert_eq!(data.can_send_after, Some(10));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let data = WebAppInitData::parse("auth_date=1&hash=abc&something_new=42")
            .expect("Failed to parse init data");

        assert_eq!(data.auth_date, 1);
        assert_eq!(data.hash, "abc");
    }

    #[test]
    fn missing_required_fields_are_reported() {
        assert_eq!(
            WebAppInitData::parse("hash=abc"),
            Err(Error::MissingField("auth_date"))
        );
        assert_eq!(
            WebAppInitData::parse("auth_date=1"),
            Err(Error::MissingField("hash"))
        );
    }

    #[test]
    fn malformed_fields_are_reported() {
        let err = WebAppInitData::parse("auth_date=yesterday&hash=abc")
            .expect_err("Non-numeric auth_date should fail");
        assert!(matches!(err, Error::InvalidField { field: "auth_date", .. }));

        let err = WebAppInitData::parse("user=%7Bbroken&auth_date=1&hash=abc")
            .expect_err("Broken JSON should fail");
        assert!(matches!(err, Error::InvalidField { field: "user", .. }));
    }

    #[test]
    fn init_data_keeps_raw_string() {
        let init_data = InitData::new(RAW).expect("Failed to parse init data");
        assert_eq!(init_data.raw, RAW);
        assert!(init_data.unsafe_data.is_some());

        let empty = InitData::new("").expect("Empty init data is valid");
        assert_eq!(empty, InitData::default());
    }

    #[test]
    fn unsafe_object_from_host_json() {
        let json = r#"{"user":{"id":1,"first_name":"A"},"auth_date":1700000000,"hash":"h"}"#;
        let data: WebAppInitData = serde_json::from_str(json).expect("Failed to deserialize");

        assert_eq!(data.auth_date, 1_700_000_000);
        assert_eq!(data.user.map(|user| user.id), Some(1));
    }
}

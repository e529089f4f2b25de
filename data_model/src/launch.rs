//! Launch parameters the client appends to the Mini App URL.
//!
//! The client opens the page with `#tgWebAppData=...&tgWebAppVersion=...` in the fragment and
//! its bootstrap script builds `Telegram.WebApp` out of them. Reading them directly is useful
//! outside the page, e.g. to inspect a launch link.

use parse_display::Display;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Error, InitData, Result, ThemeParams, version::BotApiVersion};

/// Name of the platform of the user's Telegram app.
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display(style = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Telegram for Android.
    Android,
    /// Telegram X for Android.
    AndroidX,
    /// Telegram for iOS.
    Ios,
    /// Telegram for macOS.
    Macos,
    /// Telegram Desktop.
    Tdesktop,
    /// Telegram Web A.
    Weba,
    /// Telegram Web K.
    Webk,
    /// Unigram.
    Unigram,
    /// Anything the client did not name or a name unknown to this crate.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Platform {
    /// Map a platform name reported by the client, falling back to [`Platform::Unknown`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "android" => Self::Android,
            "android_x" => Self::AndroidX,
            "ios" => Self::Ios,
            "macos" => Self::Macos,
            "tdesktop" => Self::Tdesktop,
            "weba" => Self::Weba,
            "webk" => Self::Webk,
            "unigram" => Self::Unigram,
            _ => Self::Unknown,
        }
    }
}

/// Parameters passed by the client when opening the Mini App.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LaunchParams {
    /// `tgWebAppData`: raw and parsed init data.
    pub init_data: InitData,
    /// `tgWebAppVersion`: Bot API version supported by the client. `6.0` if absent.
    pub version: BotApiVersion,
    /// `tgWebAppPlatform`.
    pub platform: Platform,
    /// `tgWebAppThemeParams`.
    pub theme_params: ThemeParams,
    /// `tgWebAppStartParam`: same as `start_param` of the init data.
    pub start_param: Option<String>,
    /// `tgWebAppShowSettings`: whether the settings button should be shown.
    pub show_settings: bool,
    /// `tgWebAppBotInline`: whether the app was opened in inline mode.
    pub bot_inline: bool,
    /// `tgWebAppFullscreen`: whether the app was opened in fullscreen mode.
    pub fullscreen: bool,
}

impl LaunchParams {
    /// Read launch parameters from a full Mini App URL.
    ///
    /// Parameters are looked up in the query string and then in the fragment. The fragment wins
    /// when both have the same parameter, as it does in the client.
    ///
    /// # Errors
    ///
    /// Fails if `url` is not a valid URL or some parameter is malformed.
    pub fn from_url(url: &str) -> Result<Self> {
        let url = Url::parse(url)?;
        let mut params = Self::default();
        if let Some(query) = url.query() {
            params.apply(query)?;
        }
        if let Some(fragment) = url.fragment() {
            params.apply(fragment)?;
        }
        Ok(params)
    }

    /// Read launch parameters from a URL fragment (with or without the leading `#`).
    ///
    /// # Errors
    ///
    /// Fails if some parameter is malformed.
    pub fn from_fragment(fragment: &str) -> Result<Self> {
        let mut params = Self::default();
        params.apply(fragment.strip_prefix('#').unwrap_or(fragment))?;
        Ok(params)
    }

    /// Override fields with `tgWebApp*` parameters found in `pairs`.
    fn apply(&mut self, pairs: &str) -> Result<()> {
        for (key, value) in url::form_urlencoded::parse(pairs.as_bytes()) {
            match &*key {
                "tgWebAppData" => self.init_data = InitData::new(value)?,
                "tgWebAppVersion" => self.version = BotApiVersion::from(value.into_owned()),
                "tgWebAppPlatform" => self.platform = Platform::from_name(&value),
                "tgWebAppThemeParams" => {
                    self.theme_params =
                        serde_json::from_str(&value).map_err(|err| Error::InvalidField {
                            field: "tgWebAppThemeParams",
                            reason: err.to_string(),
                        })?;
                }
                "tgWebAppStartParam" => self.start_param = Some(value.into_owned()),
                "tgWebAppShowSettings" => self.show_settings = is_flag_set(&value),
                "tgWebAppBotInline" => self.bot_inline = is_flag_set(&value),
                "tgWebAppFullscreen" => self.fullscreen = is_flag_set(&value),
                other => tracing::trace!(key = other, "Skipping non-launch parameter"),
            }
        }
        Ok(())
    }
}

/// Client sends boolean flags as `1`.
fn is_flag_set(value: &str) -> bool {
    matches!(value, "1" | "true")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "it's ok in tests")]

    use super::*;
    use crate::{
        init_data::ChatType,
        theme::{Color, ColorScheme},
    };

    const URL: &str = "https://example.com/app?ref=ad#tgWebAppData=query_id%3DAAH%26user%3D%257B%2522id%2522%253A42%252C%2522first_name%2522%253A%2522Ann%2522%257D%26chat_type%3Dprivate%26auth_date%3D1700000000%26hash%3Dabc\
        &tgWebAppVersion=7.10\
        &tgWebAppPlatform=tdesktop\
        &tgWebAppThemeParams=%7B%22bg_color%22%3A%22%23ffffff%22%2C%22text_color%22%3A%22%23000000%22%7D\
        &tgWebAppShowSettings=1";

    #[test]
    fn parse_full_launch_url() {
        let params = LaunchParams::from_url(URL).expect("Failed to parse launch URL");

        assert_eq!(params.version, BotApiVersion::new(7, 10));
        assert_eq!(params.platform, Platform::Tdesktop);
        assert!(params.show_settings);
        assert!(!params.bot_inline);
        assert_eq!(params.theme_params.bg_color, Some(Color::new(0xff, 0xff, 0xff)));
        assert_eq!(ColorScheme::default(), ColorScheme::Light);

        assert!(params.init_data.raw.starts_with("query_id=AAH&user=%7B"));
        let data = params
            .init_data
            .unsafe_data
            .expect("Init data should be present");
        assert_eq!(data.query_id.as_deref(), Some("AAH"));
        assert_eq!(data.chat_type, Some(ChatType::Private));
        assert_eq!(data.user.map(|user| user.first_name), Some("Ann".to_owned()));
    }

    #[test]
    fn defaults_without_parameters() {
        let params =
            LaunchParams::from_url("https://example.com/").expect("Failed to parse launch URL");

        assert_eq!(params, LaunchParams::default());
        assert_eq!(params.version.to_string(), "6.0");
        assert_eq!(params.platform, Platform::Unknown);
        assert!(params.init_data.unsafe_data.is_none());
    }

    #[test]
    fn fragment_overrides_query() {
        let params = LaunchParams::from_url(
            "https://example.com/?tgWebAppVersion=6.1&tgWebAppStartParam=q#tgWebAppVersion=8.0",
        )
        .expect("Failed to parse launch URL");

        assert_eq!(params.version, BotApiVersion::new(8, 0));
        assert_eq!(params.start_param.as_deref(), Some("q"));
    }

    #[test]
    fn fragment_only() {
        let params = LaunchParams::from_fragment("#tgWebAppPlatform=android_x&tgWebAppBotInline=1")
            .expect("Failed to parse fragment");

        assert_eq!(params.platform, Platform::AndroidX);
        assert!(params.bot_inline);
    }

    #[test]
    fn unknown_platform_is_tolerated() {
        assert_eq!(Platform::from_name("smart_fridge"), Platform::Unknown);
        let platform: Platform =
            serde_json::from_str("\"smart_fridge\"").expect("Unknown platform should deserialize");
        assert_eq!(platform, Platform::Unknown);
    }

    #[test]
    fn malformed_theme_is_reported() {
        let err = LaunchParams::from_fragment("tgWebAppThemeParams=%7Bbroken")
            .expect_err("Broken theme should fail");
        assert!(matches!(
            err,
            Error::InvalidField {
                field: "tgWebAppThemeParams",
                ..
            }
        ));
    }
}

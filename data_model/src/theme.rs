//! Theme settings of the user's Telegram app and colors accepted by the client.

use core::{fmt, str::FromStr};

use derive_more::From;
use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

use crate::{Error, Feature, Result};

/// The color scheme currently used in the Telegram app.
///
/// Also available as the CSS variable `var(--tg-color-scheme)`.
#[derive(
    Debug, Display, FromStr, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
#[allow(
    clippy::missing_docs_in_private_items,
    reason = "variants are named after their wire values"
)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// RGB color as the client understands it.
///
/// Parsed from `#RGB`, `#RRGGBB`, `rgb(r, g, b)` or `rgba(r, g, b, a)` (alpha is dropped) and always
/// printed as lower-case `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB` without the leading `#`.
    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: core::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        };
        match hex.len() {
            6 => Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            3 => {
                // `#abc` is a shortcut for `#aabbcc`
                let doubled = |i: usize| {
                    hex.get(i..=i)
                        .and_then(|digit| u8::from_str_radix(&digit.repeat(2), 16).ok())
                };
                Some(Self::new(doubled(0)?, doubled(1)?, doubled(2)?))
            }
            _ => None,
        }
    }

    /// Parse `rgb(...)` or `rgba(...)` argument list.
    fn from_rgb_args(args: &str) -> Option<Self> {
        let mut parts = args.split(',').map(str::trim);
        let mut channel = || parts.next().and_then(|part| part.parse::<u8>().ok());
        let color = Self::new(channel()?, channel()?, channel()?);

        match parts.next() {
            None => {}
            Some(alpha) if alpha.parse::<f64>().is_ok() => {}
            Some(_) => return None,
        }
        parts.next().is_none().then_some(color)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let color = if let Some(hex) = trimmed.strip_prefix('#') {
            Self::from_hex(hex)
        } else {
            trimmed
                .strip_prefix("rgba(")
                .or_else(|| trimmed.strip_prefix("rgb("))
                .and_then(|rest| rest.strip_suffix(')'))
                .and_then(Self::from_rgb_args)
        };
        color.ok_or_else(|| Error::InvalidColor(s.to_owned()))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Theme slot accepted as a color keyword by color setters.
#[derive(Debug, Display, FromStr, Clone, Copy, PartialEq, Eq, Hash)]
#[display(style = "snake_case")]
#[allow(
    clippy::missing_docs_in_private_items,
    reason = "variants are named after their wire values"
)]
pub enum ColorKeyword {
    BgColor,
    SecondaryBgColor,
    BottomBarBgColor,
}

/// Value for `setHeaderColor`: `bg_color`, `secondary_bg_color` or an explicit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub enum HeaderColor {
    /// Theme slot.
    Keyword(ColorKeyword),
    /// `Bot API 6.9+` Explicit color.
    Color(Color),
}

impl HeaderColor {
    /// Feature the client must support to accept this value.
    #[must_use]
    pub const fn required_feature(&self) -> Feature {
        match *self {
            Self::Keyword(_) => Feature::HeaderColor,
            Self::Color(_) => Feature::HeaderColorValue,
        }
    }
}

/// Value for `setBackgroundColor` and `setBottomBarColor`: any [`ColorKeyword`] or an explicit
/// color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub enum BackgroundColor {
    /// Theme slot.
    Keyword(ColorKeyword),
    /// Explicit color.
    Color(Color),
}

/// Alias kept for readability at `setBottomBarColor` call sites.
pub type BottomBarColor = BackgroundColor;

impl FromStr for HeaderColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<ColorKeyword>() {
            Ok(ColorKeyword::BottomBarBgColor) => Err(Error::InvalidColor(s.to_owned())),
            Ok(keyword) => Ok(Self::Keyword(keyword)),
            Err(_) => s.parse::<Color>().map(Self::Color),
        }
    }
}

impl fmt::Display for HeaderColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Keyword(keyword) => fmt::Display::fmt(&keyword, f),
            Self::Color(color) => fmt::Display::fmt(&color, f),
        }
    }
}

impl FromStr for BackgroundColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<ColorKeyword>().map_or_else(
            |_| s.parse::<Color>().map(Self::Color),
            |keyword| Ok(Self::Keyword(keyword)),
        )
    }
}

impl fmt::Display for BackgroundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Keyword(keyword) => fmt::Display::fmt(&keyword, f),
            Self::Color(color) => fmt::Display::fmt(&color, f),
        }
    }
}

/// Current theme settings used in the Telegram app.
///
/// Every slot is also exposed to the page as a CSS variable, e.g. `bg_color` is
/// `var(--tg-theme-bg-color)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeParams {
    /// Background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<Color>,
    /// Main text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    /// Hint text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint_color: Option<Color>,
    /// Link color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_color: Option<Color>,
    /// Button color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_color: Option<Color>,
    /// Button text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<Color>,
    /// `Bot API 6.1+` Secondary background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_bg_color: Option<Color>,
    /// `Bot API 7.0+` Header background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_bg_color: Option<Color>,
    /// `Bot API 7.10+` Bottom background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_bar_bg_color: Option<Color>,
    /// `Bot API 7.0+` Accent text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_text_color: Option<Color>,
    /// `Bot API 7.0+` Background color for the section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_bg_color: Option<Color>,
    /// `Bot API 7.0+` Header text color for the section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_header_text_color: Option<Color>,
    /// `Bot API 7.6+` Section separator color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_separator_color: Option<Color>,
    /// `Bot API 7.0+` Subtitle text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_text_color: Option<Color>,
    /// `Bot API 7.0+` Text color for destructive actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destructive_text_color: Option<Color>,
}

impl ThemeParams {
    /// Wire names of all slots paired with their values.
    #[must_use]
    pub fn slots(&self) -> [(&'static str, Option<Color>); 15] {
        [
            ("bg_color", self.bg_color),
            ("text_color", self.text_color),
            ("hint_color", self.hint_color),
            ("link_color", self.link_color),
            ("button_color", self.button_color),
            ("button_text_color", self.button_text_color),
            ("secondary_bg_color", self.secondary_bg_color),
            ("header_bg_color", self.header_bg_color),
            ("bottom_bar_bg_color", self.bottom_bar_bg_color),
            ("accent_text_color", self.accent_text_color),
            ("section_bg_color", self.section_bg_color),
            ("section_header_text_color", self.section_header_text_color),
            ("section_separator_color", self.section_separator_color),
            ("subtitle_text_color", self.subtitle_text_color),
            ("destructive_text_color", self.destructive_text_color),
        ]
    }

    /// CSS variables the client defines for the set slots, e.g. `("--tg-theme-bg-color", "#ffffff")`.
    #[must_use]
    pub fn css_variables(&self) -> Vec<(String, String)> {
        self.slots()
            .into_iter()
            .filter_map(|(name, color)| {
                color.map(|color| {
                    (
                        format!("--tg-theme-{}", name.replace('_', "-")),
                        color.to_string(),
                    )
                })
            })
            .collect()
    }

    /// Resolve a keyword passed to a color setter into the current theme color.
    #[must_use]
    pub fn resolve(&self, keyword: ColorKeyword) -> Option<Color> {
        match keyword {
            ColorKeyword::BgColor => self.bg_color,
            ColorKeyword::SecondaryBgColor => self.secondary_bg_color,
            ColorKeyword::BottomBarBgColor => self.bottom_bar_bg_color,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "it's ok in tests")]

    use super::*;

    #[test]
    fn color_formats_are_normalized() {
        let expected = Color::new(0xaa, 0xbb, 0xcc);

        for input in ["#AABBCC", "#aabbcc", " #abc ", "rgb(170, 187, 204)", "rgba(170,187,204,0.5)"] {
            assert_eq!(input.parse::<Color>(), Ok(expected), "input: {input}");
        }
        assert_eq!(expected.to_string(), "#aabbcc");
    }

    #[test]
    fn invalid_colors_are_rejected() {
        for input in ["", "#ab", "#abcd", "#gggggg", "rgb(256, 0, 0)", "rgb(1, 2)", "red"] {
            assert_eq!(
                input.parse::<Color>(),
                Err(Error::InvalidColor(input.to_owned())),
                "input: {input}"
            );
        }
    }

    #[test]
    fn header_color_accepts_only_two_keywords() {
        assert_eq!(
            "bg_color".parse::<HeaderColor>(),
            Ok(HeaderColor::Keyword(ColorKeyword::BgColor))
        );
        assert_eq!(
            "secondary_bg_color".parse::<HeaderColor>(),
            Ok(HeaderColor::Keyword(ColorKeyword::SecondaryBgColor))
        );
        assert!("bottom_bar_bg_color".parse::<HeaderColor>().is_err());
        assert_eq!(
            "#102030".parse::<HeaderColor>(),
            Ok(HeaderColor::Color(Color::new(0x10, 0x20, 0x30)))
        );
    }

    #[test]
    fn explicit_header_color_needs_newer_client() {
        let keyword: HeaderColor = ColorKeyword::SecondaryBgColor.into();
        let color: HeaderColor = Color::new(0x10, 0x20, 0x30).into();

        assert_eq!(keyword.required_feature(), Feature::HeaderColor);
        assert_eq!(color.required_feature(), Feature::HeaderColorValue);

        let old_client = crate::BotApiVersion::new(6, 1);
        assert!(old_client.ensure(keyword.required_feature()).is_ok());
        assert!(matches!(
            old_client.ensure(color.required_feature()),
            Err(Error::Unsupported {
                feature: Feature::HeaderColorValue,
                ..
            })
        ));
        assert!(
            crate::BotApiVersion::new(6, 9)
                .ensure(color.required_feature())
                .is_ok()
        );
    }

    #[test]
    fn background_color_accepts_bottom_bar_keyword() {
        let color = "bottom_bar_bg_color"
            .parse::<BackgroundColor>()
            .expect("Keyword should be accepted");

        assert_eq!(color, BackgroundColor::Keyword(ColorKeyword::BottomBarBgColor));
        assert_eq!(color.to_string(), "bottom_bar_bg_color");
    }

    #[test]
    fn theme_params_from_host_json() {
        let json = r##"{"bg_color":"#17212b","text_color":"#f5f5f5","button_color":"#5288c1"}"##;
        let theme: ThemeParams = serde_json::from_str(json).expect("Failed to parse theme");

        assert_eq!(theme.bg_color, Some(Color::new(0x17, 0x21, 0x2b)));
        assert_eq!(theme.hint_color, None);
        assert_eq!(
            theme.css_variables(),
            vec![
                ("--tg-theme-bg-color".to_owned(), "#17212b".to_owned()),
                ("--tg-theme-text-color".to_owned(), "#f5f5f5".to_owned()),
                ("--tg-theme-button-color".to_owned(), "#5288c1".to_owned()),
            ]
        );
        assert_eq!(
            theme.resolve(ColorKeyword::BgColor),
            Some(Color::new(0x17, 0x21, 0x2b))
        );
    }

    #[test]
    fn color_scheme_names() {
        assert_eq!(ColorScheme::Dark.to_string(), "dark");
        assert!(matches!("light".parse::<ColorScheme>(), Ok(ColorScheme::Light)));
    }
}

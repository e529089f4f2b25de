//! Bot API versions reported by the client and members gated on them.
//!
//! Every member added after Bot API 6.0 is a no-op (or throws) on older clients, so callers must
//! compare the reported version before invoking it.

use core::{cmp::Ordering, convert::Infallible, fmt, str::FromStr};

use parse_display::Display;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Version of the Bot API supported by the user's Telegram app.
///
/// Compared component-wise. Missing components are zeros and components which are not numbers
/// count as zeros too, so `"6"`, `"6.0"` and `"6.0.x"` are all equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct BotApiVersion(Vec<u32>);

impl BotApiVersion {
    /// Create a `major.minor` version.
    #[must_use]
    pub fn new(major: u32, minor: u32) -> Self {
        Self(vec![major, minor])
    }

    /// Components of the version.
    #[must_use]
    pub fn components(&self) -> &[u32] {
        &self.0
    }

    /// `true` if `self` is equal to or newer than `minimum`.
    #[must_use]
    pub fn is_at_least(&self, minimum: &Self) -> bool {
        *self >= *minimum
    }

    /// Check that `feature` is available on a client reporting `self`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Unsupported`] if the client is too old.
    pub fn ensure(&self, feature: Feature) -> Result<()> {
        let required = feature.min_version();
        if self.is_at_least(&required) {
            return Ok(());
        }

        tracing::debug!(%feature, %required, reported = %self, "Feature is not supported");
        Err(Error::Unsupported {
            feature,
            required,
            reported: self.clone(),
        })
    }

    /// Parse one component the way `parseInt` does: leading digits or zero.
    fn parse_component(part: &str) -> u32 {
        let part = part.trim_start();
        let digits_end = part
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(part.len());
        part.get(..digits_end)
            .and_then(|digits| digits.parse().ok())
            .unwrap_or(0)
    }
}

impl Default for BotApiVersion {
    /// Version assumed when the client reports none.
    fn default() -> Self {
        Self::new(6, 0)
    }
}

impl FromStr for BotApiVersion {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().split('.').map(Self::parse_component).collect()))
    }
}

impl From<String> for BotApiVersion {
    fn from(s: String) -> Self {
        let Ok(version) = s.parse();
        version
    }
}

impl From<BotApiVersion> for String {
    fn from(version: BotApiVersion) -> Self {
        version.to_string()
    }
}

impl fmt::Display for BotApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components = self.0.iter();
        if let Some(first) = components.next() {
            write!(f, "{first}")?;
        }
        for component in components {
            write!(f, ".{component}")?;
        }
        Ok(())
    }
}

impl Ord for BotApiVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.0.len().max(other.0.len());
        (0..len)
            .map(|i| {
                let lhs = self.0.get(i).copied().unwrap_or(0);
                let rhs = other.0.get(i).copied().unwrap_or(0);
                lhs.cmp(&rhs)
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for BotApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for BotApiVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for BotApiVersion {}

/// Same as `Telegram.WebApp.isVersionAtLeast(minimum)` for a client reporting `reported`.
#[must_use]
pub fn is_version_at_least(reported: &str, minimum: &str) -> bool {
    let Ok(reported) = reported.parse::<BotApiVersion>();
    let Ok(minimum) = minimum.parse::<BotApiVersion>();
    reported.is_at_least(&minimum)
}

/// Member of the API which appeared after Bot API 6.0.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(
    clippy::missing_docs_in_private_items,
    reason = "variants are named after their wire values"
)]
pub enum Feature {
    #[display("setHeaderColor")]
    HeaderColor,
    #[display("setHeaderColor(color)")]
    HeaderColorValue,
    #[display("setBackgroundColor")]
    BackgroundColor,
    #[display("setBottomBarColor")]
    BottomBarColor,
    #[display("BackButton")]
    BackButton,
    #[display("SecondaryButton")]
    SecondaryButton,
    #[display("SettingsButton")]
    SettingsButton,
    #[display("HapticFeedback")]
    HapticFeedback,
    #[display("openInvoice")]
    Invoice,
    #[display("enableClosingConfirmation")]
    ClosingConfirmation,
    #[display("showPopup")]
    Popup,
    #[display("showScanQrPopup")]
    ScanQrPopup,
    #[display("readTextFromClipboard")]
    Clipboard,
    #[display("openLink.try_instant_view")]
    InstantView,
    #[display("switchInlineQuery")]
    SwitchInlineQuery,
    #[display("CloudStorage")]
    CloudStorage,
    #[display("requestWriteAccess")]
    WriteAccess,
    #[display("requestContact")]
    Contact,
    #[display("BiometricManager")]
    BiometricManager,
    #[display("close.return_back")]
    CloseReturnBack,
    #[display("enableVerticalSwipes")]
    VerticalSwipes,
    #[display("shareToStory")]
    ShareToStory,
    #[display("requestFullscreen")]
    Fullscreen,
    #[display("lockOrientation")]
    OrientationLock,
    #[display("addToHomeScreen")]
    HomeScreen,
    #[display("safeAreaInset")]
    SafeArea,
    #[display("Accelerometer")]
    Accelerometer,
    #[display("DeviceOrientation")]
    DeviceOrientation,
    #[display("Gyroscope")]
    Gyroscope,
    #[display("LocationManager")]
    LocationManager,
    #[display("shareMessage")]
    ShareMessage,
    #[display("setEmojiStatus")]
    EmojiStatus,
    #[display("downloadFile")]
    DownloadFile,
}

impl Feature {
    /// All gated members, oldest first.
    pub const ALL: &'static [Self] = &[
        Self::HeaderColor,
        Self::BackgroundColor,
        Self::BackButton,
        Self::HapticFeedback,
        Self::Invoice,
        Self::ClosingConfirmation,
        Self::Popup,
        Self::ScanQrPopup,
        Self::Clipboard,
        Self::InstantView,
        Self::SwitchInlineQuery,
        Self::CloudStorage,
        Self::WriteAccess,
        Self::Contact,
        Self::HeaderColorValue,
        Self::SettingsButton,
        Self::BiometricManager,
        Self::CloseReturnBack,
        Self::VerticalSwipes,
        Self::ShareToStory,
        Self::SecondaryButton,
        Self::BottomBarColor,
        Self::Fullscreen,
        Self::OrientationLock,
        Self::HomeScreen,
        Self::SafeArea,
        Self::Accelerometer,
        Self::DeviceOrientation,
        Self::Gyroscope,
        Self::LocationManager,
        Self::ShareMessage,
        Self::EmojiStatus,
        Self::DownloadFile,
    ];

    /// Minimal Bot API version which supports the feature.
    #[must_use]
    pub fn min_version(self) -> BotApiVersion {
        let (major, minor) = match self {
            Self::HeaderColor
            | Self::BackgroundColor
            | Self::BackButton
            | Self::HapticFeedback
            | Self::Invoice => (6, 1),
            Self::ClosingConfirmation | Self::Popup => (6, 2),
            Self::ScanQrPopup | Self::Clipboard | Self::InstantView => (6, 4),
            Self::SwitchInlineQuery => (6, 7),
            Self::CloudStorage | Self::WriteAccess | Self::Contact | Self::HeaderColorValue => {
                (6, 9)
            }
            Self::SettingsButton => (7, 0),
            Self::BiometricManager => (7, 2),
            Self::CloseReturnBack => (7, 6),
            Self::VerticalSwipes => (7, 7),
            Self::ShareToStory => (7, 8),
            Self::SecondaryButton | Self::BottomBarColor => (7, 10),
            Self::Fullscreen
            | Self::OrientationLock
            | Self::HomeScreen
            | Self::SafeArea
            | Self::Accelerometer
            | Self::DeviceOrientation
            | Self::Gyroscope
            | Self::LocationManager
            | Self::ShareMessage
            | Self::EmojiStatus
            | Self::DownloadFile => (8, 0),
        };
        BotApiVersion::new(major, minor)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "it's ok in tests")]

    use super::*;

    fn v(s: &str) -> BotApiVersion {
        let Ok(version) = s.parse();
        version
    }

    #[test]
    fn components_are_compared_numerically() {
        assert!(v("7.10") > v("7.2"));
        assert!(v("10.0") > v("9.9"));
        assert!(v("6.10") > v("6.9"));
    }

    #[test]
    fn missing_components_are_zeros() {
        assert_eq!(v("6"), v("6.0"));
        assert_eq!(v("6.1"), v("6.1.0"));
        assert!(v("6.1.1") > v("6.1"));
    }

    #[test]
    fn garbage_components_are_zeros() {
        assert_eq!(v("7.beta"), v("7.0"));
        assert_eq!(v(" 7.2rc "), v("7.2"));
        assert_eq!(v(""), v("0"));
    }

    #[test]
    fn is_version_at_least_matches_host_semantics() {
        assert!(is_version_at_least("6.9", "6.9"));
        assert!(is_version_at_least("7.0", "6.9"));
        assert!(!is_version_at_least("6.4", "6.9"));
        assert!(!is_version_at_least("", "6.1"));
    }

    #[test]
    fn default_version_is_6_0() {
        assert_eq!(BotApiVersion::default().to_string(), "6.0");
    }

    #[test]
    fn ensure_rejects_too_old_client() {
        let reported = v("6.9");

        assert!(reported.ensure(Feature::CloudStorage).is_ok());
        assert_eq!(
            reported.ensure(Feature::BiometricManager),
            Err(Error::Unsupported {
                feature: Feature::BiometricManager,
                required: v("7.2"),
                reported: v("6.9"),
            })
        );
    }

    #[test]
    fn explicit_header_color_is_gated_separately() {
        let reported = v("6.1");

        assert!(reported.ensure(Feature::HeaderColor).is_ok());
        assert_eq!(
            reported.ensure(Feature::HeaderColorValue),
            Err(Error::Unsupported {
                feature: Feature::HeaderColorValue,
                required: v("6.9"),
                reported: v("6.1"),
            })
        );
        assert!(v("6.9").ensure(Feature::HeaderColorValue).is_ok());
    }

    #[test]
    fn unsupported_error_names_the_js_member() {
        let err = v("6.0")
            .ensure(Feature::Fullscreen)
            .expect_err("6.0 has no fullscreen");

        assert_eq!(
            err.to_string(),
            "`requestFullscreen` requires Bot API 8.0, but the client reports 6.0"
        );
    }

    #[test]
    fn features_are_listed_oldest_first() {
        let versions: Vec<_> = Feature::ALL.iter().map(|f| f.min_version()).collect();
        assert!(versions.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(Feature::ALL.len(), 33);
    }

    #[test]
    fn serde_uses_plain_string() {
        let version: BotApiVersion =
            serde_json::from_str("\"7.10\"").expect("Failed to deserialize version");
        assert_eq!(version, v("7.10"));
        assert_eq!(
            serde_json::to_string(&version).expect("Failed to serialize version"),
            "\"7.10\""
        );
    }
}

//! Data structures exchanged between a Mini App and the Telegram client hosting it.
//!
//! Everything here describes values owned by the host: the client creates them, mutates them and
//! decides when callbacks fire. This crate only gives them Rust types and mirrors the checks the
//! host performs on parameters before it accepts them.
//!
//! See <https://core.telegram.org/bots/webapps> for the upstream documentation.

pub mod button;
pub mod event;
pub mod failure;
pub mod init_data;
pub mod launch;
pub mod popup;
pub mod sensor;
pub mod share;
pub mod storage;
pub mod theme;
pub mod version;
pub mod viewport;

pub use init_data::{InitData, WebAppChat, WebAppInitData, WebAppUser};
pub use launch::LaunchParams;
pub use theme::{Color, ColorScheme, ThemeParams};
pub use version::{BotApiVersion, Feature};

/// Error while decoding host data or checking parameters for the host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, displaydoc::Display)]
pub enum Error {
    /// Required field `{0}` is missing
    MissingField(&'static str),
    /// Invalid value of `{field}`: {reason}
    InvalidField {
        /// Name of the field on the wire.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },
    /// Invalid color `{0}`
    InvalidColor(String),
    /// Invalid `{param}`: {reason}
    InvalidParam {
        /// Name of the parameter as the host names it.
        param: &'static str,
        /// What limit was violated.
        reason: &'static str,
    },
    /// `{feature}` requires Bot API {required}, but the client reports {reported}
    Unsupported {
        /// Gated member of the API.
        feature: Feature,
        /// Minimal version supporting `feature`.
        required: BotApiVersion,
        /// Version reported by the client.
        reported: BotApiVersion,
    },
    /// Invalid launch URL: {0}
    Url(String),
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::Url(e.to_string())
    }
}

/// Result of decoding or checking.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Shortcut to build [`Error::InvalidParam`] when `condition` is violated.
pub(crate) const fn ensure_param(
    condition: bool,
    param: &'static str,
    reason: &'static str,
) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::InvalidParam { param, reason })
    }
}

/// Count characters the way the host limits text lengths.
#[must_use]
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

//! Motion sensors, location and biometrics.

use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

use crate::{Result, char_len, ensure_param};

/// Minimal sampling interval in milliseconds.
pub const MIN_REFRESH_RATE: u32 = 20;
/// Maximal sampling interval in milliseconds.
pub const MAX_REFRESH_RATE: u32 = 1000;
/// Maximal length of a biometric prompt reason.
pub const MAX_BIOMETRIC_REASON_LEN: usize = 128;

/// Parameters of `Accelerometer.start` and `Gyroscope.start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorStartParams {
    /// Sampling interval in milliseconds.
    pub refresh_rate: u32,
}

impl Default for SensorStartParams {
    fn default() -> Self {
        Self {
            refresh_rate: MAX_REFRESH_RATE,
        }
    }
}

impl SensorStartParams {
    /// Check the limits the client enforces.
    ///
    /// # Errors
    ///
    /// Fails if `refresh_rate` is out of `20..=1000`.
    pub fn validate(&self) -> Result<()> {
        validate_refresh_rate(self.refresh_rate)
    }
}

/// Parameters of `DeviceOrientation.start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationStartParams {
    /// Sampling interval in milliseconds.
    pub refresh_rate: u32,
    /// Request absolute orientation data relative to magnetic north.
    #[serde(default)]
    pub need_absolute: bool,
}

impl Default for OrientationStartParams {
    fn default() -> Self {
        Self {
            refresh_rate: MAX_REFRESH_RATE,
            need_absolute: false,
        }
    }
}

impl OrientationStartParams {
    /// Check the limits the client enforces.
    ///
    /// # Errors
    ///
    /// Fails if `refresh_rate` is out of `20..=1000`.
    pub fn validate(&self) -> Result<()> {
        validate_refresh_rate(self.refresh_rate)
    }
}

/// Check that sampling interval is within client limits.
fn validate_refresh_rate(refresh_rate: u32) -> Result<()> {
    ensure_param(
        (MIN_REFRESH_RATE..=MAX_REFRESH_RATE).contains(&refresh_rate),
        "refresh_rate",
        "must be between 20 and 1000 milliseconds",
    )
}

/// Sample of a three-axis sensor.
///
/// Acceleration in m/s² for the accelerometer, rotation rate in rad/s for the gyroscope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[allow(
    clippy::missing_docs_in_private_items,
    reason = "fields are named after their wire values"
)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Sample of the device orientation in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Whether the data is relative to magnetic north.
    pub absolute: bool,
    /// Rotation around the Z axis.
    pub alpha: f64,
    /// Rotation around the X axis.
    pub beta: f64,
    /// Rotation around the Y axis.
    pub gamma: f64,
}

/// `Bot API 8.0+` Location of the device.
///
/// Optional values are `None` when the device cannot provide them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Altitude above sea level in meters.
    #[serde(default)]
    pub altitude: Option<f64>,
    /// Direction of movement in degrees, 0 is north.
    #[serde(default)]
    pub course: Option<f64>,
    /// Speed in m/s.
    #[serde(default)]
    pub speed: Option<f64>,
    /// Accuracy of latitude and longitude in meters.
    #[serde(default)]
    pub horizontal_accuracy: Option<f64>,
    /// Accuracy of altitude in meters.
    #[serde(default)]
    pub vertical_accuracy: Option<f64>,
    /// Accuracy of course in degrees.
    #[serde(default)]
    pub course_accuracy: Option<f64>,
    /// Accuracy of speed in m/s.
    #[serde(default)]
    pub speed_accuracy: Option<f64>,
}

/// Kind of biometrics available on the device.
#[derive(
    Debug, Display, FromStr, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[display(style = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BiometricType {
    /// Fingerprint sensor.
    Finger,
    /// Face recognition.
    Face,
    /// Anything else, or biometrics are unavailable.
    #[default]
    Unknown,
}

/// Parameters of `BiometricManager.requestAccess`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiometricRequestAccessParams {
    /// Text shown to the user explaining why access is requested, up to 128 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Parameters of `BiometricManager.authenticate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiometricAuthenticateParams {
    /// Text shown to the user explaining why authentication is requested, up to 128 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl BiometricRequestAccessParams {
    /// Check the limits the client enforces.
    ///
    /// # Errors
    ///
    /// Fails if `reason` is longer than 128 characters.
    pub fn validate(&self) -> Result<()> {
        validate_reason(self.reason.as_deref())
    }
}

impl BiometricAuthenticateParams {
    /// Check the limits the client enforces.
    ///
    /// # Errors
    ///
    /// Fails if `reason` is longer than 128 characters.
    pub fn validate(&self) -> Result<()> {
        validate_reason(self.reason.as_deref())
    }
}

/// Check biometric prompt reason length.
fn validate_reason(reason: Option<&str>) -> Result<()> {
    ensure_param(
        reason.is_none_or(|reason| char_len(reason.trim()) <= MAX_BIOMETRIC_REASON_LEN),
        "reason",
        "must be at most 128 characters",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn refresh_rate_bounds() {
        assert!(SensorStartParams::default().validate().is_ok());
        assert!(SensorStartParams { refresh_rate: 20 }.validate().is_ok());
        assert_eq!(
            SensorStartParams { refresh_rate: 19 }.validate(),
            Err(Error::InvalidParam {
                param: "refresh_rate",
                reason: "must be between 20 and 1000 milliseconds",
            })
        );
        assert!(
            OrientationStartParams {
                refresh_rate: 1001,
                need_absolute: true,
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn biometric_reason_is_limited() {
        assert!(BiometricAuthenticateParams::default().validate().is_ok());
        assert!(
            BiometricRequestAccessParams {
                reason: Some("a".repeat(128)),
            }
            .validate()
            .is_ok()
        );
        assert!(
            BiometricAuthenticateParams {
                reason: Some("a".repeat(129)),
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn biometric_type_defaults_to_unknown() {
        assert_eq!(BiometricType::default(), BiometricType::Unknown);
        assert_eq!(BiometricType::Face.to_string(), "face");
    }
}

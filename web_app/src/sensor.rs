//! `Bot API 8.0+` Motion sensors.
//!
//! Readings are refreshed by the client while the sensor is started. Subscribe to the
//! `*Changed` events to get notified about new samples.

use tg_webapp_data_model::{
    Feature,
    sensor::{Orientation, OrientationStartParams, SensorStartParams, Vector3},
};
use wasm_bindgen::JsValue;

use crate::{
    Error, Result, WebApp,
    js::{callback, flag, to_js},
    sys,
};

/// Sensors reporting a three-axis vector.
macro_rules! vector_sensor {
    ($(#[$meta:meta])* $sensor:ident, $accessor:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $sensor {
            /// Object owned by the client.
            raw: sys::$sensor,
        }

        impl $sensor {
            /// Whether the client is sampling the sensor.
            #[must_use]
            pub fn is_started(&self) -> bool {
                self.raw.is_started()
            }

            /// Last sample. All zeros until started.
            #[must_use]
            pub fn reading(&self) -> Vector3 {
                Vector3 {
                    x: self.raw.x(),
                    y: self.raw.y(),
                    z: self.raw.z(),
                }
            }

            /// Start tracking. Resolves to `true` if started.
            ///
            /// # Errors
            ///
            /// Fails on invalid refresh rate or if the client rejects the call.
            pub async fn start(&self, params: SensorStartParams) -> Result<bool> {
                params.validate()?;
                let (function, started) = callback(|started: JsValue| flag(&started));
                let _raw = self
                    .raw
                    .start(&to_js(&params)?, &function)
                    .map_err(|e| Error::host(&e))?;
                started.wait().await
            }

            /// Stop tracking. Resolves to `true` if stopped.
            ///
            /// # Errors
            ///
            /// Never fails on a conforming client.
            pub async fn stop(&self) -> Result<bool> {
                let (function, stopped) = callback(|stopped: JsValue| flag(&stopped));
                let _raw = self.raw.stop(&function);
                stopped.wait().await
            }
        }

        impl WebApp {
            #[doc = concat!("`Bot API 8.0+` [`", stringify!($sensor), "`] controller.")]
            ///
            /// # Errors
            ///
            /// Fails on older clients.
            pub fn $accessor(&self) -> Result<$sensor> {
                self.ensure(Feature::$sensor)?;
                Ok($sensor {
                    raw: self.raw().$accessor(),
                })
            }
        }
    };
}

vector_sensor!(
    /// Acceleration along the device axes in m/s².
    Accelerometer,
    accelerometer
);

vector_sensor!(
    /// Rotation rate around the device axes in rad/s.
    Gyroscope,
    gyroscope
);

/// Orientation of the device in radians.
#[derive(Debug, Clone)]
pub struct DeviceOrientation {
    /// Object owned by the client.
    raw: sys::DeviceOrientation,
}

impl DeviceOrientation {
    /// Whether the client is sampling the sensor.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.raw.is_started()
    }

    /// Last sample.
    #[must_use]
    pub fn reading(&self) -> Orientation {
        Orientation {
            absolute: self.raw.absolute(),
            alpha: self.raw.alpha(),
            beta: self.raw.beta(),
            gamma: self.raw.gamma(),
        }
    }

    /// Start tracking. Resolves to `true` if started.
    ///
    /// # Errors
    ///
    /// Fails on invalid refresh rate or if the client rejects the call.
    pub async fn start(&self, params: OrientationStartParams) -> Result<bool> {
        params.validate()?;
        let (function, started) = callback(|started: JsValue| flag(&started));
        let _raw = self
            .raw
            .start(&to_js(&params)?, &function)
            .map_err(|e| Error::host(&e))?;
        started.wait().await
    }

    /// Stop tracking. Resolves to `true` if stopped.
    ///
    /// # Errors
    ///
    /// Never fails on a conforming client.
    pub async fn stop(&self) -> Result<bool> {
        let (function, stopped) = callback(|stopped: JsValue| flag(&stopped));
        let _raw = self.raw.stop(&function);
        stopped.wait().await
    }
}

impl WebApp {
    /// `Bot API 8.0+` Device orientation controller.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn device_orientation(&self) -> Result<DeviceOrientation> {
        self.ensure(Feature::DeviceOrientation)?;
        Ok(DeviceOrientation {
            raw: self.raw().device_orientation(),
        })
    }
}

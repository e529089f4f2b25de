//! `Bot API 8.0+` Location of the user.

use tg_webapp_data_model::{Feature, sensor::LocationData};
use wasm_bindgen::JsValue;

use crate::{
    Result, WebApp,
    js::{callback, from_js},
    sys,
};

/// Location controller. Call [`LocationManager::init()`] before anything else.
#[derive(Debug, Clone)]
pub struct LocationManager {
    /// Object owned by the client.
    raw: sys::LocationManager,
}

impl LocationManager {
    /// Whether [`LocationManager::init()`] has completed.
    #[must_use]
    pub fn is_inited(&self) -> bool {
        self.raw.is_inited()
    }

    /// Whether location can be requested on this device.
    #[must_use]
    pub fn is_location_available(&self) -> bool {
        self.raw.is_location_available()
    }

    /// Whether the user was already asked for permission.
    #[must_use]
    pub fn is_access_requested(&self) -> bool {
        self.raw.is_access_requested()
    }

    /// Whether the user granted permission.
    #[must_use]
    pub fn is_access_granted(&self) -> bool {
        self.raw.is_access_granted()
    }

    /// Initialize the manager. Returns at once if it is already initialized, the client never
    /// calls back in that case.
    ///
    /// # Errors
    ///
    /// Never fails on a conforming client.
    pub async fn init(&self) -> Result<()> {
        if self.is_inited() {
            return Ok(());
        }
        let (function, ready) = callback(|_: JsValue| ());
        let _raw = self.raw.init(&function);
        ready.wait().await
    }

    /// Current location, or `None` if access was denied.
    ///
    /// # Errors
    ///
    /// Fails if the client passes malformed data.
    pub async fn get_location(&self) -> Result<Option<LocationData>> {
        let (function, location) = callback(|location: JsValue| from_js(&location));
        let _raw = self.raw.get_location(&function);
        location.wait().await?
    }

    /// Open location settings of the bot. Only works after access was requested and denied, in
    /// response to a user interaction.
    pub fn open_settings(&self) {
        let _raw = self.raw.open_settings();
    }
}

impl WebApp {
    /// `Bot API 8.0+` Location controller.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn location_manager(&self) -> Result<LocationManager> {
        self.ensure(Feature::LocationManager)?;
        Ok(LocationManager {
            raw: self.raw().location_manager(),
        })
    }
}

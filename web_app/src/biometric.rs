//! `Bot API 7.2+` Biometric authentication.

use tg_webapp_data_model::{
    Feature,
    event::BiometricAuthRequested,
    sensor::{BiometricAuthenticateParams, BiometricRequestAccessParams, BiometricType},
};
use wasm_bindgen::JsValue;

use crate::{
    Error, Result, WebApp,
    js::{callback, callback2, flag, to_js},
    sys,
};

/// Biometrics controller. Call [`BiometricManager::init()`] before anything else.
#[derive(Debug, Clone)]
pub struct BiometricManager {
    /// Object owned by the client.
    raw: sys::BiometricManager,
}

impl BiometricManager {
    /// Whether [`BiometricManager::init()`] has completed.
    #[must_use]
    pub fn is_inited(&self) -> bool {
        self.raw.is_inited()
    }

    /// Whether biometrics can be used on this device.
    #[must_use]
    pub fn is_biometric_available(&self) -> bool {
        self.raw.is_biometric_available()
    }

    /// Type of the available sensor. Unknown values map to [`BiometricType::Unknown`].
    #[must_use]
    pub fn biometric_type(&self) -> BiometricType {
        self.raw.biometric_type().parse().unwrap_or_default()
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

    /// Whether a token is saved in the secure storage of the device.
    #[must_use]
    pub fn is_biometric_token_saved(&self) -> bool {
        self.raw.is_biometric_token_saved()
    }

    /// Unique identifier of the device for the bot.
    #[must_use]
    pub fn device_id(&self) -> String {
        self.raw.device_id()
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

    /// Ask for permission to use biometrics. Resolves to `true` if granted.
    ///
    /// # Errors
    ///
    /// Fails on a too long reason or if the client rejects the call, e.g. before
    /// [`BiometricManager::init()`].
    pub async fn request_access(&self, params: &BiometricRequestAccessParams) -> Result<bool> {
        params.validate()?;
        let (function, granted) = callback(|granted: JsValue| flag(&granted));
        let _raw = self
            .raw
            .request_access(&to_js(params)?, &function)
            .map_err(|e| Error::host(&e))?;
        granted.wait().await
    }

    /// Authenticate the user. On success resolves with the saved token.
    ///
    /// # Errors
    ///
    /// Fails on a too long reason or if the client rejects the call, e.g. without access granted.
    pub async fn authenticate(
        &self,
        params: &BiometricAuthenticateParams,
    ) -> Result<BiometricAuthRequested> {
        params.validate()?;
        let (function, outcome) = callback2(|authenticated: JsValue, token: JsValue| {
            BiometricAuthRequested {
                is_authenticated: flag(&authenticated),
                biometric_token: token.as_string(),
            }
        });
        let _raw = self
            .raw
            .authenticate(&to_js(params)?, &function)
            .map_err(|e| Error::host(&e))?;
        outcome.wait().await
    }

    /// Save `token` in the secure storage of the device. Empty `token` removes it.
    /// Resolves to `true` if updated.
    ///
    /// # Errors
    ///
    /// Fails if the client rejects the call.
    pub async fn update_biometric_token(&self, token: &str) -> Result<bool> {
        let (function, updated) = callback(|updated: JsValue| flag(&updated));
        let _raw = self
            .raw
            .update_biometric_token(token, &function)
            .map_err(|e| Error::host(&e))?;
        updated.wait().await
    }

    /// Open biometric settings of the bot. Only works after access was requested and denied, in
    /// response to a user interaction.
    pub fn open_settings(&self) {
        let _raw = self.raw.open_settings();
    }
}

impl WebApp {
    /// `Bot API 7.2+` Biometrics controller.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn biometric_manager(&self) -> Result<BiometricManager> {
        self.ensure(Feature::BiometricManager)?;
        Ok(BiometricManager {
            raw: self.raw().biometric_manager(),
        })
    }
}

//! Raw declarations of the object graph injected by the Telegram JS script.
//!
//! These mirror the client API one to one. Prefer the typed wrappers from the crate root which
//! check versions and parameters before calling into the client.

#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    reason = "bindings mirror the host API one-to-one"
)]

use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Telegram Web App object initialized by a Telegram JS script: <https://telegram.org/js/telegram-web-app.js>.
    ///
    /// For all possible methods and fields see <https://core.telegram.org/bots/webapps#initializing-mini-apps>.
    #[derive(Debug, Clone)]
    pub type WebApp;

    /// A string with raw data transferred to the Mini App, convenient for validating data.
    #[wasm_bindgen(method, getter, js_name = initData)]
    pub fn init_data(this: &WebApp) -> String;

    /// An object with input data transferred to the Mini App. Not to be trusted.
    #[wasm_bindgen(method, getter, js_name = initDataUnsafe)]
    pub fn init_data_unsafe(this: &WebApp) -> JsValue;

    /// The version of the Bot API available in the user's Telegram app.
    #[wasm_bindgen(method, getter)]
    pub fn version(this: &WebApp) -> String;

    /// The name of the platform of the user's Telegram app.
    #[wasm_bindgen(method, getter)]
    pub fn platform(this: &WebApp) -> String;

    #[wasm_bindgen(method, getter, js_name = colorScheme)]
    pub fn color_scheme(this: &WebApp) -> String;

    #[wasm_bindgen(method, getter, js_name = themeParams)]
    pub fn theme_params(this: &WebApp) -> JsValue;

    #[wasm_bindgen(method, getter, js_name = isActive)]
    pub fn is_active(this: &WebApp) -> bool;

    #[wasm_bindgen(method, getter, js_name = isExpanded)]
    pub fn is_expanded(this: &WebApp) -> bool;

    #[wasm_bindgen(method, getter, js_name = viewportHeight)]
    pub fn viewport_height(this: &WebApp) -> f64;

    #[wasm_bindgen(method, getter, js_name = viewportStableHeight)]
    pub fn viewport_stable_height(this: &WebApp) -> f64;

    #[wasm_bindgen(method, getter, js_name = headerColor)]
    pub fn header_color(this: &WebApp) -> String;

    #[wasm_bindgen(method, getter, js_name = backgroundColor)]
    pub fn background_color(this: &WebApp) -> String;

    #[wasm_bindgen(method, getter, js_name = bottomBarColor)]
    pub fn bottom_bar_color(this: &WebApp) -> String;

    #[wasm_bindgen(method, getter, js_name = isClosingConfirmationEnabled)]
    pub fn is_closing_confirmation_enabled(this: &WebApp) -> bool;

    #[wasm_bindgen(method, getter, js_name = isVerticalSwipesEnabled)]
    pub fn is_vertical_swipes_enabled(this: &WebApp) -> bool;

    #[wasm_bindgen(method, getter, js_name = isFullscreen)]
    pub fn is_fullscreen(this: &WebApp) -> bool;

    #[wasm_bindgen(method, getter, js_name = isOrientationLocked)]
    pub fn is_orientation_locked(this: &WebApp) -> bool;

    #[wasm_bindgen(method, getter, js_name = safeAreaInset)]
    pub fn safe_area_inset(this: &WebApp) -> JsValue;

    #[wasm_bindgen(method, getter, js_name = contentSafeAreaInset)]
    pub fn content_safe_area_inset(this: &WebApp) -> JsValue;

    #[wasm_bindgen(method, getter, js_name = BackButton)]
    pub fn back_button(this: &WebApp) -> BackButton;

    #[wasm_bindgen(method, getter, js_name = MainButton)]
    pub fn main_button(this: &WebApp) -> BottomButton;

    #[wasm_bindgen(method, getter, js_name = SecondaryButton)]
    pub fn secondary_button(this: &WebApp) -> BottomButton;

    #[wasm_bindgen(method, getter, js_name = SettingsButton)]
    pub fn settings_button(this: &WebApp) -> SettingsButton;

    #[wasm_bindgen(method, getter, js_name = HapticFeedback)]
    pub fn haptic_feedback(this: &WebApp) -> HapticFeedback;

    #[wasm_bindgen(method, getter, js_name = CloudStorage)]
    pub fn cloud_storage(this: &WebApp) -> CloudStorage;

    #[wasm_bindgen(method, getter, js_name = BiometricManager)]
    pub fn biometric_manager(this: &WebApp) -> BiometricManager;

    #[wasm_bindgen(method, getter, js_name = Accelerometer)]
    pub fn accelerometer(this: &WebApp) -> Accelerometer;

    #[wasm_bindgen(method, getter, js_name = DeviceOrientation)]
    pub fn device_orientation(this: &WebApp) -> DeviceOrientation;

    #[wasm_bindgen(method, getter, js_name = Gyroscope)]
    pub fn gyroscope(this: &WebApp) -> Gyroscope;

    #[wasm_bindgen(method, getter, js_name = LocationManager)]
    pub fn location_manager(this: &WebApp) -> LocationManager;

    #[wasm_bindgen(method, js_name = isVersionAtLeast)]
    pub fn is_version_at_least(this: &WebApp, version: &str) -> bool;

    #[wasm_bindgen(method, catch, js_name = setHeaderColor)]
    pub fn set_header_color(this: &WebApp, color: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = setBackgroundColor)]
    pub fn set_background_color(this: &WebApp, color: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = setBottomBarColor)]
    pub fn set_bottom_bar_color(this: &WebApp, color: &str) -> Result<(), JsValue>;

    /// A method that enables a confirmation dialog while the user is trying to close the Mini App.
    #[wasm_bindgen(method, js_name = enableClosingConfirmation)]
    pub fn enable_closing_confirmation(this: &WebApp);

    #[wasm_bindgen(method, js_name = disableClosingConfirmation)]
    pub fn disable_closing_confirmation(this: &WebApp);

    #[wasm_bindgen(method, js_name = enableVerticalSwipes)]
    pub fn enable_vertical_swipes(this: &WebApp);

    #[wasm_bindgen(method, js_name = disableVerticalSwipes)]
    pub fn disable_vertical_swipes(this: &WebApp);

    #[wasm_bindgen(method, js_name = requestFullscreen)]
    pub fn request_fullscreen(this: &WebApp);

    #[wasm_bindgen(method, js_name = exitFullscreen)]
    pub fn exit_fullscreen(this: &WebApp);

    #[wasm_bindgen(method, js_name = lockOrientation)]
    pub fn lock_orientation(this: &WebApp);

    #[wasm_bindgen(method, js_name = unlockOrientation)]
    pub fn unlock_orientation(this: &WebApp);

    #[wasm_bindgen(method, js_name = addToHomeScreen)]
    pub fn add_to_home_screen(this: &WebApp);

    #[wasm_bindgen(method, js_name = checkHomeScreenStatus)]
    pub fn check_home_screen_status(this: &WebApp, callback: &JsValue);

    #[wasm_bindgen(method, js_name = onEvent)]
    pub fn on_event(this: &WebApp, event_type: &str, handler: &Function);

    #[wasm_bindgen(method, js_name = offEvent)]
    pub fn off_event(this: &WebApp, event_type: &str, handler: &Function);

    /// A method used to send data to the bot.
    /// When this method is called, a service message is sent to the bot containing the data `data`
    /// of the length up to 4096 bytes, and the Mini App is closed.
    #[wasm_bindgen(method, catch, js_name = sendData)]
    pub fn send_data(this: &WebApp, data: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = switchInlineQuery)]
    pub fn switch_inline_query(
        this: &WebApp,
        query: &str,
        choose_chat_types: &JsValue,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = openLink)]
    pub fn open_link(this: &WebApp, url: &str, options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = openTelegramLink)]
    pub fn open_telegram_link(this: &WebApp, url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = openInvoice)]
    pub fn open_invoice(this: &WebApp, url: &str, callback: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = shareToStory)]
    pub fn share_to_story(this: &WebApp, media_url: &str, params: &JsValue)
    -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = shareMessage)]
    pub fn share_message(this: &WebApp, msg_id: &str, callback: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = setEmojiStatus)]
    pub fn set_emoji_status(
        this: &WebApp,
        custom_emoji_id: &str,
        params: &JsValue,
        callback: &JsValue,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = requestEmojiStatusAccess)]
    pub fn request_emoji_status_access(this: &WebApp, callback: &JsValue);

    #[wasm_bindgen(method, catch, js_name = downloadFile)]
    pub fn download_file(this: &WebApp, params: &JsValue, callback: &JsValue)
    -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = showPopup)]
    pub fn show_popup(this: &WebApp, params: &JsValue, callback: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = showAlert)]
    pub fn show_alert(this: &WebApp, message: &str, callback: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = showConfirm)]
    pub fn show_confirm(this: &WebApp, message: &str, callback: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = showScanQrPopup)]
    pub fn show_scan_qr_popup(
        this: &WebApp,
        params: &JsValue,
        callback: &JsValue,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = closeScanQrPopup)]
    pub fn close_scan_qr_popup(this: &WebApp);

    #[wasm_bindgen(method, js_name = readTextFromClipboard)]
    pub fn read_text_from_clipboard(this: &WebApp, callback: &JsValue);

    #[wasm_bindgen(method, js_name = requestWriteAccess)]
    pub fn request_write_access(this: &WebApp, callback: &JsValue);

    #[wasm_bindgen(method, js_name = requestContact)]
    pub fn request_contact(this: &WebApp, callback: &JsValue);

    #[wasm_bindgen(method)]
    pub fn ready(this: &WebApp);

    /// A method that expands the Mini App to the maximum available height.
    #[wasm_bindgen(method)]
    pub fn expand(this: &WebApp);

    #[wasm_bindgen(method)]
    pub fn close(this: &WebApp, options: &JsValue);
}

#[wasm_bindgen]
extern "C" {
    /// `MainButton` or `SecondaryButton` displayed at the bottom of the Mini App.
    #[derive(Debug, Clone)]
    pub type BottomButton;

    #[wasm_bindgen(method, getter)]
    pub fn text(this: &BottomButton) -> String;

    #[wasm_bindgen(method, getter)]
    pub fn color(this: &BottomButton) -> String;

    #[wasm_bindgen(method, getter, js_name = textColor)]
    pub fn text_color(this: &BottomButton) -> String;

    #[wasm_bindgen(method, getter, js_name = isVisible)]
    pub fn is_visible(this: &BottomButton) -> bool;

    #[wasm_bindgen(method, getter, js_name = isActive)]
    pub fn is_active(this: &BottomButton) -> bool;

    #[wasm_bindgen(method, getter, js_name = hasShineEffect)]
    pub fn has_shine_effect(this: &BottomButton) -> bool;

    /// Position of the secondary button. `undefined` for the main one.
    #[wasm_bindgen(method, getter)]
    pub fn position(this: &BottomButton) -> Option<String>;

    #[wasm_bindgen(method, getter, js_name = isProgressVisible)]
    pub fn is_progress_visible(this: &BottomButton) -> bool;

    #[wasm_bindgen(method, catch, js_name = setText)]
    pub fn set_text(this: &BottomButton, text: &str) -> Result<BottomButton, JsValue>;

    #[wasm_bindgen(method, js_name = onClick)]
    pub fn on_click(this: &BottomButton, callback: &Function) -> BottomButton;

    #[wasm_bindgen(method, js_name = offClick)]
    pub fn off_click(this: &BottomButton, callback: &Function) -> BottomButton;

    #[wasm_bindgen(method)]
    pub fn show(this: &BottomButton) -> BottomButton;

    #[wasm_bindgen(method)]
    pub fn hide(this: &BottomButton) -> BottomButton;

    #[wasm_bindgen(method)]
    pub fn enable(this: &BottomButton) -> BottomButton;

    #[wasm_bindgen(method)]
    pub fn disable(this: &BottomButton) -> BottomButton;

    #[wasm_bindgen(method, js_name = showProgress)]
    pub fn show_progress(this: &BottomButton, leave_active: bool) -> BottomButton;

    #[wasm_bindgen(method, js_name = hideProgress)]
    pub fn hide_progress(this: &BottomButton) -> BottomButton;

    #[wasm_bindgen(method, catch, js_name = setParams)]
    pub fn set_params(this: &BottomButton, params: &JsValue) -> Result<BottomButton, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    /// Back button displayed in the header of the Mini App.
    #[derive(Debug, Clone)]
    pub type BackButton;

    #[wasm_bindgen(method, getter, js_name = isVisible)]
    pub fn is_visible(this: &BackButton) -> bool;

    #[wasm_bindgen(method, js_name = onClick)]
    pub fn on_click(this: &BackButton, callback: &Function) -> BackButton;

    #[wasm_bindgen(method, js_name = offClick)]
    pub fn off_click(this: &BackButton, callback: &Function) -> BackButton;

    #[wasm_bindgen(method)]
    pub fn show(this: &BackButton) -> BackButton;

    #[wasm_bindgen(method)]
    pub fn hide(this: &BackButton) -> BackButton;
}

#[wasm_bindgen]
extern "C" {
    /// Settings item in the context menu of the Mini App.
    #[derive(Debug, Clone)]
    pub type SettingsButton;

    #[wasm_bindgen(method, getter, js_name = isVisible)]
    pub fn is_visible(this: &SettingsButton) -> bool;

    #[wasm_bindgen(method, js_name = onClick)]
    pub fn on_click(this: &SettingsButton, callback: &Function) -> SettingsButton;

    #[wasm_bindgen(method, js_name = offClick)]
    pub fn off_click(this: &SettingsButton, callback: &Function) -> SettingsButton;

    #[wasm_bindgen(method)]
    pub fn show(this: &SettingsButton) -> SettingsButton;

    #[wasm_bindgen(method)]
    pub fn hide(this: &SettingsButton) -> SettingsButton;
}

#[wasm_bindgen]
extern "C" {
    /// Haptic feedback controller.
    #[derive(Debug, Clone)]
    pub type HapticFeedback;

    #[wasm_bindgen(method, js_name = impactOccurred)]
    pub fn impact_occurred(this: &HapticFeedback, style: &str) -> HapticFeedback;

    #[wasm_bindgen(method, js_name = notificationOccurred)]
    pub fn notification_occurred(this: &HapticFeedback, kind: &str) -> HapticFeedback;

    #[wasm_bindgen(method, js_name = selectionChanged)]
    pub fn selection_changed(this: &HapticFeedback) -> HapticFeedback;
}

#[wasm_bindgen]
extern "C" {
    /// Key-value storage in the Telegram cloud, scoped to the bot and the user.
    #[derive(Debug, Clone)]
    pub type CloudStorage;

    #[wasm_bindgen(method, catch, js_name = setItem)]
    pub fn set_item(
        this: &CloudStorage,
        key: &str,
        value: &str,
        callback: &JsValue,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = getItem)]
    pub fn get_item(this: &CloudStorage, key: &str, callback: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = getItems)]
    pub fn get_items(this: &CloudStorage, keys: &Array, callback: &JsValue)
    -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = removeItem)]
    pub fn remove_item(this: &CloudStorage, key: &str, callback: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = removeItems)]
    pub fn remove_items(
        this: &CloudStorage,
        keys: &Array,
        callback: &JsValue,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = getKeys)]
    pub fn get_keys(this: &CloudStorage, callback: &JsValue) -> Result<(), JsValue>;
}

#[wasm_bindgen]
extern "C" {
    /// Biometrics controller.
    #[derive(Debug, Clone)]
    pub type BiometricManager;

    #[wasm_bindgen(method, getter, js_name = isInited)]
    pub fn is_inited(this: &BiometricManager) -> bool;

    #[wasm_bindgen(method, getter, js_name = isBiometricAvailable)]
    pub fn is_biometric_available(this: &BiometricManager) -> bool;

    #[wasm_bindgen(method, getter, js_name = biometricType)]
    pub fn biometric_type(this: &BiometricManager) -> String;

    #[wasm_bindgen(method, getter, js_name = isAccessRequested)]
    pub fn is_access_requested(this: &BiometricManager) -> bool;

    #[wasm_bindgen(method, getter, js_name = isAccessGranted)]
    pub fn is_access_granted(this: &BiometricManager) -> bool;

    #[wasm_bindgen(method, getter, js_name = isBiometricTokenSaved)]
    pub fn is_biometric_token_saved(this: &BiometricManager) -> bool;

    #[wasm_bindgen(method, getter, js_name = deviceId)]
    pub fn device_id(this: &BiometricManager) -> String;

    #[wasm_bindgen(method)]
    pub fn init(this: &BiometricManager, callback: &JsValue) -> BiometricManager;

    #[wasm_bindgen(method, catch, js_name = requestAccess)]
    pub fn request_access(
        this: &BiometricManager,
        params: &JsValue,
        callback: &JsValue,
    ) -> Result<BiometricManager, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn authenticate(
        this: &BiometricManager,
        params: &JsValue,
        callback: &JsValue,
    ) -> Result<BiometricManager, JsValue>;

    #[wasm_bindgen(method, catch, js_name = updateBiometricToken)]
    pub fn update_biometric_token(
        this: &BiometricManager,
        token: &str,
        callback: &JsValue,
    ) -> Result<BiometricManager, JsValue>;

    #[wasm_bindgen(method, js_name = openSettings)]
    pub fn open_settings(this: &BiometricManager) -> BiometricManager;
}

#[wasm_bindgen]
extern "C" {
    /// Accelerometer controller.
    #[derive(Debug, Clone)]
    pub type Accelerometer;

    #[wasm_bindgen(method, getter, js_name = isStarted)]
    pub fn is_started(this: &Accelerometer) -> bool;

    #[wasm_bindgen(method, getter)]
    pub fn x(this: &Accelerometer) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn y(this: &Accelerometer) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn z(this: &Accelerometer) -> f64;

    #[wasm_bindgen(method, catch)]
    pub fn start(
        this: &Accelerometer,
        params: &JsValue,
        callback: &JsValue,
    ) -> Result<Accelerometer, JsValue>;

    #[wasm_bindgen(method)]
    pub fn stop(this: &Accelerometer, callback: &JsValue) -> Accelerometer;
}

#[wasm_bindgen]
extern "C" {
    /// Device orientation controller.
    #[derive(Debug, Clone)]
    pub type DeviceOrientation;

    #[wasm_bindgen(method, getter, js_name = isStarted)]
    pub fn is_started(this: &DeviceOrientation) -> bool;

    #[wasm_bindgen(method, getter)]
    pub fn absolute(this: &DeviceOrientation) -> bool;

    #[wasm_bindgen(method, getter)]
    pub fn alpha(this: &DeviceOrientation) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn beta(this: &DeviceOrientation) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn gamma(this: &DeviceOrientation) -> f64;

    #[wasm_bindgen(method, catch)]
    pub fn start(
        this: &DeviceOrientation,
        params: &JsValue,
        callback: &JsValue,
    ) -> Result<DeviceOrientation, JsValue>;

    #[wasm_bindgen(method)]
    pub fn stop(this: &DeviceOrientation, callback: &JsValue) -> DeviceOrientation;
}

#[wasm_bindgen]
extern "C" {
    /// Gyroscope controller.
    #[derive(Debug, Clone)]
    pub type Gyroscope;

    #[wasm_bindgen(method, getter, js_name = isStarted)]
    pub fn is_started(this: &Gyroscope) -> bool;

    #[wasm_bindgen(method, getter)]
    pub fn x(this: &Gyroscope) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn y(this: &Gyroscope) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn z(this: &Gyroscope) -> f64;

    #[wasm_bindgen(method, catch)]
    pub fn start(
        this: &Gyroscope,
        params: &JsValue,
        callback: &JsValue,
    ) -> Result<Gyroscope, JsValue>;

    #[wasm_bindgen(method)]
    pub fn stop(this: &Gyroscope, callback: &JsValue) -> Gyroscope;
}

#[wasm_bindgen]
extern "C" {
    /// Location controller.
    #[derive(Debug, Clone)]
    pub type LocationManager;

    #[wasm_bindgen(method, getter, js_name = isInited)]
    pub fn is_inited(this: &LocationManager) -> bool;

    #[wasm_bindgen(method, getter, js_name = isLocationAvailable)]
    pub fn is_location_available(this: &LocationManager) -> bool;

    #[wasm_bindgen(method, getter, js_name = isAccessRequested)]
    pub fn is_access_requested(this: &LocationManager) -> bool;

    #[wasm_bindgen(method, getter, js_name = isAccessGranted)]
    pub fn is_access_granted(this: &LocationManager) -> bool;

    #[wasm_bindgen(method)]
    pub fn init(this: &LocationManager, callback: &JsValue) -> LocationManager;

    #[wasm_bindgen(method, js_name = getLocation)]
    pub fn get_location(this: &LocationManager, callback: &JsValue) -> LocationManager;

    #[wasm_bindgen(method, js_name = openSettings)]
    pub fn open_settings(this: &LocationManager) -> LocationManager;
}

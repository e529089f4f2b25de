//! Typed handle to `window.Telegram.WebApp`.

use js_sys::{Array, Reflect};
use serde::Deserialize;
use tg_webapp_data_model::{
    BotApiVersion, Color, ColorScheme, Feature, InitData, ThemeParams,
    event::{HomeScreenStatus, InvoiceClosed, InvoiceStatus},
    launch::Platform,
    share::{
        self, DownloadFileParams, EmojiStatusParams, InlineQueryChatType, OpenLinkOptions,
        StoryShareParams,
    },
    theme::{BackgroundColor, BottomBarColor, HeaderColor},
    viewport::{CloseOptions, SafeAreaInset},
};
use wasm_bindgen::{JsCast as _, JsValue};

use crate::{
    Error, Result,
    js::{callback, flag, from_js, to_js},
    sys,
};

/// Get the Web App object initialized by the Telegram script.
///
/// # Errors
///
/// Fails if not running in a browser or the script wasn't loaded before the call.
pub fn web_app() -> Result<WebApp> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let telegram =
        Reflect::get(&window, &JsValue::from_str("Telegram")).map_err(|e| Error::host(&e))?;
    if telegram.is_undefined() {
        return Err(Error::NotLoaded);
    }
    let web_app =
        Reflect::get(&telegram, &JsValue::from_str("WebApp")).map_err(|e| Error::host(&e))?;
    if web_app.is_undefined() {
        return Err(Error::NotLoaded);
    }

    // `WebApp` is not a class, so checked casts fail on it.
    Ok(WebApp::from_raw(web_app.unchecked_into::<sys::WebApp>()))
}

/// Argument of the `openInvoice` callback.
#[derive(Deserialize)]
#[serde(untagged)]
enum InvoiceAnswer {
    /// Bare status.
    Status(InvoiceStatus),
    /// `invoiceClosed` payload.
    Event(InvoiceClosed),
}

impl From<InvoiceAnswer> for InvoiceStatus {
    fn from(answer: InvoiceAnswer) -> Self {
        match answer {
            InvoiceAnswer::Status(status) => status,
            InvoiceAnswer::Event(event) => event.status,
        }
    }
}

/// Telegram Web App with the version of the client resolved once.
#[derive(Debug, Clone)]
pub struct WebApp {
    /// Object owned by the client.
    raw: sys::WebApp,
    /// Parsed `WebApp.version`.
    version: BotApiVersion,
}

impl WebApp {
    /// Wrap a raw object.
    pub fn from_raw(raw: sys::WebApp) -> Self {
        let Ok(version) = raw.version().parse::<BotApiVersion>();
        Self { raw, version }
    }

    /// Underlying raw object.
    #[must_use]
    pub const fn raw(&self) -> &sys::WebApp {
        &self.raw
    }

    /// Bot API version reported by the client.
    #[must_use]
    pub const fn version(&self) -> &BotApiVersion {
        &self.version
    }

    /// Check if the client supports at least Bot API `version`.
    pub fn is_version_at_least(&self, version: &str) -> bool {
        let Ok(minimum) = version.parse::<BotApiVersion>();
        self.version.is_at_least(&minimum)
    }

    /// Check if the client supports `feature`.
    pub fn supports(&self, feature: Feature) -> bool {
        self.version.is_at_least(&feature.min_version())
    }

    /// Fail with [`Error::Model`] if `feature` is newer than the client.
    pub(crate) fn ensure(&self, feature: Feature) -> Result<()> {
        self.version.ensure(feature).map_err(Into::into)
    }

    /// Raw init data and its parsed form.
    ///
    /// # Errors
    ///
    /// Fails if the client passed malformed data.
    pub fn init_data(&self) -> Result<InitData> {
        InitData::new(self.raw.init_data()).map_err(Into::into)
    }

    /// Platform of the client.
    #[must_use]
    pub fn platform(&self) -> Platform {
        Platform::from_name(&self.raw.platform())
    }

    /// Current color scheme. Unknown values fall back to light.
    #[must_use]
    pub fn color_scheme(&self) -> ColorScheme {
        self.raw.color_scheme().parse().unwrap_or_default()
    }

    /// Current theme.
    ///
    /// # Errors
    ///
    /// Fails if the client passed a malformed color.
    pub fn theme_params(&self) -> Result<ThemeParams> {
        from_js(&self.raw.theme_params())
    }

    /// `Bot API 8.0+` Whether the Mini App is currently active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.raw.is_active()
    }

    /// Whether the Mini App is expanded to the maximum available height.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.raw.is_expanded()
    }

    /// Current height of the visible area in pixels.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.raw.viewport_height()
    }

    /// Height of the visible area in its last stable state.
    #[must_use]
    pub fn viewport_stable_height(&self) -> f64 {
        self.raw.viewport_stable_height()
    }

    /// Current header color.
    ///
    /// # Errors
    ///
    /// Fails if the client reports a malformed color.
    pub fn header_color(&self) -> Result<Color> {
        self.raw.header_color().parse().map_err(Into::into)
    }

    /// Current background color.
    ///
    /// # Errors
    ///
    /// Fails if the client reports a malformed color.
    pub fn background_color(&self) -> Result<Color> {
        self.raw.background_color().parse().map_err(Into::into)
    }

    /// `Bot API 7.10+` Current bottom bar color.
    ///
    /// # Errors
    ///
    /// Fails if the client reports a malformed color.
    pub fn bottom_bar_color(&self) -> Result<Color> {
        self.ensure(Feature::BottomBarColor)?;
        self.raw.bottom_bar_color().parse().map_err(Into::into)
    }

    /// `Bot API 6.1+` Set the header color. Explicit colors need `6.9+`.
    ///
    /// # Errors
    ///
    /// Fails on older clients or if the client rejects the color.
    pub fn set_header_color(&self, color: HeaderColor) -> Result<()> {
        self.ensure(color.required_feature())?;
        self.raw
            .set_header_color(&color.to_string())
            .map_err(|e| Error::host(&e))
    }

    /// `Bot API 6.1+` Set the background color.
    ///
    /// # Errors
    ///
    /// Fails on older clients or if the client rejects the color.
    pub fn set_background_color(&self, color: BackgroundColor) -> Result<()> {
        self.ensure(Feature::BackgroundColor)?;
        self.raw
            .set_background_color(&color.to_string())
            .map_err(|e| Error::host(&e))
    }

    /// `Bot API 7.10+` Set the bottom bar color.
    ///
    /// # Errors
    ///
    /// Fails on older clients or if the client rejects the color.
    pub fn set_bottom_bar_color(&self, color: BottomBarColor) -> Result<()> {
        self.ensure(Feature::BottomBarColor)?;
        self.raw
            .set_bottom_bar_color(&color.to_string())
            .map_err(|e| Error::host(&e))
    }

    /// `Bot API 6.2+` Whether the user is asked to confirm closing the Mini App.
    #[must_use]
    pub fn is_closing_confirmation_enabled(&self) -> bool {
        self.raw.is_closing_confirmation_enabled()
    }

    /// `Bot API 6.2+` Ask the user for confirmation when closing the Mini App.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn enable_closing_confirmation(&self) -> Result<()> {
        self.ensure(Feature::ClosingConfirmation)?;
        self.raw.enable_closing_confirmation();
        Ok(())
    }

    /// `Bot API 6.2+`
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn disable_closing_confirmation(&self) -> Result<()> {
        self.ensure(Feature::ClosingConfirmation)?;
        self.raw.disable_closing_confirmation();
        Ok(())
    }

    /// `Bot API 7.7+` Whether swiping down closes or minimizes the Mini App.
    #[must_use]
    pub fn is_vertical_swipes_enabled(&self) -> bool {
        self.raw.is_vertical_swipes_enabled()
    }

    /// `Bot API 7.7+` Allow closing or minimizing the Mini App with a vertical swipe.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn enable_vertical_swipes(&self) -> Result<()> {
        self.ensure(Feature::VerticalSwipes)?;
        self.raw.enable_vertical_swipes();
        Ok(())
    }

    /// `Bot API 7.7+`
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn disable_vertical_swipes(&self) -> Result<()> {
        self.ensure(Feature::VerticalSwipes)?;
        self.raw.disable_vertical_swipes();
        Ok(())
    }

    /// `Bot API 8.0+` Whether the Mini App is in fullscreen mode.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.raw.is_fullscreen()
    }

    /// `Bot API 8.0+` Ask the client to enter fullscreen.
    ///
    /// The outcome is reported with `fullscreenChanged` or `fullscreenFailed` events.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn request_fullscreen(&self) -> Result<()> {
        self.ensure(Feature::Fullscreen)?;
        self.raw.request_fullscreen();
        Ok(())
    }

    /// `Bot API 8.0+`
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn exit_fullscreen(&self) -> Result<()> {
        self.ensure(Feature::Fullscreen)?;
        self.raw.exit_fullscreen();
        Ok(())
    }

    /// `Bot API 8.0+` Whether the orientation is locked.
    #[must_use]
    pub fn is_orientation_locked(&self) -> bool {
        self.raw.is_orientation_locked()
    }

    /// `Bot API 8.0+` Keep the current screen orientation.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn lock_orientation(&self) -> Result<()> {
        self.ensure(Feature::OrientationLock)?;
        self.raw.lock_orientation();
        Ok(())
    }

    /// `Bot API 8.0+`
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn unlock_orientation(&self) -> Result<()> {
        self.ensure(Feature::OrientationLock)?;
        self.raw.unlock_orientation();
        Ok(())
    }

    /// `Bot API 8.0+` Insets of the system UI.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn safe_area_inset(&self) -> Result<SafeAreaInset> {
        self.ensure(Feature::SafeArea)?;
        from_js(&self.raw.safe_area_inset())
    }

    /// `Bot API 8.0+` Insets of the Telegram UI.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn content_safe_area_inset(&self) -> Result<SafeAreaInset> {
        self.ensure(Feature::SafeArea)?;
        from_js(&self.raw.content_safe_area_inset())
    }

    /// `Bot API 8.0+` Suggest adding the Mini App to the home screen.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn add_to_home_screen(&self) -> Result<()> {
        self.ensure(Feature::HomeScreen)?;
        self.raw.add_to_home_screen();
        Ok(())
    }

    /// `Bot API 8.0+` Whether the Mini App is on the home screen.
    ///
    /// # Errors
    ///
    /// Fails on older clients or if the client reports an unknown status.
    pub async fn check_home_screen_status(&self) -> Result<HomeScreenStatus> {
        self.ensure(Feature::HomeScreen)?;
        let (function, status) = callback(|status: JsValue| from_js(&status));
        self.raw.check_home_screen_status(&function);
        status.wait().await?
    }

    /// Send `data` to the bot and close the Mini App.
    ///
    /// Only available for Mini Apps launched from a keyboard button.
    ///
    /// # Errors
    ///
    /// Fails if `data` is empty or longer than 4096 bytes, or if the client rejects the call.
    pub fn send_data(&self, data: &str) -> Result<()> {
        share::validate_send_data(data)?;
        self.raw.send_data(data).map_err(|e| Error::host(&e))
    }

    /// `Bot API 6.7+` Insert the bot's username and `query` into the input field of a chat.
    ///
    /// Empty `chat_types` inserts into the current chat, otherwise the user chooses a chat of one of
    /// these types.
    ///
    /// # Errors
    ///
    /// Fails on older clients, on invalid arguments or if the client rejects the call.
    pub fn switch_inline_query(
        &self,
        query: &str,
        chat_types: &[InlineQueryChatType],
    ) -> Result<()> {
        self.ensure(Feature::SwitchInlineQuery)?;
        share::validate_inline_query(query, chat_types)?;
        let chat_types = if chat_types.is_empty() {
            JsValue::UNDEFINED
        } else {
            chat_types
                .iter()
                .map(|chat_type| JsValue::from_str(&chat_type.to_string()))
                .collect::<Array>()
                .into()
        };
        self.raw
            .switch_inline_query(query, &chat_types)
            .map_err(|e| Error::host(&e))
    }

    /// Open `url` in an external browser.
    ///
    /// # Errors
    ///
    /// Fails if `url` is not an http(s) link, if instant view is requested on a client older than
    /// `6.4` or if the client rejects the call.
    pub fn open_link(&self, url: &str, options: OpenLinkOptions) -> Result<()> {
        share::validate_link(url)?;
        if let Some(feature) = options.required_feature() {
            self.ensure(feature)?;
        }
        self.raw
            .open_link(url, &to_js(&options)?)
            .map_err(|e| Error::host(&e))
    }

    /// Open a `t.me` link inside Telegram.
    ///
    /// # Errors
    ///
    /// Fails if `url` is not a `t.me` link or the client rejects the call.
    pub fn open_telegram_link(&self, url: &str) -> Result<()> {
        share::validate_telegram_link(url)?;
        self.raw
            .open_telegram_link(url)
            .map_err(|e| Error::host(&e))
    }

    /// `Bot API 6.1+` Open an invoice and wait until it's closed.
    ///
    /// # Errors
    ///
    /// Fails on older clients or if the client rejects the link.
    pub async fn open_invoice(&self, url: &str) -> Result<InvoiceStatus> {
        self.ensure(Feature::Invoice)?;
        let (function, status) = callback(|status: JsValue| {
            from_js::<InvoiceAnswer>(&status).map(InvoiceStatus::from)
        });
        self.raw
            .open_invoice(url, &function)
            .map_err(|e| Error::host(&e))?;
        status.wait().await?
    }

    /// `Bot API 7.8+` Open the native story editor with `media_url`.
    ///
    /// # Errors
    ///
    /// Fails on older clients, on invalid arguments or if the client rejects the call.
    pub fn share_to_story(&self, media_url: &str, params: &StoryShareParams) -> Result<()> {
        self.ensure(Feature::ShareToStory)?;
        share::validate_link(media_url)?;
        params.validate()?;
        self.raw
            .share_to_story(media_url, &to_js(params)?)
            .map_err(|e| Error::host(&e))
    }

    /// `Bot API 8.0+` Share a message prepared by the bot. Resolves to `true` if it was sent.
    ///
    /// # Errors
    ///
    /// Fails on older clients or if the client rejects the call.
    pub async fn share_message(&self, msg_id: &str) -> Result<bool> {
        self.ensure(Feature::ShareMessage)?;
        let (function, sent) = callback(|sent: JsValue| flag(&sent));
        self.raw
            .share_message(msg_id, &function)
            .map_err(|e| Error::host(&e))?;
        sent.wait().await
    }

    /// `Bot API 8.0+` Set the user's emoji status. Resolves to `true` if it was set.
    ///
    /// # Errors
    ///
    /// Fails on older clients, on invalid arguments or if the client rejects the call.
    pub async fn set_emoji_status(
        &self,
        custom_emoji_id: &str,
        params: EmojiStatusParams,
    ) -> Result<bool> {
        self.ensure(Feature::EmojiStatus)?;
        params.validate()?;
        let (function, set) = callback(|set: JsValue| flag(&set));
        self.raw
            .set_emoji_status(custom_emoji_id, &to_js(&params)?, &function)
            .map_err(|e| Error::host(&e))?;
        set.wait().await
    }

    /// `Bot API 8.0+` Ask for permission to set the emoji status. Resolves to `true` if granted.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub async fn request_emoji_status_access(&self) -> Result<bool> {
        self.ensure(Feature::EmojiStatus)?;
        let (function, allowed) = callback(|allowed: JsValue| flag(&allowed));
        self.raw.request_emoji_status_access(&function);
        allowed.wait().await
    }

    /// `Bot API 8.0+` Ask the user to download a file. Resolves to `true` if accepted.
    ///
    /// # Errors
    ///
    /// Fails on older clients, on invalid arguments or if the client rejects the call.
    pub async fn download_file(&self, params: &DownloadFileParams) -> Result<bool> {
        self.ensure(Feature::DownloadFile)?;
        params.validate()?;
        let (function, accepted) = callback(|accepted: JsValue| flag(&accepted));
        self.raw
            .download_file(&to_js(params)?, &function)
            .map_err(|e| Error::host(&e))?;
        accepted.wait().await
    }

    /// Tell the client the Mini App is ready to be displayed.
    pub fn ready(&self) {
        self.raw.ready();
    }

    /// Expand the Mini App to the maximum available height.
    pub fn expand(&self) {
        self.raw.expand();
    }

    /// Close the Mini App.
    ///
    /// # Errors
    ///
    /// Fails if `return_back` is set on a client older than `7.6`.
    pub fn close(&self, options: CloseOptions) -> Result<()> {
        if options.return_back.is_some() {
            self.ensure(Feature::CloseReturnBack)?;
        }
        self.raw.close(&to_js(&options)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "it's ok in tests")]

    use super::*;

    #[test]
    fn invoice_answer_accepts_status_and_event() {
        let bare: InvoiceAnswer = serde_json::from_str(r#""paid""#).expect("Failed to decode");
        assert_eq!(InvoiceStatus::from(bare), InvoiceStatus::Paid);

        let event: InvoiceAnswer =
            serde_json::from_str(r#"{"url":"https://t.me/$abc","status":"cancelled"}"#)
                .expect("Failed to decode");
        assert_eq!(InvoiceStatus::from(event), InvoiceStatus::Cancelled);
    }
}

//! Buttons drawn by the client and haptic feedback.

use tg_webapp_data_model::{
    Color, Feature,
    button::{
        BottomButtonParams, BottomButtonPosition, BottomButtonType, ImpactStyle, NotificationType,
        validate_button_text,
    },
    event::EventType,
};
use wasm_bindgen::{JsCast as _, JsValue};

use crate::{
    Error, Result, Subscription, WebApp,
    event::{EventTarget, JsHandler},
    js::to_js,
    sys,
};

/// Implement [`EventTarget`] through `onClick`/`offClick` of a raw button.
macro_rules! click_target {
    ($($button:ident),+ $(,)?) => {$(
        impl EventTarget for $button {
            type Handler = JsHandler;

            fn on_event(&self, _event: EventType, handler: &Self::Handler) {
                let _raw = self.raw.on_click(handler.as_ref().unchecked_ref());
            }

            fn off_event(&self, _event: EventType, handler: &Self::Handler) {
                let _raw = self.raw.off_click(handler.as_ref().unchecked_ref());
            }
        }

        impl $button {
            /// Call `handler` each time the button is pressed.
            pub fn on_click(&self, mut handler: impl FnMut() + 'static) -> Subscription<Self> {
                let closure = JsHandler::new(move |_: JsValue| handler());
                Subscription::new(self.clone(), self.click_event(), closure)
            }
        }
    )+};
}

click_target!(BottomButton, BackButton, SettingsButton);

/// Main or secondary button at the bottom of the Mini App.
#[derive(Debug, Clone)]
pub struct BottomButton {
    /// Object owned by the client.
    raw: sys::BottomButton,
    /// Which of the two buttons this is.
    kind: BottomButtonType,
}

impl BottomButton {
    /// Whether this is the main or the secondary button.
    #[must_use]
    pub const fn kind(&self) -> BottomButtonType {
        self.kind
    }

    /// Event emitted when the button is pressed.
    const fn click_event(&self) -> EventType {
        match self.kind {
            BottomButtonType::Main => EventType::MainButtonClicked,
            BottomButtonType::Secondary => EventType::SecondaryButtonClicked,
        }
    }

    /// Current label.
    #[must_use]
    pub fn text(&self) -> String {
        self.raw.text()
    }

    /// Current background color.
    ///
    /// # Errors
    ///
    /// Fails if the client reports a malformed color.
    pub fn color(&self) -> Result<Color> {
        self.raw.color().parse().map_err(Into::into)
    }

    /// Current label color.
    ///
    /// # Errors
    ///
    /// Fails if the client reports a malformed color.
    pub fn text_color(&self) -> Result<Color> {
        self.raw.text_color().parse().map_err(Into::into)
    }

    /// Whether the button is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.raw.is_visible()
    }

    /// Whether the button reacts to presses.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.raw.is_active()
    }

    /// Whether the loading indicator is shown.
    #[must_use]
    pub fn is_progress_visible(&self) -> bool {
        self.raw.is_progress_visible()
    }

    /// `Bot API 7.10+` Whether the button shines.
    #[must_use]
    pub fn has_shine_effect(&self) -> bool {
        self.raw.has_shine_effect()
    }

    /// `Bot API 7.10+` Position of the secondary button relative to the main one.
    ///
    /// `None` for the main button.
    #[must_use]
    pub fn position(&self) -> Option<BottomButtonPosition> {
        self.raw
            .position()
            .and_then(|position| position.parse().ok())
    }

    /// Set the button label.
    ///
    /// # Errors
    ///
    /// Fails if `text` is empty or longer than 64 characters.
    pub fn set_text(&self, text: &str) -> Result<()> {
        validate_button_text(text)?;
        self.raw.set_text(text).map_err(|e| Error::host(&e))?;
        Ok(())
    }

    /// Update several properties at once. Unset fields are left untouched.
    ///
    /// # Errors
    ///
    /// Fails on invalid text, if `position` is set for the main button or if the client rejects
    /// the parameters.
    pub fn set_params(&self, params: &BottomButtonParams) -> Result<()> {
        params.validate()?;
        if params.position.is_some() && self.kind == BottomButtonType::Main {
            return Err(tg_webapp_data_model::Error::InvalidParam {
                param: "position",
                reason: "is only supported by the secondary button",
            }
            .into());
        }
        self.raw
            .set_params(&to_js(params)?)
            .map_err(|e| Error::host(&e))?;
        Ok(())
    }

    /// Show the button.
    pub fn show(&self) {
        let _raw = self.raw.show();
    }

    /// Hide the button.
    pub fn hide(&self) {
        let _raw = self.raw.hide();
    }

    /// Make the button react to presses.
    pub fn enable(&self) {
        let _raw = self.raw.enable();
    }

    /// Make the button ignore presses.
    pub fn disable(&self) {
        let _raw = self.raw.disable();
    }

    /// Show a loading indicator on the button. Unless `leave_active`, the button is disabled
    /// meanwhile.
    pub fn show_progress(&self, leave_active: bool) {
        let _raw = self.raw.show_progress(leave_active);
    }

    /// Hide the loading indicator.
    pub fn hide_progress(&self) {
        let _raw = self.raw.hide_progress();
    }
}

/// `Bot API 6.1+` Back button in the header of the Mini App.
#[derive(Debug, Clone)]
pub struct BackButton {
    /// Object owned by the client.
    raw: sys::BackButton,
}

impl BackButton {
    /// Event emitted when the button is pressed.
    #[expect(clippy::unused_self, reason = "same signature as `BottomButton::click_event()`")]
    const fn click_event(&self) -> EventType {
        EventType::BackButtonClicked
    }

    /// Whether the button is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.raw.is_visible()
    }

    /// Show the button.
    pub fn show(&self) {
        let _raw = self.raw.show();
    }

    /// Hide the button.
    pub fn hide(&self) {
        let _raw = self.raw.hide();
    }
}

/// `Bot API 7.0+` Settings item in the context menu of the Mini App.
#[derive(Debug, Clone)]
pub struct SettingsButton {
    /// Object owned by the client.
    raw: sys::SettingsButton,
}

impl SettingsButton {
    /// Event emitted when the item is pressed.
    #[expect(clippy::unused_self, reason = "same signature as `BottomButton::click_event()`")]
    const fn click_event(&self) -> EventType {
        EventType::SettingsButtonClicked
    }

    /// Whether the button is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.raw.is_visible()
    }

    /// Show the button.
    pub fn show(&self) {
        let _raw = self.raw.show();
    }

    /// Hide the button.
    pub fn hide(&self) {
        let _raw = self.raw.hide();
    }
}

/// `Bot API 6.1+` Haptic feedback controller.
#[derive(Debug, Clone)]
pub struct HapticFeedback {
    /// Object owned by the client.
    raw: sys::HapticFeedback,
}

impl HapticFeedback {
    /// An impact occurred.
    pub fn impact_occurred(&self, style: ImpactStyle) {
        let _raw = self.raw.impact_occurred(&style.to_string());
    }

    /// A task or action succeeded, failed or produced a warning.
    pub fn notification_occurred(&self, kind: NotificationType) {
        let _raw = self.raw.notification_occurred(&kind.to_string());
    }

    /// The user changed a selection.
    pub fn selection_changed(&self) {
        let _raw = self.raw.selection_changed();
    }
}

impl WebApp {
    /// The main button.
    #[must_use]
    pub fn main_button(&self) -> BottomButton {
        BottomButton {
            raw: self.raw().main_button(),
            kind: BottomButtonType::Main,
        }
    }

    /// `Bot API 7.10+` The secondary button.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn secondary_button(&self) -> Result<BottomButton> {
        self.ensure(Feature::SecondaryButton)?;
        Ok(BottomButton {
            raw: self.raw().secondary_button(),
            kind: BottomButtonType::Secondary,
        })
    }

    /// `Bot API 6.1+` The back button.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn back_button(&self) -> Result<BackButton> {
        self.ensure(Feature::BackButton)?;
        Ok(BackButton {
            raw: self.raw().back_button(),
        })
    }

    /// `Bot API 7.0+` The settings item.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn settings_button(&self) -> Result<SettingsButton> {
        self.ensure(Feature::SettingsButton)?;
        Ok(SettingsButton {
            raw: self.raw().settings_button(),
        })
    }

    /// `Bot API 6.1+` Haptic feedback.
    ///
    /// # Errors
    ///
    /// Fails on older clients.
    pub fn haptic_feedback(&self) -> Result<HapticFeedback> {
        self.ensure(Feature::HapticFeedback)?;
        Ok(HapticFeedback {
            raw: self.raw().haptic_feedback(),
        })
    }
}

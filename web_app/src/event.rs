//! Subscriptions to client events.
//!
//! The client removes a handler only when it gets the same function object that was registered.
//! [`Subscription`] owns that object, so unsubscribing can't pass a different one.

use tg_webapp_data_model::event::{Event, EventType};
use wasm_bindgen::{JsCast as _, JsValue, closure::Closure};

use crate::{WebApp, js::from_js};

/// Something handlers can be attached to.
pub trait EventTarget {
    /// Handler representation the target accepts.
    type Handler;

    /// Register `handler` for `event`.
    fn on_event(&self, event: EventType, handler: &Self::Handler);

    /// Unregister `handler` previously registered for `event`.
    fn off_event(&self, event: EventType, handler: &Self::Handler);
}

/// Handler registered on a target. Unregistered on drop.
#[must_use = "handler is unregistered when the subscription is dropped"]
pub struct Subscription<T: EventTarget> {
    /// Target the handler is registered on.
    target: T,
    /// Event the handler is registered for.
    event: EventType,
    /// `None` only after [`Subscription::detach()`].
    handler: Option<T::Handler>,
}

impl<T: EventTarget> Subscription<T> {
    /// Register `handler` for `event` on `target`.
    pub fn new(target: T, event: EventType, handler: T::Handler) -> Self {
        target.on_event(event, &handler);
        Self {
            target,
            event,
            handler: Some(handler),
        }
    }

    /// Event this subscription listens to.
    #[must_use]
    pub const fn event(&self) -> EventType {
        self.event
    }

    /// Keep the handler registered forever and give it back.
    ///
    /// For closures registered on [`WebApp`] call [`Closure::forget()`] on the result,
    /// otherwise the client will call a freed function.
    pub fn detach(mut self) -> T::Handler {
        let Some(handler) = self.handler.take() else {
            unreachable!("handler is taken only here and `self` is consumed")
        };
        handler
    }
}

impl<T: EventTarget> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(handler) = self.handler.take() {
            self.target.off_event(self.event, &handler);
        }
    }
}

impl<T: EventTarget> core::fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Subscription")
            .field("event", &self.event)
            .field("detached", &self.handler.is_none())
            .finish_non_exhaustive()
    }
}

/// JS function registered as a handler.
pub type JsHandler = Closure<dyn FnMut(JsValue)>;

impl EventTarget for WebApp {
    type Handler = JsHandler;

    fn on_event(&self, event: EventType, handler: &Self::Handler) {
        self.raw()
            .on_event(&event.to_string(), handler.as_ref().unchecked_ref());
    }

    fn off_event(&self, event: EventType, handler: &Self::Handler) {
        self.raw()
            .off_event(&event.to_string(), handler.as_ref().unchecked_ref());
    }
}

impl WebApp {
    /// Call `handler` each time the client emits `E`.
    ///
    /// Payloads which fail to decode are logged and skipped.
    pub fn subscribe<E: Event>(&self, mut handler: impl FnMut(E) + 'static) -> Subscription<Self> {
        let closure = JsHandler::new(move |payload: JsValue| match from_js::<E>(&payload) {
            Ok(event) => handler(event),
            Err(err) => tracing::warn!(event = %E::TYPE, %err, "Failed to decode event payload"),
        });
        Subscription::new(self.clone(), E::TYPE, closure)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, reason = "it's ok in tests")]

    use mockall::{Sequence, mock, predicate::eq};

    use super::*;

    mock! {
        pub Target {}

        impl EventTarget for Target {
            type Handler = u32;

            fn on_event(&self, event: EventType, handler: &u32);
            fn off_event(&self, event: EventType, handler: &u32);
        }
    }

    #[test]
    fn same_handler_is_unregistered_on_drop() {
        let mut target = MockTarget::new();
        let mut seq = Sequence::new();
        target
            .expect_on_event()
            .with(eq(EventType::PopupClosed), eq(7))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        target
            .expect_off_event()
            .with(eq(EventType::PopupClosed), eq(7))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let subscription = Subscription::new(target, EventType::PopupClosed, 7);
        assert_eq!(subscription.event(), EventType::PopupClosed);
        drop(subscription);
    }

    #[test]
    fn detached_handler_stays_registered() {
        let mut target = MockTarget::new();
        target
            .expect_on_event()
            .with(eq(EventType::ThemeChanged), eq(1))
            .times(1)
            .return_const(());
        target.expect_off_event().never();

        let handler = Subscription::new(target, EventType::ThemeChanged, 1).detach();
        assert_eq!(handler, 1);
    }
}

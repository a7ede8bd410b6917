// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard input drives the lightbox, window resizes switch the compact
//! layout, and a periodic tick runs deferred messages while any are pending.

use super::Message;
use crate::application::lightbox::LightboxKey;
use crate::config::SCHEDULER_TICK_MS;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes native events to application messages.
///
/// Keys captured by a widget (typing in a form field) are ignored.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            lightbox_key(&key).map(Message::Key)
        }
        _ => None,
    })
}

fn lightbox_key(key: &Key) -> Option<LightboxKey> {
    match key {
        Key::Named(Named::Escape) => Some(LightboxKey::Escape),
        Key::Named(Named::ArrowLeft) => Some(LightboxKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(LightboxKey::ArrowRight),
        _ => None,
    }
}

/// Periodic tick, only while timers are pending.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_millis(SCHEDULER_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_navigation_keys_reach_the_lightbox() {
        assert_eq!(
            lightbox_key(&Key::Named(Named::Escape)),
            Some(LightboxKey::Escape)
        );
        assert_eq!(
            lightbox_key(&Key::Named(Named::ArrowRight)),
            Some(LightboxKey::ArrowRight)
        );
        assert_eq!(lightbox_key(&Key::Named(Named::Enter)), None);
        assert_eq!(lightbox_key(&Key::Character("a".into())), None);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Time and keyboard subscriptions for the application.
//!
//! Nothing ticks while the window is idle: the animation tick only runs
//! during the output reveal, and the slow tick only while a notification
//! is waiting to auto-dismiss.

use super::{Message, Screen};
use crate::config::ANIMATION_TICK_MS;
use crate::ui::converter;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

const NOTIFICATION_TICK_MS: u64 = 500;

/// Frame tick driving the output reveal animation.
pub fn create_animation_subscription(animating: bool) -> Subscription<Message> {
    match animation_interval(animating) {
        Some(interval) => time::every(interval)
            .map(|instant| Message::Converter(converter::Message::Tick(instant))),
        None => Subscription::none(),
    }
}

fn animation_interval(animating: bool) -> Option<Duration> {
    animating.then(|| Duration::from_millis(ANIMATION_TICK_MS))
}

/// Slow tick used to expire auto-dismissing notifications.
pub fn create_tick_subscription(has_notification: bool) -> Subscription<Message> {
    match notification_interval(has_notification) {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}

fn notification_interval(has_notification: bool) -> Option<Duration> {
    has_notification.then(|| Duration::from_millis(NOTIFICATION_TICK_MS))
}

/// Enter converts from anywhere on the converter screen, including while
/// the font-size slider has been the last control touched.
pub fn create_keyboard_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Converter => {
            event::listen_with(|event, status, _window_id| route_converter_key(&event, status))
        }
        Screen::About => Subscription::none(),
    }
}

/// Maps an uncaptured Enter press to a conversion.
///
/// The number field submits on Enter itself and captures the event, so
/// captured presses are dropped to avoid converting twice.
fn route_converter_key(event: &event::Event, status: event::Status) -> Option<Message> {
    match status {
        event::Status::Captured => None,
        event::Status::Ignored => match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Enter),
                ..
            }) => Some(Message::Converter(converter::Message::Convert)),
            _ => None,
        },
    }
}

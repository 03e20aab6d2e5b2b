// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of the
//! application state it may touch.

use super::{persistence, Message, Screen};
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::converter::{self, Effect as ConverterEffect};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::time::Instant;

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub converter: &'a mut converter::State,
    pub notification: &'a mut Option<Notification>,
}

pub fn handle_converter_message(
    ctx: &mut UpdateContext<'_>,
    message: converter::Message,
) -> Task<Message> {
    match ctx.converter.handle_message(message) {
        ConverterEffect::None => Task::none(),
        ConverterEffect::PersistPreferences => persistence::persist_preferences(ctx.converter),
        ConverterEffect::OpenAbout => handle_screen_switch(ctx, Screen::About),
    }
}

pub fn handle_about_message(ctx: &mut UpdateContext<'_>, message: &about::Message) -> Task<Message> {
    match about::update(message) {
        AboutEvent::None => Task::none(),
        AboutEvent::BackToConverter => handle_screen_switch(ctx, Screen::Converter),
    }
}

fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    tracing::debug!(?target, "switching screen");
    *ctx.screen = target;
    Task::none()
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: notifications::Message,
) -> Task<Message> {
    match message {
        notifications::Message::Dismiss => *ctx.notification = None,
    }
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if ctx
        .notification
        .as_ref()
        .is_some_and(|notification| notification.is_expired(now))
    {
        *ctx.notification = None;
    }
    Task::none()
}

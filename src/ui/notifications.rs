// SPDX-License-Identifier: MPL-2.0
//! Warning banner shown when the settings file could not be read.
//!
//! The banner stores an i18n key and resolves it at render time.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Container, Row, Space};
use iced::{Background, Border, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// How long a warning stays on screen before it dismisses itself.
pub const AUTO_DISMISS: Duration = Duration::from_secs(5);

/// A warning to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    message_key: String,
    created_at: Instant,
}

impl Notification {
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self {
            message_key: message_key.into(),
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Returns true once the auto-dismiss delay has elapsed at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= AUTO_DISMISS
    }
}

/// Messages emitted by the notification banner.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss,
}

/// Renders a notification as a full-width banner with a dismiss button.
pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = palette::WARNING_500;

    let content = Row::new()
        .spacing(spacing::SM)
        .push(text(i18n.tr(notification.message_key())).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            button(text("×").size(typography::BODY_LG))
                .padding([0.0, spacing::XS])
                .style(styles::button::link)
                .on_press(Message::Dismiss),
        );

    Container::new(content)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .style(move |theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..accent
            })),
            text_color: Some(theme.extended_palette().background.base.text),
            border: Border {
                color: accent,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..Default::default()
        })
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::converter;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{self, Notification};
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub converter: &'a converter::State,
    pub notification: Option<&'a Notification>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Converter => ctx.converter.view(ctx.i18n).map(Message::Converter),
        Screen::About => about::view(AboutViewContext { i18n: ctx.i18n }).map(Message::About),
    };

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);

    if let Some(notification) = ctx.notification {
        column = column.push(
            Container::new(notifications::view(notification, ctx.i18n).map(Message::Notification))
                .padding(spacing::XS),
        );
    }

    column = column.push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

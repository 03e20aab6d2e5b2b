// SPDX-License-Identifier: MPL-2.0
//! Converter card: number input, spelled-out output and display controls.
//!
//! [`component`] owns the state machine; this module renders it.

pub mod component;

pub use component::{Effect, Message, Output, State};

use crate::config::{SUGGESTED_MAX_INPUT, SUGGESTED_MIN_INPUT};
use crate::domain::ui::font_size_bounds;
use crate::domain::LocaleCode;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, rule, slider, text, text_input, tooltip, Column, Container, Row, Space,
};
use iced::{Color, Element, Length, Theme};

/// Contextual data needed to render the converter card.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Renders the converter card and its footer.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let header = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(text(i18n.tr("converter-title")).size(typography::TITLE_MD))
        .push(
            text(i18n.tr("converter-subtitle"))
                .size(typography::BODY)
                .style(secondary_text),
        );

    let card = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(header)
        .push(input_row(i18n, state.input()))
        .push(rule::horizontal(1))
        .push(text(i18n.tr("converter-result-label")).size(typography::BODY))
        .push(output_panel(i18n, state))
        .push(font_size_control(i18n, state))
        .push(controls_row(i18n, state.locale()));

    let card = Container::new(card)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(card)
        .push(footer(i18n));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn input_row<'a>(i18n: &'a I18n, input: &'a str) -> Element<'a, Message> {
    let placeholder = i18n.tr_with_args(
        "converter-input-placeholder",
        &[
            ("min", SUGGESTED_MIN_INPUT.to_string()),
            ("max", SUGGESTED_MAX_INPUT.to_string()),
        ],
    );

    let field = text_input(&placeholder, input)
        .on_input(Message::InputChanged)
        .on_submit(Message::Convert)
        .size(typography::BODY_LG)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::text_input::number);

    let convert = styles::tooltip::styled(
        button(
            text("→")
                .size(typography::TITLE_SM)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fixed(sizing::CONVERT_BUTTON))
        .height(Length::Fixed(sizing::CONVERT_BUTTON))
        .style(styles::button::convert)
        .on_press(Message::Convert),
        i18n.tr("converter-convert-button"),
        tooltip::Position::Bottom,
    );

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(field)
        .push(convert)
        .into()
}

fn output_panel<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let body: Element<'a, Message> = match state.output() {
        Output::Empty => Container::new(
            text("?")
                .size(typography::DISPLAY)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .width(Length::Fixed(sizing::PLACEHOLDER_BADGE))
        .height(Length::Fixed(sizing::PLACEHOLDER_BADGE))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::placeholder_badge)
        .into(),
        Output::Words(words) => {
            let reveal = state.reveal();
            let size = state.font_size().as_pixels() * reveal.scale();
            let alpha = reveal.opacity();
            text(words.as_str())
                .size(size)
                .align_x(Horizontal::Center)
                .width(Length::Fill)
                .style(move |theme: &Theme| text::Style {
                    color: Some(Color {
                        a: alpha,
                        ..ColorScheme::for_theme(theme).text_primary
                    }),
                })
                .into()
        }
        Output::Failed(error) => text(i18n.tr_with_args(error.i18n_key(), &error.i18n_args()))
            .size(typography::BODY)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .style(|theme: &Theme| text::Style {
                color: Some(ColorScheme::for_theme(theme).error),
            })
            .into(),
    };

    Container::new(body)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PLACEHOLDER_BADGE + 2.0 * spacing::MD))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::output_panel)
        .into()
}

fn font_size_control<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let size = state.font_size().value();

    let label = Row::new()
        .spacing(spacing::XS)
        .push(text(i18n.tr("converter-font-size-label")).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            text(format!("{size}px"))
                .size(typography::BODY)
                .style(secondary_text),
        );

    let slider = slider(
        font_size_bounds::MIN..=font_size_bounds::MAX,
        size,
        Message::FontSizeChanged,
    )
    .step(font_size_bounds::STEP)
    .style(styles::slider::font_size);

    Column::new()
        .spacing(spacing::XS)
        .push(label)
        .push(slider)
        .into()
}

fn controls_row<'a>(i18n: &'a I18n, current: LocaleCode) -> Element<'a, Message> {
    let reset = button(text(i18n.tr("converter-reset-button")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::Reset);

    let toggle = LocaleCode::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XXS), |row, locale| {
            let style = if locale == current {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(styles::tooltip::styled(
                button(text(locale.short_label()).size(typography::BODY))
                    .padding([spacing::XS, spacing::SM])
                    .style(style)
                    .on_press(Message::LocaleSelected(locale)),
                i18n.tr(locale.i18n_key()),
                tooltip::Position::Bottom,
            ))
        });

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(reset)
        .push(Space::new().width(Length::Fill))
        .push(text(i18n.tr("converter-language-label")).size(typography::BODY))
        .push(toggle)
        .into()
}

fn footer(i18n: &I18n) -> Element<'_, Message> {
    Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(
            text(format!(
                "{} {}",
                i18n.tr("footer-created-by"),
                env!("CARGO_PKG_AUTHORS")
            ))
            .size(typography::CAPTION)
            .style(secondary_text),
        )
        .push(text("·").size(typography::CAPTION))
        .push(
            button(text(i18n.tr("footer-about-button")).size(typography::CAPTION))
                .padding(0.0)
                .style(styles::button::link)
                .on_press(Message::OpenAbout),
        )
        .into()
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

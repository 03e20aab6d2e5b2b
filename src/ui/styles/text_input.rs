// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{opacity, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Number entry field. The border takes the brand color while focused.
pub fn number(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let scheme = ColorScheme::for_theme(theme);

    let border_color = match status {
        text_input::Status::Focused { .. } => scheme.brand_primary,
        text_input::Status::Hovered => scheme.text_secondary,
        text_input::Status::Active | text_input::Status::Disabled => scheme.text_muted,
    };

    text_input::Style {
        background: Background::Color(scheme.surface_primary),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        icon: scheme.text_secondary,
        placeholder: scheme.text_muted,
        value: scheme.text_primary,
        selection: Color {
            a: opacity::OVERLAY_MEDIUM,
            ..scheme.brand_primary
        },
    }
}

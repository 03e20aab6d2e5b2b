// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.

use crate::ui::design_tokens::palette;
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Font size slider: brand-colored filled part, neutral remainder.
pub fn font_size(theme: &Theme, status: slider::Status) -> slider::Style {
    let is_light = matches!(theme, Theme::Light);

    let rail_empty = if is_light {
        palette::GRAY_100
    } else {
        palette::GRAY_700
    };
    let handle = match status {
        slider::Status::Hovered | slider::Status::Dragged => palette::PRIMARY_400,
        slider::Status::Active => palette::PRIMARY_500,
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(palette::PRIMARY_500),
                Background::Color(rail_empty),
            ),
            width: 4.0,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 2.0.into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle { radius: 8.0 },
            background: Background::Color(handle),
            border_width: 2.0,
            border_color: palette::WHITE,
        },
    }
}

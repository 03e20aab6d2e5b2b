// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::{button as button_widget, slider as slider_widget, text_input};
    use iced::Theme;
    use number2letter::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
    use number2letter::ui::styles::{button, container, slider, text_input as input, tooltip};
    use number2letter::ui::theming::{ColorScheme, ThemeMode};

    #[test]
    fn all_styles_are_callable_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = button::primary(&theme, button_widget::Status::Active);
            let _ = button::convert(&theme, button_widget::Status::Hovered);
            let _ = button::selected(&theme, button_widget::Status::Active);
            let _ = button::unselected(&theme, button_widget::Status::Disabled);
            let _ = button::link(&theme, button_widget::Status::Pressed);
            let _ = container::card(&theme);
            let _ = container::output_panel(&theme);
            let _ = container::placeholder_badge(&theme);
            let _ = slider::font_size(&theme, slider_widget::Status::Dragged);
            let _ = input::number(&theme, text_input::Status::Hovered);
            let _ = tooltip::tooltip_container(&theme);
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        let _ = opacity::SURFACE;
        let _ = typography::DISPLAY;
        assert!(sizing::CARD_WIDTH > sizing::PLACEHOLDER_BADGE);
    }

    #[test]
    fn selected_and_unselected_differ() {
        let theme = Theme::Light;
        let selected = button::selected(&theme, button_widget::Status::Active);
        let unselected = button::unselected(&theme, button_widget::Status::Active);
        assert_ne!(selected.background, unselected.background);
    }

    #[test]
    fn output_panel_uses_scheme_text_color() {
        let style = container::output_panel(&Theme::Dark);
        assert_eq!(style.text_color, Some(ColorScheme::dark().text_primary));
    }

    #[test]
    fn explicit_theme_modes_are_stable() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }
}

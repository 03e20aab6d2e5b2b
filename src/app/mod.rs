// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the converter and about
//! screens.
//!
//! The `App` struct wires together the converter, localization and persisted
//! preferences, and translates component effects into side effects like
//! config persistence or screen switches.

mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::domain::LocaleCode;
use crate::i18n::fluent::I18n;
use crate::ui::converter;
use crate::ui::notifications::Notification;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    converter: converter::State,
    theme_mode: ThemeMode,
    /// Banner currently shown above the screen, if any.
    notification: Option<Notification>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("locale", &self.converter.locale())
            .field("has_output", &!self.converter.output().is_empty())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Converter,
            converter: converter::State::default(),
            theme_mode: ThemeMode::System,
            notification: None,
        }
    }
}

/// Picks the initial conversion locale: CLI flag first, then the saved one.
fn initial_locale(flag: Option<&str>, config: &Config) -> LocaleCode {
    if let Some(raw) = flag {
        match raw.parse::<LocaleCode>() {
            Ok(locale) => return locale,
            Err(error) => tracing::warn!(%error, "ignoring --locale"),
        }
    }
    config.converter.locale_or_default()
}

impl App {
    /// Builds the application from a loaded config and startup flags.
    fn from_config(flags: &Flags, config: &Config, config_warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), config);
        let locale = initial_locale(flags.locale.as_deref(), config);
        let font_size = config.converter.font_size_or_default();

        tracing::info!(
            ui_language = %i18n.current_locale(),
            %locale,
            font_size = font_size.value(),
            "starting"
        );

        App {
            i18n,
            screen: Screen::Converter,
            converter: converter::State::new(locale, font_size),
            theme_mode: config.general.theme_mode,
            notification: config_warning.map(Notification::warning),
        }
    }

    /// Initializes application state from `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        (Self::from_config(&flags, &config, config_warning), Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let animation_sub = subscription::create_animation_subscription(self.converter.is_animating());
        let tick_sub = subscription::create_tick_subscription(self.notification.is_some());
        let keyboard_sub = subscription::create_keyboard_subscription(self.screen);

        Subscription::batch([animation_sub, tick_sub, keyboard_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            converter: &mut self.converter,
            notification: &mut self.notification,
        };

        match message {
            Message::Converter(converter_message) => {
                update::handle_converter_message(&mut ctx, converter_message)
            }
            Message::About(about_message) => update::handle_about_message(&mut ctx, &about_message),
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, notification_message)
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            converter: &self.converter,
            notification: self.notification.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FontSize;
    use crate::ui::about;
    use crate::ui::converter::Output;
    use std::time::{Duration, Instant};

    fn app_with(config: &Config, flags: &Flags) -> App {
        App::from_config(flags, config, None)
    }

    fn type_number(app: &mut App, input: &str) {
        let _ = app.update(Message::Converter(converter::Message::InputChanged(
            input.to_string(),
        )));
    }

    #[test]
    fn default_app_starts_on_converter() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Converter);
        assert!(app.converter.output().is_empty());
    }

    #[test]
    fn saved_preferences_are_restored() {
        let mut config = Config::default();
        config.converter.locale = Some(LocaleCode::French);
        config.converter.font_size = Some(22);

        let app = app_with(&config, &Flags::default());
        assert_eq!(app.converter.locale(), LocaleCode::French);
        assert_eq!(app.converter.font_size(), FontSize::new(22));
    }

    #[test]
    fn locale_flag_overrides_config() {
        let mut config = Config::default();
        config.converter.locale = Some(LocaleCode::French);
        let flags = Flags {
            locale: Some("en-IN".into()),
            ..Flags::default()
        };

        let app = app_with(&config, &flags);
        assert_eq!(app.converter.locale(), LocaleCode::English);
    }

    #[test]
    fn invalid_locale_flag_falls_back_to_config() {
        let flags = Flags {
            locale: Some("xx-YY".into()),
            ..Flags::default()
        };
        let app = app_with(&Config::default(), &flags);
        assert_eq!(app.converter.locale(), LocaleCode::Malagasy);
    }

    #[test]
    fn unsupported_region_flag_is_not_coerced() {
        let mut config = Config::default();
        config.converter.locale = Some(LocaleCode::French);
        let flags = Flags {
            locale: Some("en-GB".into()),
            ..Flags::default()
        };
        let app = app_with(&config, &flags);
        assert_eq!(app.converter.locale(), LocaleCode::French);
    }

    #[test]
    fn config_warning_becomes_notification() {
        let app = App::from_config(
            &Flags::default(),
            &Config::default(),
            Some(config::LOAD_ERROR_KEY.to_string()),
        );
        let notification = app.notification.as_ref().expect("notification");
        assert_eq!(notification.message_key(), config::LOAD_ERROR_KEY);
    }

    #[test]
    fn notification_is_dismissed() {
        let mut app = App::from_config(
            &Flags::default(),
            &Config::default(),
            Some(config::LOAD_ERROR_KEY.to_string()),
        );
        let _ = app.update(Message::Notification(
            crate::ui::notifications::Message::Dismiss,
        ));
        assert!(app.notification.is_none());
    }

    #[test]
    fn tick_expires_notification() {
        let mut app = App::from_config(
            &Flags::default(),
            &Config::default(),
            Some(config::LOAD_ERROR_KEY.to_string()),
        );
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(60)));
        assert!(app.notification.is_none());
    }

    #[test]
    fn converter_messages_reach_component() {
        let mut app = app_with(&Config::default(), &Flags::default());
        type_number(&mut app, "10");
        assert_eq!(app.converter.output().words(), Some("folo"));

        let _ = app.update(Message::Converter(converter::Message::LocaleSelected(
            LocaleCode::English,
        )));
        assert_eq!(app.converter.output().words(), Some("Ten"));

        let _ = app.update(Message::Converter(converter::Message::Reset));
        assert_eq!(app.converter.output(), &Output::Empty);
    }

    #[test]
    fn about_navigation_round_trip() {
        let mut app = App::default();
        let _ = app.update(Message::Converter(converter::Message::OpenAbout));
        assert_eq!(app.screen, Screen::About);

        let _ = app.update(Message::About(about::Message::BackToConverter));
        assert_eq!(app.screen, Screen::Converter);
    }

    #[test]
    fn title_is_translated() {
        let flags = Flags {
            lang: Some("en-US".into()),
            ..Flags::default()
        };
        let app = app_with(&Config::default(), &flags);
        assert_eq!(app.title(), "Number2Letter");
    }

    #[test]
    fn theme_follows_config() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        let app = app_with(&config, &Flags::default());
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn view_renders_both_screens() {
        let mut app = App::default();
        let _ = app.view();
        app.screen = Screen::About;
        let _ = app.view();
    }
}

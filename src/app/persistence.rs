// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! Saves the converter preferences (locale and font size) to disk while
//! leaving the other sections of `settings.toml` untouched.

use super::Message;
use crate::config::{self, Config};
use crate::ui::converter;
use iced::Task;

/// Copies the converter preferences into `cfg`.
pub fn apply_converter_preferences(cfg: &mut Config, converter: &converter::State) {
    cfg.converter.locale = Some(converter.locale());
    cfg.converter.font_size = Some(converter.font_size().value());
}

/// Persists the current converter preferences to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling [`apply_converter_preferences`] directly rather than through
/// `Effect`s.
pub fn persist_preferences(converter: &converter::State) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let (mut cfg, _) = config::load();
    apply_converter_preferences(&mut cfg, converter);

    if let Err(error) = config::save(&cfg) {
        tracing::warn!(%error, "failed to save config");
    }

    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FontSize, LocaleCode};

    #[test]
    fn converter_preferences_are_copied() {
        let state = converter::State::new(LocaleCode::English, FontSize::new(20));
        let mut cfg = Config::default();
        cfg.general.language = Some("fr".into());

        apply_converter_preferences(&mut cfg, &state);

        assert_eq!(cfg.converter.locale, Some(LocaleCode::English));
        assert_eq!(cfg.converter.font_size, Some(20));
        assert_eq!(cfg.general.language.as_deref(), Some("fr"));
    }
}

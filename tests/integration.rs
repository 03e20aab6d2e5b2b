// SPDX-License-Identifier: MPL-2.0
use number2letter::config::{self, Config, LOAD_ERROR_KEY};
use number2letter::domain::{FontSize, LocaleCode};
use number2letter::error::ConversionError;
use number2letter::i18n::fluent::I18n;
use number2letter::ui::converter::{Message, Output, State};
use number2letter::words;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to mg
    let mut malagasy_config = Config::default();
    malagasy_config.general.language = Some("mg".to_string());
    config::save_to_path(&malagasy_config, &temp_config_file_path)
        .expect("Failed to write malagasy config file");

    let loaded_malagasy_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load malagasy config from path");
    let i18n_mg = I18n::new(None, None, &loaded_malagasy_config);
    assert_eq!(i18n_mg.current_locale().to_string(), "mg");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn converter_preferences_survive_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut cfg = Config::default();
    cfg.converter.locale = Some(LocaleCode::English);
    cfg.converter.font_size = Some(21);
    config::save_with_override(&cfg, Some(dir.path().to_path_buf())).expect("save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let state = State::new(
        loaded.converter.locale_or_default(),
        loaded.converter.font_size_or_default(),
    );
    assert_eq!(state.locale(), LocaleCode::English);
    assert_eq!(state.font_size(), FontSize::new(21));
}

#[test]
fn corrupt_config_yields_defaults_and_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[converter\nlocale = 3").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
}

#[test]
fn reference_spellings_for_each_locale() {
    let cases = [
        (LocaleCode::Malagasy, "1", "iray"),
        (LocaleCode::Malagasy, "11", "iraika ambin'ny folo"),
        (LocaleCode::Malagasy, "26", "enina amby roapolo"),
        (
            LocaleCode::Malagasy,
            "1996",
            "enina amby sivifolo sy sivinjato sy arivo",
        ),
        (LocaleCode::French, "0", "Zéro"),
        (LocaleCode::French, "80", "Quatre-Vingts"),
        (LocaleCode::French, "71", "Soixante Et Onze"),
        (LocaleCode::English, "26", "Twenty Six"),
        (LocaleCode::English, "100000", "One Lakh"),
        (LocaleCode::English, "-7", "Minus Seven"),
    ];

    for (locale, input, expected) in cases {
        assert_eq!(
            words::convert(locale, input).as_deref(),
            Ok(expected),
            "{locale} {input}"
        );
    }
}

#[test]
fn converter_session_end_to_end() {
    let i18n = I18n::new(Some("fr".into()), None, &Config::default());
    let mut state = State::new(LocaleCode::Malagasy, FontSize::default());

    // Empty input yields empty output.
    state.handle_message(Message::InputChanged(String::new()));
    assert_eq!(state.output(), &Output::Empty);

    state.handle_message(Message::InputChanged("26".into()));
    assert_eq!(state.output().words(), Some("enina amby roapolo"));

    // Switching locale with input present recomputes.
    state.handle_message(Message::LocaleSelected(LocaleCode::English));
    assert_eq!(state.output().words(), Some("Twenty Six"));

    // Font size changes never alter output.
    state.handle_message(Message::FontSizeChanged(24));
    assert_eq!(state.output().words(), Some("Twenty Six"));

    // Failures are shown through a localized message.
    state.handle_message(Message::InputChanged("2,5".into()));
    let Output::Failed(error) = state.output() else {
        panic!("expected a conversion failure");
    };
    assert_eq!(error, &ConversionError::InvalidNumber("2,5".into()));
    let message = i18n.tr_with_args(error.i18n_key(), &error.i18n_args());
    assert!(message.contains("2,5"), "got {message}");

    // Reset clears input and output.
    state.handle_message(Message::Reset);
    assert_eq!(state.input(), "");
    assert_eq!(state.output(), &Output::Empty);
}

#[test]
fn every_ui_language_translates_converter_keys() {
    for lang in ["en-US", "fr", "mg"] {
        let i18n = I18n::new(Some(lang.into()), None, &Config::default());
        for key in [
            "converter-title",
            "converter-reset-button",
            "converter-font-size-label",
            "locale-name-mg",
            LOAD_ERROR_KEY,
        ] {
            assert!(
                !i18n.tr(key).starts_with("MISSING"),
                "{lang} is missing {key}"
            );
        }
    }
}

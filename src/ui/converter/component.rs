// SPDX-License-Identifier: MPL-2.0
//! Converter component encapsulating input, locale, output and display state.

use crate::domain::{FontSize, LocaleCode};
use crate::error::ConversionError;
use crate::i18n::fluent::I18n;
use crate::ui::converter::{self as converter_view, ViewContext};
use crate::ui::state::Reveal;
use crate::words;
use iced::Element;
use std::time::Instant;

/// Messages emitted by the converter card.
#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    /// Explicit conversion request (arrow button or Enter).
    Convert,
    LocaleSelected(LocaleCode),
    FontSizeChanged(u16),
    Reset,
    OpenAbout,
    /// Animation frame.
    Tick(Instant),
}

/// Side effects the application should perform after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    PersistPreferences,
    OpenAbout,
}

/// What the output panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    /// Nothing to show; the panel displays a `?` placeholder.
    #[default]
    Empty,
    Words(String),
    Failed(ConversionError),
}

impl Output {
    fn from_conversion(result: Result<String, ConversionError>) -> Self {
        match result {
            Ok(words) if words.is_empty() => Output::Empty,
            Ok(words) => Output::Words(words),
            Err(error) => Output::Failed(error),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Output::Empty)
    }

    /// Spelled-out words, if the last conversion succeeded.
    #[must_use]
    pub fn words(&self) -> Option<&str> {
        match self {
            Output::Words(words) => Some(words),
            _ => None,
        }
    }
}

/// Complete converter state.
///
/// `output` is always derived from `(input, locale)`: every mutation of
/// either goes through [`State::recompute`].
#[derive(Debug, Clone, Default)]
pub struct State {
    input: String,
    locale: LocaleCode,
    font_size: FontSize,
    output: Output,
    reveal: Reveal,
}

impl State {
    #[must_use]
    pub fn new(locale: LocaleCode, font_size: FontSize) -> Self {
        Self {
            locale,
            font_size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn locale(&self) -> LocaleCode {
        self.locale
    }

    #[must_use]
    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    #[must_use]
    pub fn output(&self) -> &Output {
        &self.output
    }

    #[must_use]
    pub fn reveal(&self) -> &Reveal {
        &self.reveal
    }

    /// True while the output reveal animation needs animation frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.reveal.is_animating()
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::InputChanged(input) => {
                self.input = input;
                self.recompute();
                Effect::None
            }
            Message::Convert => {
                self.recompute();
                Effect::None
            }
            Message::LocaleSelected(locale) => {
                if locale == self.locale {
                    return Effect::None;
                }
                tracing::debug!(%locale, "conversion locale changed");
                self.locale = locale;
                self.recompute();
                Effect::PersistPreferences
            }
            Message::FontSizeChanged(size) => {
                let font_size = FontSize::new(size);
                if font_size == self.font_size {
                    return Effect::None;
                }
                self.font_size = font_size;
                Effect::PersistPreferences
            }
            Message::Reset => {
                self.input.clear();
                self.output = Output::Empty;
                self.reveal.finish();
                Effect::None
            }
            Message::OpenAbout => Effect::OpenAbout,
            Message::Tick(now) => {
                self.reveal.tick(now);
                Effect::None
            }
        }
    }

    /// Derives the output from the current input and locale. Only a changed
    /// result restarts the reveal animation.
    fn recompute(&mut self) {
        let output = Output::from_conversion(words::convert(self.locale, &self.input));
        if let Output::Failed(error) = &output {
            tracing::debug!(%error, input = %self.input, "conversion failed");
        }

        let changed = output != self.output;
        self.output = output;

        match self.output {
            Output::Words(_) if changed => self.reveal.start(Instant::now()),
            Output::Words(_) => {}
            Output::Empty | Output::Failed(_) => self.reveal.finish(),
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        converter_view::view(ViewContext { i18n, state: self })
    }
}

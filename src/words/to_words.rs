// SPDX-License-Identifier: MPL-2.0
//! Generic, locale-configured number speller.
//!
//! Serves every locale that is not Malagasy. Output is Title Case with
//! words separated by spaces; hyphenated compounds capitalize each part
//! ("Quatre-Vingt-Dix").

use super::{english, french, NumberToWords};
use crate::domain::LocaleCode;
use crate::error::ConversionError;

/// Largest magnitude the generic speller handles.
pub const MAX_ABS: i64 = 999_999_999_999_999;

/// Rulesets available to [`ToWords`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToWordsLocale {
    French,
    English,
}

impl ToWordsLocale {
    /// Returns the ruleset serving `locale`, if the generic speller has one.
    #[must_use]
    pub fn from_code(locale: LocaleCode) -> Option<Self> {
        match locale {
            LocaleCode::French => Some(ToWordsLocale::French),
            LocaleCode::English => Some(ToWordsLocale::English),
            LocaleCode::Malagasy => None,
        }
    }

    fn zero(self) -> &'static str {
        match self {
            ToWordsLocale::French => french::ZERO,
            ToWordsLocale::English => english::ZERO,
        }
    }

    fn minus(self) -> &'static str {
        match self {
            ToWordsLocale::French => french::MINUS,
            ToWordsLocale::English => english::MINUS,
        }
    }

    fn spell(self, n: u64, out: &mut Vec<String>) {
        match self {
            ToWordsLocale::French => french::spell(n, out),
            ToWordsLocale::English => english::spell(n, out),
        }
    }
}

/// Number speller configured with a [`ToWordsLocale`].
#[derive(Debug, Clone, Copy)]
pub struct ToWords {
    locale: ToWordsLocale,
}

impl ToWords {
    #[must_use]
    pub fn new(locale: ToWordsLocale) -> Self {
        Self { locale }
    }

    #[must_use]
    pub fn locale(&self) -> ToWordsLocale {
        self.locale
    }
}

impl NumberToWords for ToWords {
    fn to_words(&self, number: i64) -> Result<String, ConversionError> {
        if !(-MAX_ABS..=MAX_ABS).contains(&number) {
            return Err(ConversionError::OutOfRange {
                value: number,
                min: -MAX_ABS,
                max: MAX_ABS,
            });
        }

        let mut words = Vec::new();
        if number < 0 {
            words.push(self.locale.minus().to_string());
        }
        match number.unsigned_abs() {
            0 => words.push(self.locale.zero().to_string()),
            n => self.locale.spell(n, &mut words),
        }

        Ok(title_case(&words.join(" ")))
    }
}

/// Capitalizes the first letter of every space- or hyphen-separated word.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c == ' ' || c == '-';
    }
    out
}

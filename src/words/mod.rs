// SPDX-License-Identifier: MPL-2.0
//! Number-to-words conversion.
//!
//! Two spellers sit behind one dispatch rule: Malagasy input goes to
//! [`Tanisa`], every other locale goes to the generic [`ToWords`] speller
//! configured with that locale.
//!
//! # Examples
//!
//! ```
//! use number2letter::domain::LocaleCode;
//! use number2letter::words;
//!
//! assert_eq!(words::convert(LocaleCode::Malagasy, "21").unwrap(), "iraika amby roapolo");
//! assert_eq!(words::convert(LocaleCode::English, "21").unwrap(), "Twenty One");
//! assert_eq!(words::convert(LocaleCode::French, "").unwrap(), "");
//! ```

mod english;
mod french;
pub mod malagasy;
pub mod to_words;

pub use malagasy::Tanisa;
pub use to_words::{ToWords, ToWordsLocale};

use crate::domain::LocaleCode;
use crate::error::ConversionError;

/// Spells an integer out in words.
pub trait NumberToWords {
    fn to_words(&self, number: i64) -> Result<String, ConversionError>;
}

/// The speller selected for a locale.
#[derive(Debug, Clone, Copy)]
pub enum Engine {
    Malagasy(Tanisa),
    Generic(ToWords),
}

impl Engine {
    /// Applies the dispatch rule: Malagasy gets its dedicated speller, the
    /// remaining locales share the generic one.
    #[must_use]
    pub fn for_locale(locale: LocaleCode) -> Self {
        match ToWordsLocale::from_code(locale) {
            Some(generic) => Engine::Generic(ToWords::new(generic)),
            None => Engine::Malagasy(Tanisa::new()),
        }
    }
}

impl NumberToWords for Engine {
    fn to_words(&self, number: i64) -> Result<String, ConversionError> {
        match self {
            Engine::Malagasy(tanisa) => tanisa.to_words(number),
            Engine::Generic(to_words) => to_words.to_words(number),
        }
    }
}

/// Parses raw input text as a whole number.
///
/// Surrounding whitespace and a leading `+` are accepted; anything else
/// that is not an integer is rejected.
pub fn parse_number(input: &str) -> Result<i64, ConversionError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ConversionError::InvalidNumber(trimmed.to_string()))
}

/// Converts raw input text for `locale`. Empty input yields empty output.
pub fn convert(locale: LocaleCode, input: &str) -> Result<String, ConversionError> {
    if input.trim().is_empty() {
        return Ok(String::new());
    }
    let number = parse_number(input)?;
    Engine::for_locale(locale).to_words(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output_for_every_locale() {
        for locale in LocaleCode::ALL {
            assert_eq!(convert(locale, ""), Ok(String::new()));
            assert_eq!(convert(locale, "   "), Ok(String::new()));
        }
    }

    #[test]
    fn malagasy_routes_to_tanisa() {
        assert!(matches!(
            Engine::for_locale(LocaleCode::Malagasy),
            Engine::Malagasy(_)
        ));
        assert_eq!(convert(LocaleCode::Malagasy, "26"), Ok("enina amby roapolo".into()));
    }

    #[test]
    fn other_locales_route_to_generic_speller() {
        match Engine::for_locale(LocaleCode::French) {
            Engine::Generic(speller) => assert_eq!(speller.locale(), ToWordsLocale::French),
            other => panic!("expected generic speller, got {other:?}"),
        }
        assert_eq!(convert(LocaleCode::French, "26"), Ok("Vingt-Six".into()));
        assert_eq!(convert(LocaleCode::English, "26"), Ok("Twenty Six".into()));
    }

    #[test]
    fn parse_number_accepts_signs_and_whitespace() {
        assert_eq!(parse_number(" 42 "), Ok(42));
        assert_eq!(parse_number("+7"), Ok(7));
        assert_eq!(parse_number("-7"), Ok(-7));
    }

    #[test]
    fn non_integer_input_is_rejected() {
        assert_eq!(
            convert(LocaleCode::English, "1.5"),
            Err(ConversionError::InvalidNumber("1.5".into()))
        );
        assert_eq!(
            convert(LocaleCode::Malagasy, "abc"),
            Err(ConversionError::InvalidNumber("abc".into()))
        );
        assert!(matches!(
            convert(LocaleCode::French, "99999999999999999999"),
            Err(ConversionError::InvalidNumber(_))
        ));
    }

    #[test]
    fn malagasy_rejects_negative_numbers() {
        assert!(matches!(
            convert(LocaleCode::Malagasy, "-3"),
            Err(ConversionError::OutOfRange { value: -3, .. })
        ));
        assert_eq!(convert(LocaleCode::English, "-3"), Ok("Minus Three".into()));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Conversion locale codes.
//!
//! A [`LocaleCode`] selects which word ruleset and language a number is
//! spelled in. It is distinct from the UI language handled by `i18n`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locales a number can be spelled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LocaleCode {
    #[default]
    #[serde(rename = "mg-MG")]
    Malagasy,
    #[serde(rename = "fr-FR")]
    French,
    #[serde(rename = "en-IN")]
    English,
}

impl LocaleCode {
    /// All locales, in the order they appear in the language toggle.
    pub const ALL: [LocaleCode; 3] = [LocaleCode::Malagasy, LocaleCode::French, LocaleCode::English];

    /// Returns the BCP-47 code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LocaleCode::Malagasy => "mg-MG",
            LocaleCode::French => "fr-FR",
            LocaleCode::English => "en-IN",
        }
    }

    /// Returns the two-letter label shown on the toggle buttons.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            LocaleCode::Malagasy => "MG",
            LocaleCode::French => "FR",
            LocaleCode::English => "EN",
        }
    }

    /// Returns the i18n key for the locale's full name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            LocaleCode::Malagasy => "locale-name-mg",
            LocaleCode::French => "locale-name-fr",
            LocaleCode::English => "locale-name-en",
        }
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale code: {}", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for LocaleCode {
    type Err = UnknownLocale;

    /// Accepts the full code (`fr-FR`) or the toggle label (`FR`),
    /// case-insensitively. Other regions (`en-GB`) are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "mg-mg" | "mg" => Ok(LocaleCode::Malagasy),
            "fr-fr" | "fr" => Ok(LocaleCode::French),
            "en-in" | "en" => Ok(LocaleCode::English),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

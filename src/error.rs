// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Reasons a number could not be spelled out.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Input text is not a whole number (e.g. `12a`, `1.5`)
    InvalidNumber(String),

    /// Number lies outside what the selected converter can spell
    OutOfRange { value: i64, min: i64, max: i64 },
}

impl ConversionError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ConversionError::InvalidNumber(_) => "error-invalid-number",
            ConversionError::OutOfRange { .. } => "error-out-of-range",
        }
    }

    /// Returns the Fluent arguments used by the localized message.
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            ConversionError::InvalidNumber(input) => vec![("input", input.clone())],
            ConversionError::OutOfRange { value, min, max } => vec![
                ("value", value.to_string()),
                ("min", min.to_string()),
                ("max", max.to_string()),
            ],
        }
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidNumber(input) => write!(f, "Not a whole number: {}", input),
            ConversionError::OutOfRange { value, min, max } => {
                write!(f, "{} is outside the supported range {}..={}", value, min, max)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

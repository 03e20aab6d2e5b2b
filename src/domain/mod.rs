// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core value types shared by the converters and the UI.
//!
//! # Modules
//!
//! - [`locale`]: Conversion locales ([`LocaleCode`](locale::LocaleCode))
//! - [`ui`]: UI value objects ([`FontSize`](ui::newtypes::FontSize))

pub mod locale;
pub mod ui;

pub use locale::LocaleCode;
pub use ui::FontSize;

// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! The UI language is independent of the conversion locale: a French
//! interface can spell numbers in Malagasy.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files, with optional overrides from disk
//! - Fallback to default locale when translations are missing

pub mod fluent;

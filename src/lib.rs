// SPDX-License-Identifier: MPL-2.0
//! `number2letter` spells numbers out in words, built with the Iced GUI
//! framework.
//!
//! It converts whole numbers to Malagasy, French or Indian English words,
//! with a Fluent-localized interface, persisted preferences and a small
//! reveal animation for each new result.
//!
//! The conversion logic lives in [`words`] and has no UI dependency.

#![doc(html_root_url = "https://docs.rs/number2letter/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod words;

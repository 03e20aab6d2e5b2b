// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`converter`] - Number input, spelled-out output and display controls
//! - [`about`] - Application version, author and credits
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Banner notifications for user feedback
//! - [`state`] - Reusable state (output reveal animation)
//! - [`styles`] - Centralized styling (buttons, containers, slider, input, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod converter;
pub mod design_tokens;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;

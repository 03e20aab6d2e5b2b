// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Converter**: Initial locale and output font size
//! - **Window**: Default and minimum window dimensions
//! - **Animation**: Output reveal timing

use crate::domain::ui::font_size_bounds;
use crate::domain::LocaleCode;

// ==========================================================================
// Converter Defaults
// ==========================================================================

/// Locale selected when nothing else is configured.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::Malagasy;

/// Default output font size in pixels.
pub const DEFAULT_FONT_SIZE: u16 = font_size_bounds::DEFAULT;

/// Lower bound advertised by the number input placeholder. Not enforced.
pub const SUGGESTED_MIN_INPUT: i64 = 1;

/// Upper bound advertised by the number input placeholder. Not enforced.
pub const SUGGESTED_MAX_INPUT: i64 = 26;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the output reveal animation in milliseconds.
pub const REVEAL_DURATION_MS: u64 = 500;

/// Scale the output starts from when revealed.
pub const REVEAL_START_SCALE: f32 = 0.8;

/// Tick interval while an animation is running (roughly 60 fps).
pub const ANIMATION_TICK_MS: u64 = 16;

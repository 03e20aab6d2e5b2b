// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Font Size Bounds
// =============================================================================

/// Output font size bounds (12px to 24px).
pub mod font_size_bounds {
    /// Minimum font size in pixels.
    pub const MIN: u16 = 12;
    /// Maximum font size in pixels.
    pub const MAX: u16 = 24;
    /// Default font size in pixels.
    pub const DEFAULT: u16 = 16;
    /// Slider step in pixels.
    pub const STEP: u16 = 1;
}

// =============================================================================
// FontSize
// =============================================================================

/// Display size of the converted words, guaranteed to be within 12–24px.
///
/// Only affects presentation; the converted text never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(u16);

impl FontSize {
    /// Creates a new font size, clamping the value to the valid range.
    #[must_use]
    pub fn new(pixels: u16) -> Self {
        Self(pixels.clamp(font_size_bounds::MIN, font_size_bounds::MAX))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Returns the size as a float for text widgets.
    #[must_use]
    pub fn as_pixels(self) -> f32 {
        f32::from(self.0)
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(font_size_bounds::DEFAULT)
    }
}

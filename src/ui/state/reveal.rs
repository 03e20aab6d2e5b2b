// SPDX-License-Identifier: MPL-2.0
//! Output reveal animation.
//!
//! When a new result appears it fades in while growing from
//! [`REVEAL_START_SCALE`] to full size over [`REVEAL_DURATION_MS`],
//! following an ease-out-quad curve. The animation is driven by ticks from
//! the application subscription and holds no timer of its own.

use crate::config::{REVEAL_DURATION_MS, REVEAL_START_SCALE};
use std::time::{Duration, Instant};

/// Progress of the reveal animation.
///
/// # Example
///
/// ```
/// use number2letter::ui::state::Reveal;
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let mut reveal = Reveal::default();
/// reveal.start(start);
/// assert!(reveal.is_animating());
///
/// reveal.tick(start + Duration::from_secs(1));
/// assert!(!reveal.is_animating());
/// assert_eq!(reveal.opacity(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    started_at: Option<Instant>,
    /// Linear progress in `[0, 1]`.
    progress: f32,
}

impl Default for Reveal {
    /// A finished animation: content is fully visible.
    fn default() -> Self {
        Self {
            started_at: None,
            progress: 1.0,
        }
    }
}

impl Reveal {
    #[must_use]
    pub fn duration() -> Duration {
        Duration::from_millis(REVEAL_DURATION_MS)
    }

    /// Restarts the animation from the beginning.
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.progress = 0.0;
    }

    /// Advances the animation to `now`. Finishing clears the start time so
    /// no more ticks are requested.
    pub fn tick(&mut self, now: Instant) {
        let Some(started_at) = self.started_at else {
            return;
        };
        let elapsed = now.saturating_duration_since(started_at);
        self.progress = (elapsed.as_secs_f32() / Self::duration().as_secs_f32()).clamp(0.0, 1.0);
        if self.progress >= 1.0 {
            self.started_at = None;
        }
    }

    /// Jumps to the end state.
    pub fn finish(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.started_at.is_some()
    }

    /// Eased progress in `[0, 1]`.
    #[must_use]
    pub fn eased(&self) -> f32 {
        ease_out_quad(self.progress)
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.eased()
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        REVEAL_START_SCALE + (1.0 - REVEAL_START_SCALE) * self.eased()
    }
}

fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

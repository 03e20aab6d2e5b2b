// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State that outlives a single frame but is not part of any screen's
//! domain data lives here.

pub mod reveal;

pub use reveal::Reveal;

//! Hero banner parallax.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use crate::consts::{PARALLAX_FACTOR, PARALLAX_MIN_WIDTH_PX};

/// Whether the background layer should track scrolling at all.
///
/// Decided once at mount: narrow viewports and reduced-motion users get a
/// static background.
#[must_use]
pub fn parallax_enabled(viewport_width: f64, reduced_motion: bool) -> bool {
    !reduced_motion && viewport_width >= PARALLAX_MIN_WIDTH_PX
}

/// Vertical translation of the background layer for a scroll offset.
#[must_use]
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y.max(0.0) * PARALLAX_FACTOR
}

//! Navigation bar state: scroll-spy, frosted-background flag, mobile menu.
//!
//! DESIGN
//! ======
//! `NavState` is provided once through context as `RwSignal<NavState>`. Every
//! mutation goes through a method taking a [`Viewport`], so the scroll-spy can
//! be driven from tests with a fake page layout.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{SCROLLED_THRESHOLD_PX, SECTION_SPY_OFFSET_PX};
use crate::content::SECTIONS;
use crate::util::viewport::Viewport;

/// DOM id of the mobile menu toggle button; focus returns here on Escape.
pub const MENU_TOGGLE_ID: &str = "menu-toggle";

/// DOM id of the collapsible mobile menu.
pub const MOBILE_MENU_ID: &str = "mobile-menu";

/// Pick the section the reader is currently in.
///
/// Scans [`SECTIONS`] bottom to top and returns the first whose top is at or
/// above `scroll_y + 120`, so the last section whose top has been passed wins.
/// Sections that are not mounted are skipped. Falls back to the first
/// declared section.
pub fn active_section(scroll_y: f64, top_of: impl Fn(&str) -> Option<f64>) -> &'static str {
    let spy_line = scroll_y + SECTION_SPY_OFFSET_PX;
    SECTIONS
        .iter()
        .rev()
        .find(|s| top_of(s.id).is_some_and(|top| top <= spy_line))
        .or_else(|| SECTIONS.first())
        .map_or("", |s| s.id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    /// Page has scrolled past [`SCROLLED_THRESHOLD_PX`].
    pub scrolled: bool,
    /// Id of the highlighted nav entry; always one of [`SECTIONS`].
    pub active_section: &'static str,
    pub menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self { scrolled: false, active_section: SECTIONS.first().map_or("", |s| s.id), menu_open: false }
    }
}

impl NavState {
    /// Recompute scroll-derived flags. Returns `true` if anything changed.
    pub fn on_scroll(&mut self, viewport: &impl Viewport) -> bool {
        let y = viewport.scroll_y();
        let scrolled = y > SCROLLED_THRESHOLD_PX;
        let active = active_section(y, |id| viewport.section_top(id));
        let changed = scrolled != self.scrolled || active != self.active_section;
        self.scrolled = scrolled;
        self.active_section = active;
        changed
    }

    /// Close the menu and smooth-scroll to `id`.
    pub fn navigate(&mut self, viewport: &impl Viewport, id: &str) {
        self.menu_open = false;
        viewport.scroll_to_section(id);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Handle Escape: close an open menu and move focus back to the toggle
    /// button. Returns `false` when the menu was already closed.
    pub fn on_escape(&mut self, viewport: &impl Viewport) -> bool {
        if !self.menu_open {
            return false;
        }
        self.menu_open = false;
        viewport.focus(MENU_TOGGLE_ID);
        true
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active_section == id
    }
}

//! Tab selection with roving keyboard focus.
//!
//! DESIGN
//! ======
//! One `TabSelection` per switcher instance, owned locally by the component.
//! The index is only ever written through `select`, which rejects
//! out-of-range values, so it always points into the category list.

#[cfg(test)]
#[path = "tabs_test.rs"]
mod tabs_test;

use crate::util::viewport::Viewport;

/// Keyboard movement within a tab list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TabKey {
    Next,
    Prev,
    First,
    Last,
}

impl TabKey {
    /// Map a `KeyboardEvent.key` value. Unrelated keys yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(Self::Next),
            "ArrowLeft" | "ArrowUp" => Some(Self::Prev),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabSelection {
    index: usize,
    len: usize,
}

impl TabSelection {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Activate tab `index`. Out-of-range input is ignored and returns `false`.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    /// Index a key press would move to, without applying it.
    #[must_use]
    pub fn target(&self, key: TabKey) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let next = match key {
            TabKey::Next => (self.index + 1) % self.len,
            TabKey::Prev => (self.index + self.len - 1) % self.len,
            TabKey::First => 0,
            TabKey::Last => self.len - 1,
        };
        Some(next)
    }

    /// Apply a key press. Returns the newly active index so the caller can
    /// move focus there, or `None` if the key is not a tab-list key.
    pub fn on_key(&mut self, key: &str) -> Option<usize> {
        let next = self.target(TabKey::from_key(key)?)?;
        self.index = next;
        Some(next)
    }

    /// Apply a key press and move focus to the newly active tab, whose DOM
    /// id comes from `tab_id`. Returns `false` for keys the tab list ignores.
    pub fn on_key_focus(
        &mut self,
        key: &str,
        viewport: &impl Viewport,
        tab_id: impl Fn(usize) -> Option<String>,
    ) -> bool {
        let Some(index) = self.on_key(key) else {
            return false;
        };
        if let Some(id) = tab_id(index) {
            viewport.focus(&id);
        }
        true
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// `tabindex` for tab `index`: only the active tab is in the tab order.
    #[must_use]
    pub fn tab_index(&self, index: usize) -> i32 {
        if self.is_active(index) { 0 } else { -1 }
    }
}

/// DOM id of the tab button for category `id`.
#[must_use]
pub fn tab_dom_id(prefix: &str, id: &str) -> String {
    format!("{prefix}tab-{id}")
}

/// DOM id of the panel controlled by category `id`.
#[must_use]
pub fn panel_dom_id(prefix: &str, id: &str) -> String {
    format!("{prefix}panel-{id}")
}

//! One-shot reveal flags for elements observed by reveal-on-scroll.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::REVEAL_THRESHOLD;

/// Per-element visibility, indexed in observation order.
///
/// Flags only ever go from hidden to visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealTracker {
    visible: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { visible: vec![false; count] }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Feed an intersection ratio for element `index`.
    ///
    /// Returns `true` only the first time the ratio reaches the threshold;
    /// the caller should reveal the element and stop observing it.
    pub fn record(&mut self, index: usize, ratio: f64) -> bool {
        let Some(flag) = self.visible.get_mut(index) else {
            return false;
        };
        if *flag || ratio < REVEAL_THRESHOLD {
            return false;
        }
        *flag = true;
        true
    }

    /// Reveal everything at once. Used when the platform cannot observe
    /// intersections. Returns the indices that were still hidden.
    pub fn reveal_all(&mut self) -> Vec<usize> {
        self.visible
            .iter_mut()
            .enumerate()
            .filter(|(_, flag)| !**flag)
            .map(|(i, flag)| {
                *flag = true;
                i
            })
            .collect()
    }

    #[must_use]
    pub fn all_visible(&self) -> bool {
        self.visible.iter().all(|v| *v)
    }
}

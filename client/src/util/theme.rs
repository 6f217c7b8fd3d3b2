//! Browser-backed theme store.
//!
//! Persists the mode under `localStorage["theme"]` and applies it by toggling
//! the `dark` class on `<html>`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: private browsing or a disabled storage API
//! leaves the page themed for the session only. SSR paths no-op so server
//! rendering stays deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::{ThemeMode, ThemeStore};
#[cfg(feature = "hydrate")]
use crate::state::theme::THEME_STORAGE_KEY;

/// Class toggled on the document element while dark mode is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalThemeStore;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::debug!("localStorage access denied: {e:?}");
            None
        }
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            match storage()?.get_item(THEME_STORAGE_KEY) {
                Ok(value) => value,
                Err(e) => {
                    log::debug!("failed to read theme preference: {e:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn save(&self, mode: ThemeMode) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = storage() else {
                log::debug!("localStorage unavailable; theme not persisted");
                return;
            };
            if storage.set_item(THEME_STORAGE_KEY, mode.as_str()).is_err() {
                log::warn!("failed to persist theme preference");
            }
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    fn apply(&self, mode: ThemeMode) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                if let Err(e) = el.class_list().toggle_with_force(DARK_CLASS, mode.is_dark()) {
                    log::warn!("failed to apply theme class: {e:?}");
                }
            }
        }
    }
}

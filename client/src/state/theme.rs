//! Light/dark theme preference.
//!
//! The initial mode resolves as: persisted value, else OS preference, else
//! light. Every toggle applies the mode to the document and persists it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Resolve the startup mode.
    ///
    /// Any persisted value wins over the OS preference; only `"dark"` selects
    /// dark mode, anything else stored means light.
    #[must_use]
    pub fn resolve(persisted: Option<&str>, os_prefers_dark: bool) -> Self {
        match persisted {
            Some("dark") => Self::Dark,
            Some(_) => Self::Light,
            None if os_prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Where the preference is read from, written to, and applied.
pub trait ThemeStore {
    /// Raw persisted value, if any.
    fn load(&self) -> Option<String>;
    fn save(&self, mode: ThemeMode);
    /// Reflect `mode` on the document (idempotent).
    fn apply(&self, mode: ThemeMode);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub mode: ThemeMode,
}

impl ThemeState {
    /// Resolve the startup mode from `store` and apply it.
    pub fn init(store: &impl ThemeStore, os_prefers_dark: bool) -> Self {
        let mode = ThemeMode::resolve(store.load().as_deref(), os_prefers_dark);
        store.apply(mode);
        Self { mode }
    }

    /// Flip the mode, apply it, and persist it.
    pub fn toggle(&mut self, store: &impl ThemeStore) -> ThemeMode {
        self.mode = self.mode.toggled();
        store.apply(self.mode);
        store.save(self.mode);
        self.mode
    }
}

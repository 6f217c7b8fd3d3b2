use super::*;
use std::cell::RefCell;

#[derive(Default)]
struct MemoryStore {
    value: RefCell<Option<String>>,
    applied: RefCell<Vec<ThemeMode>>,
}

impl MemoryStore {
    fn with(value: &str) -> Self {
        Self { value: RefCell::new(Some(value.to_owned())), ..Self::default() }
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, mode: ThemeMode) {
        *self.value.borrow_mut() = Some(mode.as_str().to_owned());
    }

    fn apply(&self, mode: ThemeMode) {
        self.applied.borrow_mut().push(mode);
    }
}

// =============================================================
// ThemeMode::resolve
// =============================================================

#[test]
fn resolve_persisted_dark_wins() {
    assert_eq!(ThemeMode::resolve(Some("dark"), false), ThemeMode::Dark);
}

#[test]
fn resolve_persisted_light_overrides_os_dark() {
    assert_eq!(ThemeMode::resolve(Some("light"), true), ThemeMode::Light);
}

#[test]
fn resolve_unknown_persisted_value_is_light() {
    assert_eq!(ThemeMode::resolve(Some("sepia"), true), ThemeMode::Light);
}

#[test]
fn resolve_falls_back_to_os() {
    assert_eq!(ThemeMode::resolve(None, true), ThemeMode::Dark);
    assert_eq!(ThemeMode::resolve(None, false), ThemeMode::Light);
}

#[test]
fn mode_strings() {
    assert_eq!(ThemeMode::Light.as_str(), "light");
    assert_eq!(ThemeMode::Dark.as_str(), "dark");
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
}

// =============================================================
// ThemeState
// =============================================================

#[test]
fn init_applies_resolved_mode_without_persisting() {
    let store = MemoryStore::default();
    let state = ThemeState::init(&store, true);
    assert_eq!(state.mode, ThemeMode::Dark);
    assert_eq!(store.applied.borrow().as_slice(), [ThemeMode::Dark]);
    assert_eq!(store.load(), None);
}

#[test]
fn toggle_applies_and_persists() {
    let store = MemoryStore::with("light");
    let mut state = ThemeState::init(&store, true);
    assert_eq!(state.mode, ThemeMode::Light);

    assert_eq!(state.toggle(&store), ThemeMode::Dark);
    assert_eq!(store.load().as_deref(), Some("dark"));
    assert!(state.mode.is_dark());

    assert_eq!(state.toggle(&store), ThemeMode::Light);
    assert_eq!(store.load().as_deref(), Some("light"));
    assert_eq!(
        store.applied.borrow().as_slice(),
        [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Light]
    );
}

#[test]
fn persisted_toggle_survives_reload() {
    let store = MemoryStore::default();
    let mut state = ThemeState::init(&store, false);
    state.toggle(&store);
    let reloaded = ThemeState::init(&store, false);
    assert_eq!(reloaded.mode, ThemeMode::Dark);
}

use super::*;
use crate::util::viewport::test_helpers::FakeViewport;

const IDS: [&str; 5] = ["home", "services", "about", "why-us", "contact"];

fn page() -> FakeViewport {
    FakeViewport::with_sections(&IDS, 800.0)
}

// =============================================================
// active_section
// =============================================================

#[test]
fn active_section_at_top_is_home() {
    let vp = page();
    assert_eq!(active_section(0.0, |id| vp.section_top(id)), "home");
}

#[test]
fn active_section_uses_lookahead_offset() {
    let vp = page();
    // services starts at 800; 680 + 120 reaches it exactly.
    assert_eq!(active_section(679.0, |id| vp.section_top(id)), "home");
    assert_eq!(active_section(680.0, |id| vp.section_top(id)), "services");
}

#[test]
fn active_section_lower_section_wins_ties() {
    let mut vp = page();
    vp.tops.insert("about".to_owned(), 800.0);
    vp.tops.insert("services".to_owned(), 800.0);
    assert_eq!(active_section(700.0, |id| vp.section_top(id)), "about");
}

#[test]
fn active_section_past_bottom_is_last() {
    let vp = page();
    assert_eq!(active_section(100_000.0, |id| vp.section_top(id)), "contact");
}

#[test]
fn active_section_skips_unmounted_sections() {
    let mut vp = page();
    vp.tops.remove("about");
    assert_eq!(active_section(1700.0, |id| vp.section_top(id)), "services");
}

#[test]
fn active_section_without_layout_falls_back_to_first() {
    assert_eq!(active_section(5000.0, |_| None), "home");
}

#[test]
fn active_section_is_always_declared() {
    let vp = page();
    let declared: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
    for step in -10..80 {
        let y = f64::from(step) * 73.0;
        let id = active_section(y, |id| vp.section_top(id));
        assert!(declared.contains(&id), "{id} at y={y}");
    }
}

// =============================================================
// NavState
// =============================================================

#[test]
fn nav_state_default() {
    let nav = NavState::default();
    assert!(!nav.scrolled);
    assert!(!nav.menu_open);
    assert_eq!(nav.active_section, "home");
}

#[test]
fn on_scroll_sets_scrolled_past_threshold() {
    let mut vp = page();
    let mut nav = NavState::default();

    vp.scroll_y = 20.0;
    assert!(!nav.on_scroll(&vp));
    assert!(!nav.scrolled);

    vp.scroll_y = 21.0;
    assert!(nav.on_scroll(&vp));
    assert!(nav.scrolled);
}

#[test]
fn on_scroll_reports_unchanged_ticks() {
    let mut vp = page();
    let mut nav = NavState::default();
    vp.scroll_y = 1700.0;
    assert!(nav.on_scroll(&vp));
    assert_eq!(nav.active_section, "about");
    vp.scroll_y = 1750.0;
    assert!(!nav.on_scroll(&vp));
}

#[test]
fn navigate_closes_menu_and_scrolls() {
    let vp = page();
    let mut nav = NavState { menu_open: true, ..NavState::default() };
    nav.navigate(&vp, "contact");
    assert!(!nav.menu_open);
    assert_eq!(vp.scrolled_to.borrow().as_slice(), ["contact"]);
}

#[test]
fn toggle_menu_flips() {
    let mut nav = NavState::default();
    nav.toggle_menu();
    assert!(nav.menu_open);
    nav.toggle_menu();
    assert!(!nav.menu_open);
}

#[test]
fn escape_with_open_menu_closes_and_returns_focus() {
    let vp = page();
    let mut nav = NavState::default();
    nav.toggle_menu();
    assert!(nav.on_escape(&vp));
    assert!(!nav.menu_open);
    assert_eq!(vp.focused.borrow().as_slice(), [MENU_TOGGLE_ID]);
}

#[test]
fn escape_with_closed_menu_is_noop() {
    let vp = page();
    let mut nav = NavState::default();
    assert!(!nav.on_escape(&vp));
    assert!(!nav.menu_open);
    assert!(vp.focused.borrow().is_empty());
}

#[test]
fn second_escape_does_not_refocus() {
    let vp = page();
    let mut nav = NavState { menu_open: true, ..NavState::default() };
    nav.on_escape(&vp);
    nav.on_escape(&vp);
    assert_eq!(vp.focused.borrow().len(), 1);
}

#[test]
fn is_active_matches_current_section() {
    let nav = NavState { active_section: "why-us", ..NavState::default() };
    assert!(nav.is_active("why-us"));
    assert!(!nav.is_active("home"));
}

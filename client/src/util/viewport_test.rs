use super::*;

// =============================================================
// BrowserViewport outside the browser
// =============================================================

#[test]
fn browser_viewport_without_window_reports_top_of_page() {
    let vp = BrowserViewport;
    assert!(vp.scroll_y().abs() < f64::EPSILON);
    assert_eq!(vp.section_top("home"), None);
    assert!(!vp.matches_media("(prefers-color-scheme: dark)"));
}

#[test]
fn browser_viewport_side_effects_are_noops_without_window() {
    let vp = BrowserViewport;
    vp.scroll_to_section("contact");
    vp.focus("tab-cyber");
}

// =============================================================
// FakeViewport
// =============================================================

#[test]
fn fake_viewport_stacks_sections() {
    let vp = test_helpers::FakeViewport::with_sections(&["a", "b", "c"], 500.0);
    assert_eq!(vp.section_top("a"), Some(0.0));
    assert_eq!(vp.section_top("b"), Some(500.0));
    assert_eq!(vp.section_top("c"), Some(1000.0));
    assert_eq!(vp.section_top("d"), None);
}

#[test]
fn fake_viewport_records_requests() {
    let vp = test_helpers::FakeViewport::default();
    vp.scroll_to_section("about");
    vp.focus("menu-toggle");
    assert_eq!(vp.scrolled_to.borrow().as_slice(), ["about"]);
    assert_eq!(vp.focused.borrow().as_slice(), ["menu-toggle"]);
}

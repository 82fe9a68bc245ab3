#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

fn controller() -> NavController {
    NavController::new("solid", "translucent")
}

fn page_sections() -> Vec<Section> {
    vec![
        Section::new("home", 0.0, 600.0),
        Section::new("about", 600.0, 500.0),
        Section::new("skills", 1100.0, 700.0),
        Section::new("contact", 1800.0, 400.0),
    ]
}

fn menu_classes(effects: &[Effect]) -> Vec<(Target, bool)> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::SetClass { target, class, enabled } if *class == ACTIVE_CLASS => Some((target.clone(), *enabled)),
            _ => None,
        })
        .collect()
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn toggle_flips_menu_and_toggle_together() {
    let mut nav = controller();
    let effects = nav.toggle_mobile_menu();
    assert!(nav.menu_open());
    assert_eq!(menu_classes(&effects), vec![(Target::NavMenu, true), (Target::NavToggle, true)]);

    let effects = nav.toggle_mobile_menu();
    assert!(!nav.menu_open());
    assert_eq!(menu_classes(&effects), vec![(Target::NavMenu, false), (Target::NavToggle, false)]);
}

#[test]
fn close_is_idempotent() {
    let mut nav = controller();
    nav.toggle_mobile_menu();
    let once = nav.close_mobile_menu();
    let state_once = nav.menu_open();
    let twice = nav.close_mobile_menu();
    assert_eq!(once, twice);
    assert_eq!(state_once, nav.menu_open());
    assert!(!nav.menu_open());
}

#[test]
fn outside_click_closes_menu() {
    let mut nav = controller();
    nav.toggle_mobile_menu();
    assert!(nav.handle_document_click(true, false).is_empty());
    assert!(nav.handle_document_click(false, true).is_empty());
    assert!(nav.menu_open());

    let effects = nav.handle_document_click(false, false);
    assert!(!nav.menu_open());
    assert_eq!(menu_classes(&effects).len(), 2);
}

#[test]
fn resize_to_desktop_closes_menu() {
    let mut nav = controller();
    nav.toggle_mobile_menu();
    assert!(nav.handle_resize(768.0).is_empty());
    assert!(nav.menu_open());
    nav.handle_resize(769.0);
    assert!(!nav.menu_open());
}

// =============================================================
// Smooth scroll
// =============================================================

#[test]
fn anchor_fragment_only_accepts_hash_links() {
    assert_eq!(anchor_fragment("#about"), Some("#about"));
    assert_eq!(anchor_fragment("https://example.com/#about"), None);
    assert_eq!(anchor_fragment(""), None);
}

#[test]
fn smooth_scroll_subtracts_header_height() {
    let mut nav = controller();
    let effects = nav.smooth_scroll(Some(600.0));
    assert_eq!(effects[0], Effect::ScrollTo { top: 530.0, smooth: true });
}

#[test]
fn smooth_scroll_to_missing_target_still_closes_menu() {
    let mut nav = controller();
    nav.toggle_mobile_menu();
    let effects = nav.smooth_scroll(None);
    assert!(!effects.iter().any(|e| matches!(e, Effect::ScrollTo { .. })));
    assert!(!nav.menu_open());
}

// =============================================================
// Active link
// =============================================================

#[test]
fn active_section_uses_lookahead() {
    let sections = page_sections();
    assert_eq!(active_section(0.0, &sections), Some("home"));
    assert_eq!(active_section(499.0, &sections), Some("home"));
    assert_eq!(active_section(500.0, &sections), Some("about"));
    assert_eq!(active_section(1750.0, &sections), Some("contact"));
}

#[test]
fn active_section_is_none_past_last_section() {
    assert_eq!(active_section(5000.0, &page_sections()), None);
}

#[test]
fn overlapping_sections_last_one_wins() {
    let sections = vec![Section::new("a", 0.0, 1000.0), Section::new("b", 200.0, 300.0)];
    assert_eq!(active_section(150.0, &sections), Some("b"));
    assert_eq!(active_section(450.0, &sections), Some("a"));
}

#[test]
fn active_section_is_deterministic() {
    let sections = page_sections();
    for offset in [0.0, 250.0, 999.0, 1234.5, 2100.0] {
        assert_eq!(active_section(offset, &sections), active_section(offset, &sections));
    }
}

#[test]
fn update_active_link_emits_only_on_change() {
    let mut nav = controller();
    let sections = page_sections();
    let effects = nav.update_active_nav_link(0.0, &sections);
    assert_eq!(effects, vec![Effect::SetActiveLink { section: "home".to_owned() }]);
    assert!(nav.update_active_nav_link(10.0, &sections).is_empty());
    let effects = nav.update_active_nav_link(600.0, &sections);
    assert_eq!(effects, vec![Effect::SetActiveLink { section: "about".to_owned() }]);
    assert_eq!(nav.active_link(), Some("about"));
}

#[test]
fn update_active_link_keeps_previous_when_nothing_matches() {
    let mut nav = controller();
    let sections = page_sections();
    nav.update_active_nav_link(1900.0, &sections);
    assert!(nav.update_active_nav_link(9000.0, &sections).is_empty());
    assert_eq!(nav.active_link(), Some("contact"));
}

// =============================================================
// Navbar background
// =============================================================

#[test]
fn navbar_threshold_is_strictly_greater_than_fifty() {
    assert!(!navbar_is_solid(50.0));
    assert!(navbar_is_solid(50.5));
}

#[test]
fn navbar_flips_on_every_crossing() {
    let mut nav = controller();
    let first = nav.handle_navbar_scroll(0.0);
    assert_eq!(first, vec![Effect::style(Target::Navbar, "background", "translucent")]);
    assert!(nav.handle_navbar_scroll(20.0).is_empty());
    assert_eq!(nav.handle_navbar_scroll(51.0), vec![Effect::style(Target::Navbar, "background", "solid")]);
    assert_eq!(nav.handle_navbar_scroll(49.0), vec![Effect::style(Target::Navbar, "background", "translucent")]);
    assert_eq!(nav.handle_navbar_scroll(51.0), vec![Effect::style(Target::Navbar, "background", "solid")]);
}

use super::*;
use crate::fake::{FakeElement, elements, snapshot};

fn assert_exclusive(els: &ThemeElements<FakeElement>) {
    assert_ne!(els.sun.is_visible(), els.moon.is_visible(), "exactly one icon must be visible");
    assert_ne!(els.control.has_class("sun"), els.control.has_class("moon"), "exactly one icon class must be set");
    assert_eq!(els.sun.is_visible(), els.control.has_class("sun"));
}

// =============================================================
// ModeView
// =============================================================

#[test]
fn view_dark_shows_sun() {
    let config = ThemeConfig::default();
    let view = ModeView::new(Mode::Dark, &config);
    assert_eq!(view.icon, Icon::Sun);
    assert_eq!(view.label, "Change to light theme");
    assert_eq!(view.root_value, "dark");
}

#[test]
fn view_light_shows_moon() {
    let config = ThemeConfig::default();
    let view = ModeView::new(Mode::Light, &config);
    assert_eq!(view.icon, Icon::Moon);
    assert_eq!(view.label, "Change to dark theme");
    assert_eq!(view.root_value, "light");
}

#[test]
fn icon_classes_are_distinct() {
    assert_eq!(Icon::Sun.class(), "sun");
    assert_eq!(Icon::Moon.class(), "moon");
    assert_eq!(Icon::Sun.other(), Icon::Moon);
}

// =============================================================
// apply_mode
// =============================================================

#[test]
fn apply_dark_sets_all_facets() {
    let els = elements();
    apply_mode(Mode::Dark, &els, &ThemeConfig::default()).unwrap();

    assert_eq!(els.control.attribute("aria-label").as_deref(), Some("Change to light theme"));
    assert_eq!(els.sun.display().as_deref(), Some("block"));
    assert_eq!(els.moon.display().as_deref(), Some("none"));
    assert!(els.control.has_class("sun"));
    assert!(!els.control.has_class("moon"));
    assert_eq!(els.root.attribute("data-theme").as_deref(), Some("dark"));
}

#[test]
fn apply_light_sets_all_facets() {
    let els = elements();
    apply_mode(Mode::Light, &els, &ThemeConfig::default()).unwrap();

    assert_eq!(els.control.attribute("aria-label").as_deref(), Some("Change to dark theme"));
    assert_eq!(els.sun.display().as_deref(), Some("none"));
    assert_eq!(els.moon.display().as_deref(), Some("block"));
    assert!(els.control.has_class("moon"));
    assert!(!els.control.has_class("sun"));
    assert_eq!(els.root.attribute("data-theme").as_deref(), Some("light"));
}

#[test]
fn apply_twice_is_idempotent() {
    let config = ThemeConfig::default();
    let once = elements();
    apply_mode(Mode::Dark, &once, &config).unwrap();

    let twice = elements();
    apply_mode(Mode::Dark, &twice, &config).unwrap();
    apply_mode(Mode::Dark, &twice, &config).unwrap();

    assert_eq!(snapshot(&once), snapshot(&twice));
}

#[test]
fn apply_keeps_mutual_exclusion_across_switches() {
    let config = ThemeConfig::default();
    let els = elements();
    for mode in [Mode::Light, Mode::Dark, Mode::Dark, Mode::Light, Mode::Dark] {
        apply_mode(mode, &els, &config).unwrap();
        assert_exclusive(&els);
        assert_eq!(els.root.attribute("data-theme").as_deref(), Some(mode.as_str()));
    }
}

#[test]
fn apply_clears_preexisting_stale_class() {
    let els = elements();
    els.control.toggle_class("moon", true).unwrap();
    apply_mode(Mode::Dark, &els, &ThemeConfig::default()).unwrap();
    assert_exclusive(&els);
}

#[test]
fn apply_uses_configured_labels() {
    let config = ThemeConfig { label_to_light: "Helles Design".into(), ..ThemeConfig::default() };
    let els = elements();
    apply_mode(Mode::Dark, &els, &config).unwrap();
    assert_eq!(els.control.attribute("aria-label").as_deref(), Some("Helles Design"));
}

#[test]
fn apply_writes_remaining_facets_when_one_fails() {
    let mut els = elements();
    els.sun = FakeElement::broken();

    let err = apply_mode(Mode::Light, &els, &ThemeConfig::default()).unwrap_err();

    assert!(matches!(err, ThemeError::Dom(_)));
    assert_eq!(els.moon.display().as_deref(), Some("block"));
    assert!(els.control.has_class("moon"));
    assert_eq!(els.root.attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(els.sun.writes(), 1);
}

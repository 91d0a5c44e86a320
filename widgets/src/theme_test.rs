use super::*;
use crate::error::WidgetError;
use crate::store::MemoryStore;

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), WidgetError> {
        Err(WidgetError::Storage("quota exceeded".to_owned()))
    }
}

#[test]
fn missing_flag_defaults_to_light_with_sun() {
    let pref = ThemePreference::load(MemoryStore::new(), "theme");
    assert_eq!(pref.theme(), Theme::Light);
    assert_eq!(pref.icon(), ThemeIcon::Sun);
    assert!(!pref.body_class_active());
}

#[test]
fn stored_dark_applies_dark_with_moon() {
    let pref = ThemePreference::load(MemoryStore::with_entry("theme", "dark"), "theme");
    assert_eq!(pref.theme(), Theme::Dark);
    assert_eq!(pref.icon().class_name(), "fa-moon");
    assert!(pref.body_class_active());
}

#[test]
fn unrecognized_flag_is_light() {
    let pref = ThemePreference::load(MemoryStore::with_entry("theme", "Dark"), "theme");
    assert_eq!(pref.theme(), Theme::Light);
}

#[test]
fn toggle_persists_derived_theme() {
    let mut pref = ThemePreference::load(MemoryStore::new(), "theme");
    assert_eq!(pref.toggle(), Theme::Dark);
    assert_eq!(pref.store().get("theme").as_deref(), Some("dark"));
    assert_eq!(pref.icon(), ThemeIcon::Moon);
}

#[test]
fn toggle_twice_returns_to_light() {
    let mut pref = ThemePreference::load(MemoryStore::new(), "theme");
    pref.toggle();
    pref.toggle();
    assert_eq!(pref.theme(), Theme::Light);
    assert!(!pref.body_class_active());
    assert_eq!(pref.store().get("theme").as_deref(), Some("light"));
    assert_eq!(Theme::from_stored(pref.store().get("theme").as_deref()), Theme::Light);
}

#[test]
fn toggled_value_survives_reload() {
    let mut pref = ThemePreference::load(MemoryStore::new(), "theme");
    pref.toggle();
    let reloaded = ThemePreference::load(pref.store().clone(), "theme");
    assert_eq!(reloaded.theme(), Theme::Dark);
}

#[test]
fn failed_write_still_toggles_page_state() {
    let mut pref = ThemePreference::load(BrokenStore, "theme");
    assert_eq!(pref.toggle(), Theme::Dark);
    assert!(pref.body_class_active());
}

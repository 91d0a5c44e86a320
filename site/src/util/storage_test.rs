#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn get_is_absent_outside_browser() {
    assert_eq!(LocalStorage.get("theme"), None);
}

#[test]
fn set_succeeds_as_noop_outside_browser() {
    let mut store = LocalStorage;
    assert_eq!(store.set("theme", "dark"), Ok(()));
    assert_eq!(store.get("theme"), None);
}

#[test]
fn theme_preference_over_local_storage_defaults_to_light() {
    use widgets::theme::{Theme, ThemePreference};

    let mut pref = ThemePreference::load(LocalStorage, "theme");
    assert_eq!(pref.theme(), Theme::Light);
    assert_eq!(pref.toggle(), Theme::Dark);
}

//! Light/dark toggle button.

use leptos::prelude::*;
use widgets::config::SiteConfig;
use widgets::theme::ThemePreference;

use crate::util::storage::LocalStorage;
use crate::util::theme_dom::apply_body_class;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let pref = RwSignal::new(ThemePreference::load(LocalStorage, &config.theme_storage_key));
    apply_body_class(pref.with_untracked(ThemePreference::body_class_active));

    let on_toggle = move |_| {
        pref.update(|p| {
            p.toggle();
        });
        apply_body_class(pref.with_untracked(ThemePreference::body_class_active));
    };
    let icon_class = move || format!("fas {}", pref.with(|p| p.icon().class_name()));

    view! {
        <button id="mode-toggle" class="mode-toggle" title="Toggle theme" on:click=on_toggle>
            <i id="mode-icon" class=icon_class></i>
        </button>
    }
}

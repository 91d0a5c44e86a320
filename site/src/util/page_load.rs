//! Page-load hook: loader fade-out and counter arming.
//!
//! ARCHITECTURE
//! ============
//! `LoadSequencer` decides; this module supplies its inputs. The `load` event
//! (or an already-complete document) starts the sequence, a `gloo` timeout
//! hides the loader, and an `IntersectionObserver` reports counter visibility.

use leptos::prelude::*;
use widgets::config::SiteConfig;
use widgets::loader::LoadSequencer;

/// Class carried by every stat counter element.
pub const COUNTER_SELECTOR: &str = ".stat-number";
/// Attribute assigned to each counter so observer entries map back to a key.
pub const COUNTER_KEY_ATTR: &str = "data-counter-key";

/// Run `f` once the page has fully loaded.
#[cfg(feature = "csr")]
pub fn on_page_load(f: impl FnOnce() + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let complete = window.document().is_some_and(|d| d.ready_state() == "complete");
    if complete {
        f();
        return;
    }
    let cb = Closure::once_into_js(f);
    if let Err(e) = window.add_event_listener_with_callback("load", cb.unchecked_ref()) {
        leptos::logging::warn!("load listener not registered: {e:?}");
    }
}

#[cfg(feature = "csr")]
fn collect_counters() -> Vec<(usize, web_sys::Element)> {
    use wasm_bindgen::JsCast;

    let Some(list) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector_all(COUNTER_SELECTOR).ok())
    else {
        return Vec::new();
    };
    let mut counters = Vec::new();
    for i in 0..list.length() {
        let Some(node) = list.item(i) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        let key = counters.len();
        if let Err(e) = element.set_attribute(COUNTER_KEY_ATTR, &key.to_string()) {
            leptos::logging::warn!("counter {key} not keyed: {e:?}");
            continue;
        }
        counters.push((key, element));
    }
    counters
}

#[cfg(feature = "csr")]
fn start_counter(element: &web_sys::Element, config: &SiteConfig) {
    use widgets::counter::{CounterAnimation, parse_target};

    let raw = element.get_attribute("data-target").unwrap_or_default();
    match parse_target(&raw) {
        Ok(target) => crate::util::frame::animate_counter(element.clone(), CounterAnimation::from_config(target, config)),
        Err(e) => leptos::logging::warn!("skipping counter: {e}"),
    }
}

/// Arm the load sequence for the mounted page.
pub fn start_sequence(seq: RwSignal<LoadSequencer<usize>>, config: SiteConfig) {
    #[cfg(feature = "csr")]
    on_page_load(move || {
        use gloo_timers::callback::Timeout;

        let counters = collect_counters();
        seq.update(|s| s.on_load(counters.iter().map(|(key, _)| *key)));
        let delay_ms = seq.with_untracked(LoadSequencer::delay_ms);
        Timeout::new(delay_ms, move || seq.update(LoadSequencer::hide_loader)).forget();

        if counters.is_empty() {
            return;
        }
        let elements: Vec<web_sys::Element> = counters.into_iter().map(|(_, el)| el).collect();
        let threshold = seq.with_untracked(LoadSequencer::threshold);
        let result = crate::util::visibility::observe(&elements, threshold, move |element, ratio| {
            let Some(key) = element
                .get_attribute(COUNTER_KEY_ATTR)
                .and_then(|raw| raw.parse::<usize>().ok())
            else {
                return true;
            };
            match seq.try_update(|s| s.on_visible(&key, ratio)).flatten() {
                Some(_) => {
                    start_counter(element, &config);
                    true
                }
                None => false,
            }
        });
        if let Err(e) = result {
            leptos::logging::warn!("counter observer unavailable: {e:?}");
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (seq, config);
    }
}

//! `IntersectionObserver` wiring for visibility-triggered behavior.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Observe `elements` at a single `threshold`.
///
/// `on_change` receives each reported element with its visible fraction
/// (`None` when not intersecting) and returns `true` to stop observing that element.
/// The observer lives for the rest of the page session.
pub fn observe(
    elements: &[Element],
    threshold: f64,
    mut on_change: impl FnMut(&Element, Option<f64>) -> bool + 'static,
) -> Result<(), JsValue> {
    let cb = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let ratio = entry.is_intersecting().then(|| entry.intersection_ratio());
                let target = entry.target();
                if on_change(&target, ratio) {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)?;
    for element in elements {
        observer.observe(element);
    }
    cb.forget();
    Ok(())
}

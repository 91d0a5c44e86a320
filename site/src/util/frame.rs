//! `requestAnimationFrame` driver for counter animations.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use widgets::counter::CounterAnimation;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(holder: &FrameCallback) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let scheduled = holder
        .borrow()
        .as_ref()
        .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok());
    scheduled.unwrap_or(false)
}

/// Run `animation` to completion, writing each frame into `element`.
///
/// The first frame renders synchronously; later frames advance by the real
/// time between animation-frame timestamps.
pub fn animate_counter(element: web_sys::Element, mut animation: CounterAnimation) {
    let first = animation.step();
    element.set_text_content(Some(&first.text));
    if first.done {
        return;
    }

    let holder: FrameCallback = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let mut last_ts: Option<f64> = None;
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        let frame = match last_ts {
            Some(prev) => animation.advance(ts - prev),
            None => animation.step(),
        };
        last_ts = Some(ts);
        element.set_text_content(Some(&frame.text));
        if frame.done || !request_frame(&holder_for_cb) {
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);
    *holder.borrow_mut() = Some(cb);

    if !request_frame(&holder) {
        leptos::logging::warn!("requestAnimationFrame unavailable; counter left at first frame");
        holder.borrow_mut().take();
    }
}

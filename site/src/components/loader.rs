//! Full-page loading overlay.

use leptos::prelude::*;
use widgets::loader::{LOADER_HIDDEN_CLASS, LoadSequencer};

use crate::util::classes::class_names;

/// Overlay that gains the `hidden` class once the load sequencer says so.
#[component]
pub fn Loader() -> impl IntoView {
    let seq = expect_context::<RwSignal<LoadSequencer<usize>>>();
    let class = move || class_names("loader", LOADER_HIDDEN_CLASS, seq.with(LoadSequencer::is_loader_hidden));

    view! {
        <div class=class>
            <div class="loader__spinner"></div>
        </div>
    }
}

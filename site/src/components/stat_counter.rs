//! Numeric stat that counts up once scrolled into view.
//!
//! The element only carries markup. Observation and animation are armed by
//! the page-load hook in `util::page_load`, which finds every `.stat-number`.

use leptos::prelude::*;

#[component]
pub fn StatCounter(target: u64, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <span class="stat-number" data-target=target.to_string()>"0"</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

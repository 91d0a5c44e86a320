//! Collapsible "show more" wrapper for the minor skills list.

use leptos::prelude::*;
use widgets::expandable::{EXPANDED_CLASS, ExpandableSection};

use crate::util::classes::class_names;

#[component]
pub fn SkillsSection(children: Children) -> impl IntoView {
    let section = RwSignal::new(ExpandableSection::new());
    let wrapper_class =
        move || class_names("minor-skills-wrapper", EXPANDED_CLASS, section.with(ExpandableSection::is_expanded));

    view! {
        <div class=wrapper_class>{children()}</div>
        <button
            class="show-more-btn"
            on:click=move |_| {
                section.update(|s| {
                    s.toggle();
                });
            }
        >
            {move || section.with(ExpandableSection::label)}
        </button>
    }
}

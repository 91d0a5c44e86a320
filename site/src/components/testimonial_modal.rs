//! Detail modal for a single testimonial.

use leptos::prelude::*;
use widgets::modal::{ClickTarget, DetailModal, ModalEvent};

fn send(modal: RwSignal<DetailModal>, event: ModalEvent) {
    modal.update(|m| {
        m.handle(event);
    });
}

/// Modal bound to the carousel's [`DetailModal`] state.
///
/// Closes on the close button, a backdrop click, or `Escape` anywhere on the
/// page.
#[component]
pub fn TestimonialModal(modal: RwSignal<DetailModal>) -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        let _keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            send(modal, ModalEvent::KeyDown(ev.key()));
        });
    }

    let display = move || if modal.with(DetailModal::is_open) { "block" } else { "none" };
    let quote = move || modal.with(|m| m.content().map(|c| c.quote));
    let author_info = move || {
        modal.with(|m| m.content()).map(|c| {
            view! {
                <p>
                    <strong>{c.author}</strong>
                </p>
                <p>{c.title}</p>
                <p>{c.date}</p>
            }
        })
    };

    view! {
        <div
            id="testimonial-modal"
            class="modal"
            style:display=display
            on:click=move |_| send(modal, ModalEvent::Click(ClickTarget::Backdrop))
        >
            <div
                class="modal-content"
                on:click=move |ev| {
                    ev.stop_propagation();
                    send(modal, ModalEvent::Click(ClickTarget::Content));
                }
            >
                <span id="modal-close-btn" class="modal-close" title="Close" on:click=move |_| send(modal, ModalEvent::CloseButton)>
                    "\u{00d7}"
                </span>
                <p id="modal-text">{quote}</p>
                <div id="modal-author-info">{author_info}</div>
            </div>
        </div>
    }
}

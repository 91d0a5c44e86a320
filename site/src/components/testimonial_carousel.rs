//! Horizontal testimonial strip with previous/next paging.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use widgets::carousel::Carousel;
use widgets::modal::DetailModal;
use widgets::testimonials::{TESTIMONIALS, TestimonialRecord};

use crate::components::testimonial_modal::TestimonialModal;

#[component]
fn Slide(index: usize, record: &'static TestimonialRecord, modal: RwSignal<DetailModal>) -> impl IntoView {
    let id = index.to_string();
    let id_for_click = id.clone();
    let on_open = move |_| {
        modal.update(|m| {
            m.open(&id_for_click);
        });
    };

    view! {
        <div class="slide" data-testimonial-id=id on:click=on_open>
            <p class="slide__quote">{record.quote}</p>
            <p class="slide__author">{record.author}</p>
            <p class="slide__title">{record.title}</p>
        </div>
    }
}

/// Carousel over the static testimonial list plus its detail modal.
///
/// Renders nothing when there are no records.
#[component]
pub fn TestimonialCarousel() -> impl IntoView {
    let carousel = match Carousel::new(TESTIMONIALS.len()) {
        Ok(c) => RwSignal::new(c),
        Err(e) => {
            leptos::logging::warn!("testimonials disabled: {e}");
            return ().into_any();
        }
    };
    let modal = RwSignal::new(DetailModal::new(TESTIMONIALS));

    let on_prev = move |_| {
        carousel.update(|c| {
            c.previous();
        });
    };
    let on_next = move |_| {
        carousel.update(|c| {
            c.next();
        });
    };

    view! {
        <section class="testimonials">
            <div class="carousel">
                <button class="carousel-btn prev" title="Previous testimonial" on:click=on_prev>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <div class="carousel__viewport">
                    <div class="slider" style:transform=move || carousel.with(Carousel::transform)>
                        {TESTIMONIALS
                            .iter()
                            .enumerate()
                            .map(|(index, record)| view! { <Slide index=index record=record modal=modal/> })
                            .collect_view()}
                    </div>
                </div>
                <button class="carousel-btn next" title="Next testimonial" on:click=on_next>
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
            <TestimonialModal modal=modal/>
        </section>
    }
    .into_any()
}

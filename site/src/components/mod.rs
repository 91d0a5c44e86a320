//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component owns the state machine for one behavior in a local
//! `RwSignal`, except the loader, which reads the page-wide load sequencer
//! provided by the root.

pub mod loader;
pub mod skills_section;
pub mod stat_counter;
pub mod testimonial_carousel;
pub mod testimonial_modal;
pub mod theme_toggle;

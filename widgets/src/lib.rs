//! Page behavior state machines for the portfolio site.
//!
//! This crate is UI-framework agnostic: every behavior is a plain struct
//! driven by explicit method calls (clicks, frames, visibility changes), so
//! the logic runs and tests natively. The `site` crate owns the browser
//! bindings and forwards DOM events into these types.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`loader`] | Load sequencing: loader fade-out and one-shot visibility triggers |
//! | [`counter`] | Counter animation step function and short-number formatting |
//! | [`theme`] | Persisted light/dark preference |
//! | [`store`] | Key/value preference storage seam |
//! | [`expandable`] | "Show more" toggle |
//! | [`carousel`] | Wrapping slide index and strip transform |
//! | [`modal`] | Testimonial detail modal |
//! | [`testimonials`] | Static testimonial records |
//! | [`config`] | Tunable delays, thresholds, and keys |
//! | [`error`] | Crate error type |

pub mod carousel;
pub mod config;
pub mod counter;
pub mod error;
pub mod expandable;
pub mod loader;
pub mod modal;
pub mod store;
pub mod testimonials;
pub mod theme;

pub use error::WidgetError;

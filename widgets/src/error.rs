//! Error type shared by the widget state machines.
//!
//! None of these reach the visitor. The DOM layer logs them and falls back to
//! the matching no-op behavior.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WidgetError {
    /// `data-target` attribute had no leading digits.
    #[error("invalid counter target: {0:?}")]
    InvalidTarget(String),
    /// A carousel needs at least one slide.
    #[error("carousel has no slides")]
    EmptyCarousel,
    /// Preference storage rejected a read or write.
    #[error("storage error: {0}")]
    Storage(String),
    /// Configuration document failed to parse or validate.
    #[error("config error: {0}")]
    Config(String),
}

//! Testimonial carousel index and strip transform.
//!
//! Index changes wrap modulo the slide count. There is no debounce: each
//! activation moves one step and replaces the previous transform.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::error::WidgetError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    slide_count: usize,
    current_index: usize,
}

impl Carousel {
    /// # Errors
    ///
    /// Returns [`WidgetError::EmptyCarousel`] for zero slides.
    pub fn new(slide_count: usize) -> Result<Self, WidgetError> {
        if slide_count == 0 {
            return Err(WidgetError::EmptyCarousel);
        }
        Ok(Self { slide_count, current_index: 0 })
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn next(&mut self) -> usize {
        self.current_index = (self.current_index + 1) % self.slide_count;
        log::debug!("carousel next -> {}", self.current_index);
        self.current_index
    }

    pub fn previous(&mut self) -> usize {
        self.current_index = (self.current_index + self.slide_count - 1) % self.slide_count;
        log::debug!("carousel previous -> {}", self.current_index);
        self.current_index
    }

    /// Horizontal strip offset in percent of one slide width.
    #[must_use]
    pub fn offset_percent(&self) -> usize {
        self.current_index * 100
    }

    /// CSS `transform` value for the slide strip.
    #[must_use]
    pub fn transform(&self) -> String {
        format!("translateX(-{}%)", self.offset_percent())
    }
}

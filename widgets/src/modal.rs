//! Testimonial detail modal.
//!
//! Opening looks a record up by the slide's `data-testimonial-id`; an unknown
//! identifier leaves the modal closed. Closing only hides it, so the last shown
//! record stays populated until the next open replaces it.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::testimonials::TestimonialRecord;

/// Where a click inside the modal container landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the dialog.
    Backdrop,
    /// The dialog body.
    Content,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    CloseButton,
    Click(ClickTarget),
    KeyDown(String),
}

/// Text populated into the modal's quote and author-info fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModalContent {
    pub quote: &'static str,
    pub author: &'static str,
    pub title: &'static str,
    pub date: &'static str,
}

impl From<&TestimonialRecord> for ModalContent {
    fn from(record: &TestimonialRecord) -> Self {
        Self { quote: record.quote, author: record.author, title: record.title, date: record.date }
    }
}

/// Resolve a `data-testimonial-id` to an index into `records`.
///
/// Only canonical decimal indices match: `"1"` does, `"01"`, `"+1"` and
/// `" 1"` do not.
#[must_use]
pub fn lookup(records: &[TestimonialRecord], id: &str) -> Option<usize> {
    let Ok(index) = id.parse::<usize>() else {
        return None;
    };
    if index.to_string() != id {
        return None;
    }
    (index < records.len()).then_some(index)
}

#[derive(Clone, Debug)]
pub struct DetailModal {
    records: &'static [TestimonialRecord],
    visible: bool,
    shown: Option<ModalContent>,
}

impl DetailModal {
    #[must_use]
    pub fn new(records: &'static [TestimonialRecord]) -> Self {
        Self { records, visible: false, shown: None }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// Last populated record, kept across closes.
    #[must_use]
    pub fn content(&self) -> Option<ModalContent> {
        self.shown
    }

    /// Open for the slide identifier `id`. Returns whether a record matched.
    pub fn open(&mut self, id: &str) -> bool {
        match lookup(self.records, id) {
            Some(index) => self.open_index(index),
            None => {
                log::debug!("no testimonial for id {id:?}, modal unchanged");
                false
            }
        }
    }

    pub fn open_index(&mut self, index: usize) -> bool {
        let Some(record) = self.records.get(index) else {
            return false;
        };
        self.shown = Some(ModalContent::from(record));
        self.visible = true;
        log::debug!("modal opened for testimonial {index}");
        true
    }

    pub fn close(&mut self) {
        if self.visible {
            log::debug!("modal closed");
        }
        self.visible = false;
    }

    /// Apply a close-candidate event. Returns `true` if it closed the modal.
    pub fn handle(&mut self, event: ModalEvent) -> bool {
        let closes = match event {
            ModalEvent::CloseButton | ModalEvent::Click(ClickTarget::Backdrop) => true,
            ModalEvent::Click(ClickTarget::Content) => false,
            ModalEvent::KeyDown(key) => key == "Escape",
        };
        if !closes || !self.visible {
            return false;
        }
        self.close();
        true
    }
}

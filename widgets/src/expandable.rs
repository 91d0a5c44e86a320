//! "Show more" toggle for the minor skills list.

#[cfg(test)]
#[path = "expandable_test.rs"]
mod expandable_test;

/// Class applied to the wrapper while expanded.
pub const EXPANDED_CLASS: &str = "expanded";

const LABEL_COLLAPSED: &str = "Show More";
const LABEL_EXPANDED: &str = "Show Less";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExpandableSection {
    is_expanded: bool,
}

impl ExpandableSection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    /// Flip the state; returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_expanded = !self.is_expanded;
        self.is_expanded
    }

    /// Button text for the current state.
    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.is_expanded { LABEL_EXPANDED } else { LABEL_COLLAPSED }
    }
}

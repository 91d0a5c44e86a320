//! Page-load sequencing: loader fade-out plus one-shot visibility triggers.
//!
//! DESIGN
//! ======
//! The browser side owns the real timer and `IntersectionObserver`; this
//! module owns the decisions. The host reports the delay timer and visibility
//! ratios, and the sequencer answers whether the loader is hidden yet and
//! which counter (if any) should start animating.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::collections::BTreeSet;

use crate::config::SiteConfig;

/// CSS class added to `.loader` once the delay elapses.
pub const LOADER_HIDDEN_CLASS: &str = "hidden";

/// Lifecycle of the loading overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoaderPhase {
    /// Page has not reported `load` yet.
    #[default]
    Waiting,
    /// `load` fired; the host timer for the hide delay is pending.
    Delaying,
    /// Overlay is hidden.
    Hidden,
}

/// Set of keys observed until they first cross a visibility threshold.
///
/// Each key fires at most once; firing unregisters it.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityTracker<K: Ord> {
    threshold: f64,
    observed: BTreeSet<K>,
}

impl<K: Ord + Clone> VisibilityTracker<K> {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, observed: BTreeSet::new() }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn observe(&mut self, key: K) {
        self.observed.insert(key);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Report the visible fraction for `key`, `None` while it is not
    /// intersecting at all.
    ///
    /// Returns `true` (and stops observing the key) the first time an
    /// intersecting ratio reaches the threshold.
    pub fn on_visible(&mut self, key: &K, ratio: Option<f64>) -> bool {
        let Some(ratio) = ratio else {
            return false;
        };
        ratio >= self.threshold && self.observed.remove(key)
    }
}

/// Drives the loader overlay and arms counter triggers on page load.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadSequencer<K: Ord> {
    delay_ms: u32,
    phase: LoaderPhase,
    counters: VisibilityTracker<K>,
}

impl<K: Ord + Clone + std::fmt::Debug> LoadSequencer<K> {
    #[must_use]
    pub fn new(delay_ms: u32, threshold: f64) -> Self {
        Self {
            delay_ms,
            phase: LoaderPhase::Waiting,
            counters: VisibilityTracker::new(threshold),
        }
    }

    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.loader_delay_ms, config.counter_threshold)
    }

    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    #[must_use]
    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    #[must_use]
    pub fn is_loader_hidden(&self) -> bool {
        self.phase == LoaderPhase::Hidden
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.counters.threshold()
    }

    /// Counters still waiting for their first visibility trigger.
    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.counters.len()
    }

    /// Handle the page `load` event: start the loader delay and observe every
    /// counter. Repeated calls are ignored.
    pub fn on_load(&mut self, counters: impl IntoIterator<Item = K>) {
        if self.phase != LoaderPhase::Waiting {
            return;
        }
        self.phase = if self.delay_ms == 0 {
            LoaderPhase::Hidden
        } else {
            LoaderPhase::Delaying
        };
        for key in counters {
            self.counters.observe(key);
        }
        log::debug!(
            "page loaded: loader delay {} ms, {} counters observed",
            self.delay_ms,
            self.counters.len()
        );
    }

    /// The host's [`delay_ms`](Self::delay_ms) timer fired. Ignored before
    /// `load`.
    pub fn hide_loader(&mut self) {
        if self.phase == LoaderPhase::Delaying {
            log::debug!("loader hidden");
            self.phase = LoaderPhase::Hidden;
        }
    }

    /// Report a counter's visible fraction (`None` when not intersecting).
    /// Returns the key to animate the first time it crosses the threshold.
    pub fn on_visible(&mut self, key: &K, ratio: Option<f64>) -> Option<K> {
        if self.counters.on_visible(key, ratio) {
            log::debug!("counter {key:?} visible at {:.2}, triggering", ratio.unwrap_or_default());
            Some(key.clone())
        } else {
            None
        }
    }
}

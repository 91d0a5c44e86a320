//! Tunable timings, thresholds, and storage keys.
//!
//! Every field has a default matching the page's stock behavior, so an empty
//! JSON object `{}` is a valid configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::WidgetError;

pub const DEFAULT_LOADER_DELAY_MS: u32 = 1000;
pub const DEFAULT_COUNTER_THRESHOLD: f64 = 0.5;
pub const DEFAULT_COUNTER_DURATION_MS: f64 = 2000.0;
pub const DEFAULT_FRAME_INTERVAL_MS: f64 = 16.0;
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Delay between the page `load` event and hiding the loader overlay.
    pub loader_delay_ms: u32,
    /// Visible fraction at which a counter starts animating.
    pub counter_threshold: f64,
    /// Nominal counter animation length.
    pub counter_duration_ms: f64,
    /// Nominal frame length used to derive the per-frame increment.
    pub frame_interval_ms: f64,
    /// `localStorage` key holding the theme flag.
    pub theme_storage_key: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            loader_delay_ms: DEFAULT_LOADER_DELAY_MS,
            counter_threshold: DEFAULT_COUNTER_THRESHOLD,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Config`] when the document is malformed or a
    /// value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, WidgetError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| WidgetError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), WidgetError> {
        if !(0.0..=1.0).contains(&self.counter_threshold) {
            return Err(WidgetError::Config(format!(
                "counter_threshold must be within [0, 1], got {}",
                self.counter_threshold
            )));
        }
        if !(self.frame_interval_ms > 0.0) {
            return Err(WidgetError::Config(format!(
                "frame_interval_ms must be positive, got {}",
                self.frame_interval_ms
            )));
        }
        if !(self.counter_duration_ms >= 0.0) {
            return Err(WidgetError::Config(format!(
                "counter_duration_ms must not be negative, got {}",
                self.counter_duration_ms
            )));
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(WidgetError::Config("theme_storage_key must not be empty".to_owned()));
        }
        Ok(())
    }
}
